//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use chrono::{TimeZone, Utc};
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use allauth_api::middleware::access_log::{AccessLogger, AccessRecord, AccessSink};
use allauth_api::{AppState, build_app};
use allauth_core::config::{AccessLevel, AccountAdapter, AppConfig, DatabaseBackend};
use allauth_database::{MemoryStore, Stores};
use allauth_entity::User;

/// Access sink collecting every emitted line.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(AccessLevel, AccessRecord)>>,
}

impl AccessSink for RecordingSink {
    fn log(&self, level: AccessLevel, record: &AccessRecord) {
        self.lines
            .lock()
            .expect("sink poisoned")
            .push((level, record.clone()));
    }
}

impl RecordingSink {
    /// Drain the recorded lines.
    pub fn take(&self) -> Vec<(AccessLevel, AccessRecord)> {
        std::mem::take(&mut *self.lines.lock().expect("sink poisoned"))
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for logging users in directly
    pub state: AppState,
    /// Backing store for seeding and inspection
    pub store: MemoryStore,
    /// Access lines emitted so far
    pub access_log: Arc<RecordingSink>,
}

impl TestApp {
    /// Create a new test application with signup closed.
    pub async fn new() -> Self {
        Self::with_adapter(AccountAdapter::NoNewUsers).await
    }

    /// Create a new test application with the given account adapter.
    pub async fn with_adapter(adapter: AccountAdapter) -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.account.adapter = adapter;
        config.access.level_unauthenticated = AccessLevel::Debug;

        let store = MemoryStore::new();
        let access_log = Arc::new(RecordingSink::default());
        let logger = AccessLogger::new(access_log.clone(), &config.access);

        let state = AppState::new(config, Stores::memory(store.clone()))
            .expect("Failed to build app state")
            .with_access_logger(logger);

        Self {
            router: build_app(state.clone()),
            state,
            store,
            access_log,
        }
    }

    /// Create a test user
    pub async fn create_test_user(&self, id: i64, username: &str) -> User {
        let joined = Utc
            .with_ymd_and_hms(2020, 1, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let mut user = User::new(id, username, joined);
        user.email = format!("{}@test.com", username);
        self.store.insert_user(user.clone()).await;
        user
    }

    /// Start a session and return its key
    pub async fn login(&self, user_id: i64) -> String {
        self.state
            .session_store
            .login(user_id)
            .await
            .expect("Failed to start session")
            .session_key
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        session_key: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(key) = session_key {
            req = req.header(header::COOKIE, format!("sessionid={}", key));
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when empty or not JSON
    pub body: Value,
    /// `Set-Cookie` header values
    pub set_cookie: Vec<String>,
}

impl TestResponse {
    /// Whether the response expires the session cookie
    pub fn clears_session(&self) -> bool {
        self.set_cookie
            .iter()
            .any(|c| c.starts_with("sessionid=") && c.contains("Max-Age=0"))
    }
}
