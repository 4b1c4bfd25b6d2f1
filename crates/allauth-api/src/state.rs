//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use allauth_auth::adapter::{AccountPolicy, build_account_policy};
use allauth_auth::SessionStore;
use allauth_core::config::AppConfig;
use allauth_core::result::AppResult;
use allauth_database::Stores;

use crate::middleware::access_log::AccessLogger;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session lookup and logout
    pub session_store: SessionStore,
    /// Signup policy
    pub account_policy: Arc<dyn AccountPolicy>,
    /// Access logger wrapping the routes
    pub access_logger: AccessLogger,
}

impl AppState {
    /// Wires the state from configuration and opened stores.
    pub fn new(config: AppConfig, stores: Stores) -> AppResult<Self> {
        let session_store = SessionStore::new(stores.sessions, stores.users, &config.session)?;
        let account_policy = build_account_policy(&config.account);
        let access_logger = AccessLogger::from_config(&config.access);

        Ok(Self {
            config: Arc::new(config),
            session_store,
            account_policy,
            access_logger,
        })
    }

    /// Replaces the access logger, e.g. to inject a different sink.
    pub fn with_access_logger(mut self, access_logger: AccessLogger) -> Self {
        self.access_logger = access_logger;
        self
    }
}
