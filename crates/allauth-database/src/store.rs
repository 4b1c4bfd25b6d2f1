//! Storage traits for users and sessions, and the handle bundle built from
//! configuration.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use tracing::info;

use allauth_core::config::{DatabaseBackend, DatabaseConfig};
use allauth_core::result::AppResult;
use allauth_entity::{Session, User, UserRecord};

use crate::connection::connect_pool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{SessionRepository, UserRepository};

/// Read access to user accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Load full user records ordered by id.
    ///
    /// An empty `usernames` slice selects every user. Otherwise only users
    /// whose username matches exactly are returned; unknown names are
    /// ignored.
    async fn load_records(&self, usernames: &[String]) -> AppResult<Vec<UserRecord>>;
}

/// Persistence for login sessions.
#[async_trait]
pub trait SessionBackend: Send + Sync + 'static {
    /// Create a session for the user, valid for `ttl`.
    async fn create(&self, user_id: i64, ttl: Duration) -> AppResult<Session>;

    /// Find a session by key, expired or not.
    async fn find(&self, session_key: &str) -> AppResult<Option<Session>>;

    /// Delete a session. Returns `true` if a row was removed.
    async fn delete(&self, session_key: &str) -> AppResult<bool>;
}

/// The user and session stores selected by configuration.
#[derive(Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserDirectory>,
    /// Login sessions.
    pub sessions: Arc<dyn SessionBackend>,
}

impl Stores {
    /// Open the configured backend. For PostgreSQL this connects the pool
    /// and, when `migrate` is set, applies pending migrations.
    pub async fn open(config: &DatabaseConfig, migrate: bool) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = connect_pool(config).await?;
                if migrate {
                    run_migrations(&pool).await?;
                }
                Ok(Self {
                    users: Arc::new(UserRepository::new(pool.clone())),
                    sessions: Arc::new(SessionRepository::new(pool)),
                })
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory user and session store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Both stores backed by one in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            sessions: store,
        }
    }
}
