//! Session repository implementation.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use allauth_core::error::{AppError, ErrorKind};
use allauth_core::result::AppResult;
use allauth_entity::Session;

use crate::store::SessionBackend;

/// Repository for login sessions.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionBackend for SessionRepository {
    async fn create(&self, user_id: i64, ttl: Duration) -> AppResult<Session> {
        let now = Utc::now();
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (session_key, user_id, created_at, expires_at) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::new_v4().simple().to_string())
        .bind(user_id)
        .bind(now)
        .bind(now + ttl)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    async fn find(&self, session_key: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE session_key = $1")
            .bind(session_key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    async fn delete(&self, session_key: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE session_key = $1")
            .bind(session_key)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
