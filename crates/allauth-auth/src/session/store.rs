//! Session login/lookup/logout on top of the configured stores.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use tracing::{debug, info};

use allauth_core::config::SessionConfig;
use allauth_core::error::AppError;
use allauth_core::result::AppResult;
use allauth_database::{SessionBackend, UserDirectory};
use allauth_entity::Session;

use super::user::RequestUser;

/// Resolves session keys to users and ends sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<dyn SessionBackend>,
    users: Arc<dyn UserDirectory>,
    ttl: TimeDelta,
}

impl SessionStore {
    /// Creates a new session store.
    ///
    /// Fails when `max_age_seconds` is negative or too large to be added
    /// to the current time.
    pub fn new(
        sessions: Arc<dyn SessionBackend>,
        users: Arc<dyn UserDirectory>,
        config: &SessionConfig,
    ) -> AppResult<Self> {
        let ttl = TimeDelta::try_seconds(config.max_age_seconds)
            .filter(|ttl| *ttl >= TimeDelta::zero())
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "session.max_age_seconds out of range: {}",
                    config.max_age_seconds
                ))
            })?;

        Ok(Self {
            sessions,
            users,
            ttl,
        })
    }

    /// Starts a session for the user.
    pub async fn login(&self, user_id: i64) -> AppResult<Session> {
        let session = self.sessions.create(user_id, self.ttl).await?;
        info!(user_id, "Session started");
        Ok(session)
    }

    /// Resolves a session key to the request user.
    ///
    /// Unknown or expired sessions and sessions whose user no longer
    /// exists resolve to [`RequestUser::Anonymous`]. The user's active flag
    /// is not checked here.
    pub async fn load_user(&self, session_key: &str) -> AppResult<RequestUser> {
        let Some(session) = self.sessions.find(session_key).await? else {
            debug!("Unknown session key");
            return Ok(RequestUser::Anonymous);
        };

        if session.is_expired_at(Utc::now()) {
            debug!(user_id = session.user_id, "Session expired");
            return Ok(RequestUser::Anonymous);
        }

        match self.users.find_by_id(session.user_id).await? {
            Some(user) => Ok(RequestUser::Authenticated {
                session_key: session.session_key,
                user,
            }),
            None => Ok(RequestUser::Anonymous),
        }
    }

    /// Ends the session. Ending an unknown session is not an error.
    pub async fn logout(&self, session_key: &str) -> AppResult<()> {
        if self.sessions.delete(session_key).await? {
            info!("Session ended");
        }
        Ok(())
    }
}
