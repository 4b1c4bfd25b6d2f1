//! In-memory user and session store for development and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use allauth_core::error::AppError;
use allauth_core::result::AppResult;
use allauth_entity::{EmailAddress, Session, SocialAccount, User, UserProfile, UserRecord};

use crate::repositories::user::assemble_records;
use crate::store::{SessionBackend, UserDirectory};

#[derive(Debug, Default)]
struct InnerState {
    /// Users keyed (and therefore ordered) by id.
    users: BTreeMap<i64, User>,
    profiles: HashMap<i64, UserProfile>,
    email_addresses: Vec<EmailAddress>,
    social_accounts: Vec<SocialAccount>,
    sessions: HashMap<String, Session>,
}

/// Process-local store guarded by a Tokio `RwLock`.
///
/// Suitable for single-node development and tests only; nothing survives a
/// restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a user.
    pub async fn insert_user(&self, user: User) {
        self.state.write().await.users.insert(user.id, user);
    }

    /// Inserts or replaces the profile of `profile.user_id`.
    pub async fn insert_profile(&self, profile: UserProfile) {
        self.state
            .write()
            .await
            .profiles
            .insert(profile.user_id, profile);
    }

    /// Links an e-mail address.
    pub async fn insert_email_address(&self, email: EmailAddress) {
        self.state.write().await.email_addresses.push(email);
    }

    /// Links a social account.
    pub async fn insert_social_account(&self, account: SocialAccount) {
        self.state.write().await.social_accounts.push(account);
    }

    /// Sets the active flag of a user.
    pub async fn set_active(&self, user_id: i64, is_active: bool) -> AppResult<()> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        user.is_active = is_active;
        Ok(())
    }

    /// Number of live sessions, expired ones included.
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn load_records(&self, usernames: &[String]) -> AppResult<Vec<UserRecord>> {
        let state = self.state.read().await;

        let users: Vec<User> = state
            .users
            .values()
            .filter(|u| usernames.is_empty() || usernames.contains(&u.username))
            .cloned()
            .collect();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();

        let profiles = state
            .profiles
            .values()
            .filter(|p| ids.contains(&p.user_id))
            .cloned()
            .collect();
        let emails = state
            .email_addresses
            .iter()
            .filter(|e| ids.contains(&e.user_id))
            .cloned()
            .collect();
        let socials = state
            .social_accounts
            .iter()
            .filter(|s| ids.contains(&s.user_id))
            .cloned()
            .collect();

        Ok(assemble_records(users, profiles, emails, socials))
    }
}

#[async_trait]
impl SessionBackend for MemoryStore {
    async fn create(&self, user_id: i64, ttl: Duration) -> AppResult<Session> {
        let now = Utc::now();
        let session = Session {
            session_key: Uuid::new_v4().simple().to_string(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        };
        self.state
            .write()
            .await
            .sessions
            .insert(session.session_key.clone(), session.clone());
        Ok(session)
    }

    async fn find(&self, session_key: &str) -> AppResult<Option<Session>> {
        Ok(self.state.read().await.sessions.get(session_key).cloned())
    }

    async fn delete(&self, session_key: &str) -> AppResult<bool> {
        Ok(self
            .state
            .write()
            .await
            .sessions
            .remove(session_key)
            .is_some())
    }
}
