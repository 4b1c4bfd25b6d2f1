//! User repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use allauth_core::error::{AppError, ErrorKind};
use allauth_core::result::AppResult;
use allauth_entity::{EmailAddress, SocialAccount, User, UserProfile, UserRecord};

use crate::store::UserDirectory;

/// Repository for user accounts and the add-on tables hanging off them.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All users ordered by id.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Users whose username is in `usernames`, ordered by id.
    pub async fn find_by_usernames(&self, usernames: &[String]) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ANY($1) ORDER BY id")
            .bind(usernames)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find users by username", e)
            })
    }

    /// Profiles of the given users.
    pub async fn find_profiles(&self, user_ids: &[i64]) -> AppResult<Vec<UserProfile>> {
        sqlx::query_as::<_, UserProfile>(
            "SELECT user_id, title, institution, country, study_area, executive_summary \
             FROM user_profiles WHERE user_id = ANY($1)",
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user profiles", e))
    }

    /// Linked e-mail addresses of the given users, ordered by id.
    pub async fn find_email_addresses(&self, user_ids: &[i64]) -> AppResult<Vec<EmailAddress>> {
        sqlx::query_as::<_, EmailAddress>(
            "SELECT id, user_id, email, verified, \"primary\" \
             FROM account_emailaddress WHERE user_id = ANY($1) ORDER BY id",
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load e-mail addresses", e)
        })
    }

    /// Linked social accounts of the given users, ordered by id.
    pub async fn find_social_accounts(&self, user_ids: &[i64]) -> AppResult<Vec<SocialAccount>> {
        sqlx::query_as::<_, SocialAccount>(
            "SELECT id, user_id, uid, provider, date_joined, last_login, extra_data \
             FROM socialaccount_socialaccount WHERE user_id = ANY($1) ORDER BY id",
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load social accounts", e)
        })
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn load_records(&self, usernames: &[String]) -> AppResult<Vec<UserRecord>> {
        let users = if usernames.is_empty() {
            self.find_all().await?
        } else {
            self.find_by_usernames(usernames).await?
        };
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        let profiles = self.find_profiles(&ids).await?;
        let emails = self.find_email_addresses(&ids).await?;
        let socials = self.find_social_accounts(&ids).await?;

        Ok(assemble_records(users, profiles, emails, socials))
    }
}

/// Group child rows under their users, keeping the users' order and the
/// children's query order.
pub(crate) fn assemble_records(
    users: Vec<User>,
    profiles: Vec<UserProfile>,
    emails: Vec<EmailAddress>,
    socials: Vec<SocialAccount>,
) -> Vec<UserRecord> {
    let mut profiles: HashMap<i64, UserProfile> =
        profiles.into_iter().map(|p| (p.user_id, p)).collect();

    let mut emails_by_user: HashMap<i64, Vec<EmailAddress>> = HashMap::new();
    for email in emails {
        emails_by_user.entry(email.user_id).or_default().push(email);
    }

    let mut socials_by_user: HashMap<i64, Vec<SocialAccount>> = HashMap::new();
    for social in socials {
        socials_by_user.entry(social.user_id).or_default().push(social);
    }

    users
        .into_iter()
        .map(|user| UserRecord {
            profile: profiles.remove(&user.id),
            email_addresses: emails_by_user.remove(&user.id).unwrap_or_default(),
            social_accounts: socials_by_user.remove(&user.id).unwrap_or_default(),
            user,
        })
        .collect()
}
