//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user account owned by the user-management subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Primary key.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Password hash in `algorithm$params$salt$hash` form. Opaque here.
    #[serde(skip_serializing)]
    pub password: String,
    /// Whether the account may be used. Admins clear this to deactivate.
    pub is_active: bool,
    /// When the account was created.
    pub date_joined: DateTime<Utc>,
    /// Last successful login, if any.
    pub last_login: Option<DateTime<Utc>>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Copy of the primary e-mail address.
    pub email: String,
}

impl User {
    /// Creates an active user with blank optional fields.
    pub fn new(id: i64, username: impl Into<String>, date_joined: DateTime<Utc>) -> Self {
        Self {
            id,
            username: username.into(),
            password: String::new(),
            is_active: true,
            date_joined,
            last_login: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
        }
    }
}
