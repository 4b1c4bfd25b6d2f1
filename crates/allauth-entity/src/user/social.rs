//! Social-login accounts linked to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A linked social account (OAuth/OpenID provider identity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SocialAccount {
    /// Primary key.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Identifier of the user at the provider.
    pub uid: String,
    /// Provider identifier, e.g. `github`.
    pub provider: String,
    /// When the account was linked.
    pub date_joined: DateTime<Utc>,
    /// Last login through this provider.
    pub last_login: Option<DateTime<Utc>>,
    /// Provider-supplied data, stored verbatim.
    pub extra_data: serde_json::Value,
}
