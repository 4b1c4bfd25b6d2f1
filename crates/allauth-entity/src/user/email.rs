//! E-mail addresses linked to a user by the account add-on.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A linked e-mail address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EmailAddress {
    /// Primary key.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// The address.
    pub email: String,
    /// Whether the address was confirmed.
    pub verified: bool,
    /// Whether this is the user's primary address.
    pub primary: bool,
}
