//! Aggregate of a user and the rows hanging off it.

use serde::{Deserialize, Serialize};

use super::{EmailAddress, SocialAccount, User, UserProfile};

/// A user together with its profile and linked accounts, as read for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// The user row.
    pub user: User,
    /// Profile, absent when the user never filled one in.
    pub profile: Option<UserProfile>,
    /// Linked e-mail addresses.
    pub email_addresses: Vec<EmailAddress>,
    /// Linked social accounts.
    pub social_accounts: Vec<SocialAccount>,
}

impl UserRecord {
    /// Wraps a bare user with no profile and no linked accounts.
    pub fn bare(user: User) -> Self {
        Self {
            user,
            profile: None,
            email_addresses: Vec::new(),
            social_accounts: Vec::new(),
        }
    }
}
