//! The user attached to an incoming request.

use allauth_entity::User;

/// Who is making the request, as resolved from the session cookie.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestUser {
    /// No valid session.
    #[default]
    Anonymous,
    /// A session bound to this user.
    Authenticated {
        /// The session key the user was resolved from.
        session_key: String,
        /// The user row as loaded for this request.
        user: User,
    },
}

impl RequestUser {
    /// Whether the request carries a valid session.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Anonymous => None,
        }
    }

    /// Username of the authenticated user, if any.
    pub fn username(&self) -> Option<&str> {
        self.user().map(|u| u.username.as_str())
    }

    /// Session key of the authenticated user, if any.
    pub fn session_key(&self) -> Option<&str> {
        match self {
            Self::Authenticated { session_key, .. } => Some(session_key),
            Self::Anonymous => None,
        }
    }

    /// Authenticated, but the account has been deactivated since login.
    pub fn is_deactivated(&self) -> bool {
        self.user().is_some_and(|u| !u.is_active)
    }
}
