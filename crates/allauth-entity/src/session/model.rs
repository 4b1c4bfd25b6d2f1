//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A server-side login session keyed by the cookie value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Opaque session key carried in the session cookie.
    pub session_key: String,
    /// The authenticated user.
    pub user_id: i64,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session has expired at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_expiry_boundary() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let session = Session {
            session_key: "abc".to_string(),
            user_id: 1,
            created_at: created,
            expires_at: created + Duration::hours(1),
        };
        assert!(!session.is_expired_at(created));
        assert!(session.is_expired_at(created + Duration::hours(1)));
    }
}
