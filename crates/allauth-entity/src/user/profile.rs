//! Optional institutional profile attached to a user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Free-text profile of a user. At most one per user, possibly none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    /// Owning user.
    pub user_id: i64,
    /// Title or position.
    pub title: String,
    /// Affiliated institution.
    pub institution: String,
    /// ISO 3166-1 alpha-2 country code, blank if unknown.
    pub country: String,
    /// Declared study area.
    pub study_area: String,
    /// Executive summary of the intended use.
    pub executive_summary: String,
}
