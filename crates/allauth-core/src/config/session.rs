//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Session cookie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session key.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Lifetime of newly created sessions in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_seconds: default_max_age(),
        }
    }
}

fn default_cookie_name() -> String {
    "sessionid".to_string()
}

// two weeks
fn default_max_age() -> i64 {
    1_209_600
}
