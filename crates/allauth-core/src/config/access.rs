//! Access logger configuration.

use serde::{Deserialize, Serialize};

/// Log channel (tracing target) the access logger writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessChannel {
    /// The `access` channel.
    #[default]
    #[serde(rename = "access")]
    Access,
    /// The historical `eoxs_allauth.access` channel.
    #[serde(rename = "eoxs_allauth.access")]
    Legacy,
}

impl AccessChannel {
    /// Returns the channel name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Legacy => "eoxs_allauth.access",
        }
    }
}

/// Severity of an access log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

/// Access logger configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Target channel.
    #[serde(default)]
    pub channel: AccessChannel,
    /// Level for requests of authenticated users with status < 400.
    #[serde(default)]
    pub level_authenticated: AccessLevel,
    /// Level for anonymous requests with status < 400.
    #[serde(default)]
    pub level_unauthenticated: AccessLevel,
}
