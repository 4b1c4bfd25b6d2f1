//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus environment variables. Each sub-module
//! represents a logical configuration section, and every field carries a
//! default so an empty source still yields a usable configuration.

pub mod access;
pub mod account;
pub mod app;
pub mod database;
pub mod logging;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::access::{AccessChannel, AccessConfig, AccessLevel};
pub use self::account::{AccountAdapter, AccountConfig};
pub use self::app::ServerConfig;
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::logging::LoggingConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Prefix of the environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "EOXS_ALLAUTH";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// configuration sources (`config/default` + environment overlay +
/// `EOXS_ALLAUTH__*` environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// User and session store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session cookie settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Account adapter settings.
    #[serde(default)]
    pub account: AccountConfig,
    /// Access logger settings.
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}` (both optional) and
    /// environment variables such as `EOXS_ALLAUTH__SERVER__PORT=9000`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
