//! CLI command definitions and dispatch.

pub mod export_users;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use allauth_core::config::AppConfig;
use allauth_core::error::AppError;

/// allauth: user export and session enforcement for the EOX allauth add-on
#[derive(Debug, Parser)]
#[command(name = "allauth-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load from `config/{env}`
    #[arg(short, long, global = true, env = "EOXS_ALLAUTH_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export users with profiles and linked accounts as JSON
    #[command(name = "auth-export-users")]
    AuthExportUsers(export_users::ExportUsersArgs),
    /// Apply pending database migrations
    Migrate,
    /// Start the HTTP server
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.env)?;
        match &self.command {
            Commands::AuthExportUsers(args) => export_users::execute(args, config).await,
            Commands::Migrate => migrate::execute(config).await,
            Commands::Serve(args) => serve::execute(args, config).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {}", e)))
}
