//! `auth-export-users`: dump users with their profiles, e-mail addresses
//! and social accounts as JSON.

use clap::Args;

use allauth_core::config::AppConfig;
use allauth_core::error::AppError;
use allauth_database::Stores;
use allauth_service::{ExportDestination, ExportService};

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportUsersArgs {
    /// Usernames to export; all users when omitted
    #[arg(value_name = "USERNAME")]
    pub usernames: Vec<String>,

    /// Output file, `-` for standard output
    #[arg(short, long = "file-name", value_name = "PATH", default_value = "-")]
    pub file_name: String,
}

/// Execute the export command
pub async fn execute(args: &ExportUsersArgs, config: AppConfig) -> Result<(), AppError> {
    let stores = Stores::open(&config.database, false).await?;
    let destination = ExportDestination::parse(&args.file_name);

    ExportService::new(stores.users)
        .export(&args.usernames, &destination)
        .await?;

    Ok(())
}
