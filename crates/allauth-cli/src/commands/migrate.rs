//! Database migration command.

use allauth_core::config::{AppConfig, DatabaseBackend};
use allauth_core::error::AppError;
use allauth_database::{connect_pool, migration};

use crate::output;

/// Execute the migrate command
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    if config.database.backend == DatabaseBackend::Memory {
        output::print_success("In-memory backend selected, nothing to migrate.");
        return Ok(());
    }

    let pool = connect_pool(&config.database).await?;

    migration::run_migrations(&pool).await?;
    output::print_success("All migrations applied successfully.");

    Ok(())
}
