//! User export service.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use allauth_core::result::AppResult;
use allauth_database::UserDirectory;

use super::serialize::serialize_user;
use super::writer::{ExportDestination, render_json};

/// Exports user accounts with their profiles and linked accounts.
#[derive(Clone)]
pub struct ExportService {
    users: Arc<dyn UserDirectory>,
}

impl ExportService {
    /// Creates a new export service.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    /// Serializes the selected users. No usernames selects everyone;
    /// unknown usernames are skipped silently.
    pub async fn collect(&self, usernames: &[String]) -> AppResult<Vec<Value>> {
        let records = self.users.load_records(usernames).await?;
        Ok(records.iter().map(serialize_user).collect())
    }

    /// Serializes the selected users and writes the JSON document.
    /// Returns the number of exported users.
    pub async fn export(
        &self,
        usernames: &[String],
        destination: &ExportDestination,
    ) -> AppResult<usize> {
        let records = self.collect(usernames).await?;
        let document = render_json(&records)?;
        destination.write(&document).await?;

        info!(
            count = records.len(),
            destination = %destination,
            "Exported users"
        );
        Ok(records.len())
    }
}
