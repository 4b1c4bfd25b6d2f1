//! Account adapter configuration.

use serde::{Deserialize, Serialize};

/// The account adapter deciding signup policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountAdapter {
    /// Public self-signup is refused.
    #[default]
    NoNewUsers,
    /// The add-on's stock behaviour: signup is open.
    Default,
}

/// Account adapter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Selected account adapter.
    #[serde(default)]
    pub adapter: AccountAdapter,
}
