//! User directory behaviour settings.

use serde::{Deserialize, Serialize};

/// Settings for listing and validating user records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersConfig {
    /// Page size used when a list request omits `limit`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Enforce name length, email and mobile formats on create/update.
    ///
    /// Off by default: format checks belong to the form that submits the
    /// record, and the store accepts anything that passes presence checks.
    #[serde(default)]
    pub strict_validation: bool,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            strict_validation: false,
        }
    }
}

fn default_page_size() -> u64 {
    10
}
