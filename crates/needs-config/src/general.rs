//! General application configuration.

use serde::{Deserialize, Serialize};

/// Frequency given to needs added without an explicit one.
fn default_frequency() -> String {
    "weekly".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Optional JSON translation catalog for resource display names.
    #[serde(default)]
    pub catalog_file: String,

    /// Frequency label used by `needs add` when none is given.
    #[serde(default = "default_frequency")]
    pub default_frequency: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            catalog_file: String::new(),
            default_frequency: default_frequency(),
        }
    }
}

impl GeneralConfig {
    /// Whether a translation catalog is configured.
    pub fn has_catalog(&self) -> bool {
        !self.catalog_file.is_empty()
    }
}
