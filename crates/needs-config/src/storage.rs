//! Needs file locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default needs file, relative to the working directory.
fn default_needs_file() -> String {
    "minimum_needs.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Needs file used when no profile is selected.
    #[serde(default = "default_needs_file")]
    pub needs_file: String,

    /// Directory of `<profile>.json` needs files.
    #[serde(default)]
    pub profiles_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            needs_file: default_needs_file(),
            profiles_dir: String::new(),
        }
    }
}

impl StorageConfig {
    /// Check if a profiles directory is configured.
    pub fn has_profiles_dir(&self) -> bool {
        !self.profiles_dir.is_empty()
    }

    /// Path of the needs file for `profile` inside the profiles directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` if no profiles directory is set, and
    /// `ConfigError::InvalidValue` if the profile name is empty or contains a
    /// path separator.
    pub fn profile_path(&self, profile: &str) -> Result<PathBuf, ConfigError> {
        if !self.has_profiles_dir() {
            return Err(ConfigError::NotConfigured {
                section: "storage.profiles_dir".to_string(),
            });
        }
        if profile.is_empty() || profile.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "profile".to_string(),
                reason: format!("'{profile}' is not a plain profile name"),
            });
        }
        Ok(PathBuf::from(&self.profiles_dir).join(format!("{profile}.json")))
    }

    /// The needs file to use: the profile's file when one is named, otherwise
    /// `needs_file`.
    ///
    /// # Errors
    ///
    /// See [`StorageConfig::profile_path`].
    pub fn resolve(&self, profile: Option<&str>) -> Result<PathBuf, ConfigError> {
        match profile {
            Some(name) => self.profile_path(name),
            None => Ok(PathBuf::from(&self.needs_file)),
        }
    }
}
