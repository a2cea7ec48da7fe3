//! # needs-config
//!
//! Layered configuration loading for the minimum needs tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEEDS_*` prefix, `__` as separator)
//! 2. Project-level `.needs/config.toml`
//! 3. User-level `~/.config/needs/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEEDS_STORAGE__NEEDS_FILE` -> `storage.needs_file`,
//! `NEEDS_GENERAL__CATALOG_FILE` -> `general.catalog_file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use needs_config::NeedsConfig;
//!
//! let config = NeedsConfig::load_with_dotenv().expect("config");
//! let path = config.storage.resolve(None).expect("needs file");
//! println!("needs file: {}", path.display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".needs/config.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "NEEDS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NeedsConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NeedsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`NeedsConfig::load_with_dotenv`] if you
    /// need `.env` file loading. The result is validated.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values no command can work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty `storage.needs_file` or
    /// `general.default_frequency`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.needs_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.needs_file".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.general.default_frequency.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_frequency".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("needs").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor that has one.
    fn load_dotenv_from_workspace() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NeedsConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.storage.has_profiles_dir());
        assert!(!config.general.has_catalog());
    }

    #[test]
    fn empty_needs_file_is_rejected() {
        let mut config = NeedsConfig::default();
        config.storage.needs_file = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "storage.needs_file"
        ));
    }
}
