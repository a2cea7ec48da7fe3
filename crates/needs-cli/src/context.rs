use std::path::PathBuf;

use anyhow::Context;
use needs_config::NeedsConfig;
use needs_core::{Catalog, MinimumNeeds};

use crate::cli::GlobalFlags;

/// Everything a command needs: configuration, the resolved needs file, and
/// the translator for display names.
pub struct AppContext {
    pub config: NeedsConfig,
    pub needs_path: PathBuf,
    pub translator: Catalog,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = NeedsConfig::load_with_dotenv().context("failed to load configuration")?;
        Self::from_config(config, flags)
    }

    pub fn from_config(config: NeedsConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let needs_path = match &flags.file {
            Some(path) => path.clone(),
            None => config.storage.resolve(flags.profile.as_deref())?,
        };

        let catalog_path = flags.catalog.clone().or_else(|| {
            config
                .general
                .has_catalog()
                .then(|| PathBuf::from(&config.general.catalog_file))
        });
        let translator = match catalog_path {
            Some(path) => Catalog::from_file(&path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?,
            None => Catalog::new(),
        };

        tracing::debug!(
            needs_path = %needs_path.display(),
            translations = translator.len(),
            "resolved needs context"
        );

        Ok(Self {
            config,
            needs_path,
            translator,
        })
    }

    /// Load the needs file this context points at.
    pub fn load_needs(&self) -> anyhow::Result<MinimumNeeds> {
        let mut needs = MinimumNeeds::new();
        needs
            .read_from_file(&self.needs_path)
            .with_context(|| {
                format!(
                    "failed to read needs file {} (run `needs init` to create one)",
                    self.needs_path.display()
                )
            })?;
        Ok(needs)
    }

    /// Persist `needs` back to the needs file.
    pub fn save_needs(&self, needs: &MinimumNeeds) -> anyhow::Result<()> {
        needs
            .write_to_file(&self.needs_path)
            .with_context(|| format!("failed to write needs file {}", self.needs_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use needs_core::Translate;
    use pretty_assertions::assert_eq;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            file: None,
            profile: None,
            catalog: None,
        }
    }

    #[test]
    fn explicit_file_wins_over_config() {
        let flags = GlobalFlags {
            file: Some(PathBuf::from("/tmp/explicit.json")),
            ..flags()
        };
        let ctx = AppContext::from_config(NeedsConfig::default(), &flags).unwrap();
        assert_eq!(ctx.needs_path, PathBuf::from("/tmp/explicit.json"));
    }

    #[test]
    fn profile_without_profiles_dir_fails() {
        let flags = GlobalFlags {
            profile: Some("BNPB_en".into()),
            ..flags()
        };
        assert!(AppContext::from_config(NeedsConfig::default(), &flags).is_err());
    }

    #[test]
    fn catalog_flag_loads_translations() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let catalog = tmp.path().join("id.json");
        std::fs::write(&catalog, r#"{"Rice": "Beras"}"#).expect("write");

        let flags = GlobalFlags {
            catalog: Some(catalog),
            ..flags()
        };
        let ctx = AppContext::from_config(NeedsConfig::default(), &flags).unwrap();
        assert_eq!(ctx.translator.translate("Rice"), "Beras");
    }

    #[test]
    fn load_and_save_roundtrip() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let flags = GlobalFlags {
            file: Some(tmp.path().join("needs.json")),
            ..flags()
        };
        let ctx = AppContext::from_config(NeedsConfig::default(), &flags).unwrap();

        assert!(ctx.load_needs().is_err());
        let needs = MinimumNeeds::with_defaults(&ctx.translator);
        ctx.save_needs(&needs).unwrap();
        assert_eq!(ctx.load_needs().unwrap(), needs);
    }
}
