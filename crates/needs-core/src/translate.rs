//! Localization seam for resource display names.
//!
//! Translation is always passed in explicitly so defaults and display views
//! stay deterministic under a stub translator.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::NeedsError;

/// Maps a source-language label to its localized form.
pub trait Translate {
    fn translate(&self, text: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}

/// Returns every label unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// A lookup table of translations. Unknown labels pass through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON object of `"source": "translation"` pairs.
    ///
    /// # Errors
    ///
    /// Returns `NeedsError::NotFound` if the file does not exist,
    /// `NeedsError::Io` if it cannot be read, and `NeedsError::Parse` if it is
    /// not a flat JSON object of strings.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NeedsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NeedsError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| NeedsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|error| NeedsError::Parse {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded translation catalog");
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S, T> FromIterator<(S, T)> for Catalog
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(source, translation)| (source.into(), translation.into()))
                .collect(),
        }
    }
}

impl Translate for Catalog {
    fn translate(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closures_are_translators() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.translate("Rice"), "RICE");
    }

    #[test]
    fn catalog_falls_back_to_source_text() {
        let catalog: Catalog = [("Rice", "Beras")].into_iter().collect();
        assert_eq!(catalog.translate("Rice"), "Beras");
        assert_eq!(catalog.translate("Toilets"), "Toilets");
    }

    #[test]
    fn catalog_loads_from_json_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("id.json");
        std::fs::write(&path, r#"{"Clean Water": "Air Bersih"}"#).expect("write");

        let catalog = Catalog::from_file(&path).expect("catalog loads");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.translate("Clean Water"), "Air Bersih");
    }

    #[test]
    fn catalog_rejects_nested_values() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"Rice": {"id": "Beras"}}"#).expect("write");

        let err = Catalog::from_file(&path).unwrap_err();
        assert!(matches!(err, NeedsError::Parse { .. }));
    }

    #[test]
    fn missing_catalog_is_not_found() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let err = Catalog::from_file(tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NeedsError::NotFound { .. }));
    }
}
