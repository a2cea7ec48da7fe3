//! JSON file persistence for [`MinimumNeeds`].

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::NeedsError;
use crate::needs::MinimumNeeds;
use crate::table::NeedsTable;

impl MinimumNeeds {
    /// Replace the table with the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// - `NeedsError::NotFound` if `path` does not exist
    /// - `NeedsError::Io` if it cannot be read
    /// - `NeedsError::Parse` if it is not JSON, is empty (`{}`, `[]`, `null`,
    ///   `""`, `0`, `false`), or is not a JSON object
    ///
    /// The current table is unchanged on any error.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), NeedsError> {
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
        let parse_error = |reason: String| NeedsError::Parse {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value =
            serde_json::from_str(&content).map_err(|error| parse_error(error.to_string()))?;
        if is_empty_document(&value) {
            return Err(parse_error("document is empty".to_string()));
        }
        let table = match NeedsTable::from_value(value) {
            Ok(table) => table,
            Err(NeedsError::InvalidType { found }) => {
                return Err(parse_error(format!("expected a JSON object, found {found}")));
            }
            Err(other) => return Err(other),
        };

        tracing::debug!(
            path = %path.display(),
            resources = table.resources.as_ref().map_or(0, Vec::len),
            "loaded minimum needs"
        );
        self.replace(table);
        Ok(())
    }

    /// Write the table to `path` as pretty JSON, overwriting any existing file.
    ///
    /// A bare file name is written relative to the current directory.
    ///
    /// # Errors
    ///
    /// - `NeedsError::NotFound` if the parent directory does not exist
    /// - `NeedsError::Unset` if no table has been set
    /// - `NeedsError::Io` if the write fails
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), NeedsError> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        if !parent.is_dir() {
            return Err(NeedsError::NotFound {
                path: parent.to_path_buf(),
            });
        }

        let table = self.table.as_ref().ok_or(NeedsError::Unset)?;
        let json = serde_json::to_string_pretty(table)?;
        fs::write(path, json).map_err(|source| NeedsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "wrote minimum needs");
        Ok(())
    }
}

/// Documents that carry no data at all.
fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
