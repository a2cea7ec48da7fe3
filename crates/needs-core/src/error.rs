//! Error types for the minimum needs table.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`MinimumNeeds`](crate::MinimumNeeds) and its helpers.
///
/// A failed operation never leaves the in-memory table partially modified.
#[derive(Debug, Error)]
pub enum NeedsError {
    /// A value handed to the update path is not a needs table record.
    #[error("Invalid needs table: expected a record, found {found}")]
    InvalidType { found: String },

    /// The target file, or the directory that should contain it, does not exist.
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// File content is not JSON, is empty, or does not have the needs table shape.
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// The table has no `resources` list to read from or append to.
    #[error("Needs table has no resources list")]
    MissingResources,

    /// A resource lacks a key the accessor needs, or holds it in the wrong shape.
    #[error("Resource {resource} has no usable '{field}'")]
    MissingField {
        resource: String,
        field: &'static str,
    },

    /// No table has been set yet.
    #[error("No needs table has been loaded")]
    Unset,

    /// Reading or writing the file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be encoded as JSON.
    #[error("Failed to serialize needs table: {0}")]
    Serialize(#[from] serde_json::Error),
}
