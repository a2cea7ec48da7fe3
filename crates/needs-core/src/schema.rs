//! JSON Schema for needs files.

use schemars::schema_for;
use serde_json::Value;

use crate::table::NeedsTable;

/// The JSON Schema describing a needs table document.
#[must_use]
pub fn needs_table_schema() -> Value {
    schema_for!(NeedsTable).to_value()
}
