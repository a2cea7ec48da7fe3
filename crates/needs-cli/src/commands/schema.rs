use needs_core::schema::needs_table_schema;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `needs schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&needs_table_schema(), flags.format)
}
