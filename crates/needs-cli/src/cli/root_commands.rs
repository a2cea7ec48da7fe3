use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write the built-in default needs table.
    Init(InitArgs),
    /// Show the needs as display name and amount pairs.
    Show(ShowArgs),
    /// Show a single resource by exact name.
    Get(GetArgs),
    /// Append a resource to the needs table.
    Add(AddArgs),
    /// Validate a needs file and copy it into place.
    Import(ImportArgs),
    /// Print the JSON Schema of a needs file.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing needs file.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Print every record with all fields instead of the summary.
    #[arg(long)]
    pub full: bool,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    /// Resource name, matched exactly.
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Resource name.
    pub name: String,
    /// Amount per person per interval, kept as written.
    pub amount: String,
    /// Unit abbreviation, e.g. `kg`.
    #[arg(long, default_value = "")]
    pub units: String,
    /// Dispatch interval (defaults to `general.default_frequency`).
    #[arg(long)]
    pub frequency: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Needs file to read.
    pub source: PathBuf,
}
