use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `needs` binary.
#[derive(Debug, Parser)]
#[command(name = "needs", version, about = "Minimum needs table editor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Needs file to operate on (overrides configuration)
    #[arg(short, long, global = true, conflicts_with = "profile")]
    pub file: Option<PathBuf>,

    /// Named profile inside `storage.profiles_dir`
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// JSON translation catalog for display names
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            file: self.file.clone(),
            profile: self.profile.clone(),
            catalog: self.catalog.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["needs", "--format", "raw", "--verbose", "show"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show(ref args) if !args.full));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["needs", "show", "--full", "--quiet"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Show(ref args) if args.full));
    }

    #[test]
    fn add_takes_name_amount_and_options() {
        let cli = Cli::try_parse_from([
            "needs",
            "add",
            "Blankets",
            "2",
            "--units",
            "pieces",
            "--frequency",
            "monthly",
        ])
        .expect("cli should parse");

        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.name, "Blankets");
        assert_eq!(args.amount, "2");
        assert_eq!(args.units, "pieces");
        assert_eq!(args.frequency.as_deref(), Some("monthly"));
    }

    #[test]
    fn add_units_default_to_empty() {
        let cli = Cli::try_parse_from(["needs", "add", "Toilets", "0.05"]).expect("cli should parse");
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert!(args.units.is_empty());
        assert!(args.frequency.is_none());
    }

    #[test]
    fn file_and_profile_conflict() {
        let parsed = Cli::try_parse_from(["needs", "--file", "a.json", "--profile", "BNPB_en", "show"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["needs", "--format", "xml", "show"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "needs", "-q", "--profile", "BNPB_id", "get", "Rice", "--catalog", "id.json",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Json);
        assert_eq!(flags.profile.as_deref(), Some("BNPB_id"));
        assert_eq!(flags.catalog.as_deref(), Some(std::path::Path::new("id.json")));
        assert!(flags.file.is_none());
    }
}
