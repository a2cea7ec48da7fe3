use std::path::PathBuf;

use anyhow::Context;
use needs_core::MinimumNeeds;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportResponse {
    source: PathBuf,
    path: PathBuf,
    resources: Option<usize>,
    profile: Option<String>,
}

/// Handle `needs import`.
pub fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut needs = MinimumNeeds::new();
    needs
        .read_from_file(&args.source)
        .with_context(|| format!("failed to import {}", args.source.display()))?;
    ctx.save_needs(&needs)?;

    let table = needs.get_full_needs();
    output(
        &ImportResponse {
            source: args.source.clone(),
            path: ctx.needs_path.clone(),
            resources: table.and_then(|t| t.resources.as_ref().map(Vec::len)),
            profile: table.and_then(|t| t.profile.clone()),
        },
        flags.format,
    )
}
