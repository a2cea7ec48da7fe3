use needs_core::Resource;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AddResponse<'a> {
    added: &'a Resource,
    resources: usize,
    duplicate: bool,
}

/// Handle `needs add`.
pub fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut needs = ctx.load_needs()?;
    let duplicate = needs.get_need(&args.name)?.is_some();
    if duplicate {
        tracing::warn!(name = %args.name, "resource already present; appending a duplicate");
    }

    let frequency = args
        .frequency
        .clone()
        .unwrap_or_else(|| ctx.config.general.default_frequency.clone());
    needs.set_need(
        args.name.as_str(),
        args.amount.as_str(),
        args.units.as_str(),
        frequency,
    )?;
    ctx.save_needs(&needs)?;

    let resources = needs
        .get_full_needs()
        .map(|table| table.resources())
        .transpose()?
        .unwrap_or_default();
    let Some(added) = resources.last() else {
        anyhow::bail!("needs table is empty after appending '{}'", args.name);
    };
    output(
        &AddResponse {
            added,
            resources: resources.len(),
            duplicate,
        },
        flags.format,
    )
}
