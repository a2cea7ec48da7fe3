use anyhow::anyhow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `needs get`.
pub fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let needs = ctx.load_needs()?;
    let resource = needs
        .get_need(&args.name)?
        .ok_or_else(|| anyhow!("no resource named '{}'", args.name))?;
    output(resource, flags.format)
}
