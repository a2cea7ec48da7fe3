use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `needs show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let needs = ctx.load_needs()?;

    if args.full {
        return output(&needs.get_full_needs(), flags.format);
    }
    output(&needs.get_minimum_needs(&ctx.translator)?, flags.format)
}
