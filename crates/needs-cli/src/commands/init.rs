use std::path::PathBuf;

use anyhow::bail;
use needs_core::MinimumNeeds;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    path: PathBuf,
    resources: usize,
    profile: Option<String>,
}

/// Handle `needs init`.
pub fn handle(args: &InitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.needs_path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            ctx.needs_path.display()
        );
    }

    let table = MinimumNeeds::defaults(&ctx.translator);
    let response = InitResponse {
        path: ctx.needs_path.clone(),
        resources: table.resources()?.len(),
        profile: table.profile.clone(),
    };
    ctx.save_needs(&MinimumNeeds::with_table(table))?;

    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use needs_config::NeedsConfig;

    fn setup(path: PathBuf) -> (AppContext, GlobalFlags) {
        let flags = GlobalFlags {
            format: OutputFormat::Raw,
            file: Some(path),
            profile: None,
            catalog: None,
        };
        let ctx = AppContext::from_config(NeedsConfig::default(), &flags).expect("context");
        (ctx, flags)
    }

    #[test]
    fn init_writes_defaults_once() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let (ctx, flags) = setup(tmp.path().join("needs.json"));

        handle(&InitArgs { force: false }, &ctx, &flags).expect("first init");
        let needs = ctx.load_needs().expect("written");
        assert!(needs.get_need("Rice").expect("resources").is_some());

        assert!(handle(&InitArgs { force: false }, &ctx, &flags).is_err());
        handle(&InitArgs { force: true }, &ctx, &flags).expect("forced init");
    }
}
