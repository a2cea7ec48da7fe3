use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(&args, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Get(args) => commands::get::handle(&args, ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
