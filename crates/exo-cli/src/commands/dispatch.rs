use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Profile(args) => commands::profile::handle(args, ctx, flags),
        Commands::Evaluate(args) => commands::evaluate::handle(args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, &ctx.schemas, flags),
    }
}
