use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Trending => commands::trending::handle(ctx, flags),
        Commands::Categories => commands::categories::handle(ctx, flags),
        Commands::Duplicates => commands::duplicates::handle(ctx, flags),
        Commands::Digest => commands::digest::handle(ctx, flags),
        Commands::Browse => commands::browse::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
