use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Sample(args) => commands::sample::handle(&args, ctx, flags),
        Commands::Translate(args) => commands::translate::handle(&args, flags),
        Commands::Validate(args) => commands::validate::handle_one(&args, ctx, flags),
        Commands::ValidateAll(args) => commands::validate::handle_all(&args, ctx, flags).await,
        Commands::Contains(args) => commands::compare::handle_contains(&args, ctx, flags).await,
        Commands::Diff(args) => commands::compare::handle_diff(&args, ctx, flags),
        Commands::Count => commands::count::handle(ctx, flags),
    }
}
