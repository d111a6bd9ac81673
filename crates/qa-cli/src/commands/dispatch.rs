use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: &Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Ask { question } => commands::ask::run(question, ctx, flags).await,
        Commands::Answer { id, answer } => commands::answer::run(*id, answer, ctx, flags).await,
        Commands::List => commands::list::run(ctx, flags).await,
        Commands::Get { id } => commands::get::run(*id, ctx, flags).await,
        Commands::Delete { id } => commands::delete::run(*id, ctx, flags).await,
        Commands::Export { output } => commands::export::run(output.as_deref(), ctx, flags).await,
        Commands::Stats => commands::stats::run(ctx, flags).await,
    }
}
