use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;
use crate::menu;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::run(&args, ctx, flags).await,
        Commands::List => commands::list::run(ctx, flags).await,
        Commands::Get { id } => commands::get::run(id, ctx, flags).await,
        Commands::Update(args) => commands::update::run(&args, ctx, flags).await,
        Commands::Delete { id } => commands::delete::run(id, ctx, flags).await,
        Commands::Menu => {
            menu::run(&ctx.service, std::io::stdin().lock(), std::io::stdout()).await
        }
    }
}
