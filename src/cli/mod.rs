pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use anyhow::Result;

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(auth) => commands::auth::handle(auth).await,
        Commands::Record(record) => commands::record::handle(record).await,
        Commands::Diary(diary) => commands::diary::handle(diary).await,
        Commands::Ask {
            query,
            dry_run,
            pretty,
        } => commands::ask::ask_command(query, dry_run, pretty).await,
        Commands::Fields { resource } => commands::fields::fields_command(resource),
    }
}
