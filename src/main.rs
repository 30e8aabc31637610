use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::info;

use insyte_cli::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    // Plain output when piped into another tool.
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    info!("Starting insyte-cli");

    cli::run(cli).await
}
