use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::config::Config;
use crate::ui::prompts;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Configure an environment, prompting for anything not given as a flag
    Setup {
        /// Environment name
        #[arg(long)]
        name: Option<String>,
        /// API base URL
        #[arg(long)]
        base_url: Option<String>,
        /// API version (v1 or v2)
        #[arg(long)]
        api_version: Option<String>,
        /// API key (bearer token authentication)
        #[arg(long)]
        api_key: Option<String>,
        /// Username (basic authentication)
        #[arg(long)]
        username: Option<String>,
        /// Password (basic authentication)
        #[arg(long)]
        password: Option<String>,
    },
    /// Show the current environment
    Status,
    /// Select the current environment
    Select { name: String },
    /// Remove an environment
    Remove { name: String },
    /// List configured environments
    List,
}

pub async fn handle(commands: AuthCommands) -> Result<()> {
    match commands.command {
        AuthSubcommands::Setup {
            name,
            base_url,
            api_version,
            api_key,
            username,
            password,
        } => setup_command(name, base_url, api_version, api_key, username, password),
        AuthSubcommands::Status => status_command(),
        AuthSubcommands::Select { name } => select_command(name),
        AuthSubcommands::Remove { name } => remove_command(name),
        AuthSubcommands::List => list_command(),
    }
}

fn setup_command(
    name: Option<String>,
    base_url: Option<String>,
    api_version: Option<String>,
    api_key: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;

    let name = prompts::prompt_environment_name(name)?;
    if config.environments.contains_key(&name) && !prompts::prompt_overwrite_confirmation(&name)? {
        println!("Aborted");
        return Ok(());
    }

    let connection_config =
        prompts::prompt_connection(base_url, api_version, api_key, username, password)?;
    // Reject incomplete credentials before they land in the file.
    connection_config.to_connection()?;

    config.add_environment(name.clone(), connection_config)?;
    println!("{} Environment '{}' saved", "✓".green(), name);
    Ok(())
}

fn status_command() -> Result<()> {
    let config = Config::load()?;

    let Some(name) = config.get_current_environment_name() else {
        println!("No environment selected. Run 'insyte-cli auth setup' first.");
        return Ok(());
    };

    let Some(connection_config) = config.get_current_connection() else {
        println!(
            "{} Current environment '{}' is missing from the config file",
            "✗".red(),
            name
        );
        return Ok(());
    };

    match connection_config.to_connection() {
        Ok(connection) => {
            println!("Environment: {}", name.bold());
            println!("Base URL:    {}", connection.base_url);
            println!("API version: {}", connection.api_version);
            println!("Auth:        {}", connection.credentials.kind());
        }
        Err(e) => println!("{} Environment '{}' is invalid: {}", "✗".red(), name, e),
    }

    Ok(())
}

fn select_command(name: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_current_environment(name.clone())?;
    println!("{} Now using environment '{}'", "✓".green(), name);
    Ok(())
}

fn remove_command(name: String) -> Result<()> {
    let mut config = Config::load()?;
    if !prompts::prompt_remove_confirmation(&name)? {
        println!("Aborted");
        return Ok(());
    }
    config.remove_environment(&name)?;
    println!("{} Removed environment '{}'", "✓".green(), name);
    Ok(())
}

fn list_command() -> Result<()> {
    let config = Config::load()?;
    let mut names = config.list_environments();

    if names.is_empty() {
        println!("No environments configured. Run 'insyte-cli auth setup'.");
        return Ok(());
    }

    names.sort();
    let current = config.get_current_environment_name();
    for name in names {
        if Some(name) == current {
            println!("{} (current)", name.bold());
        } else {
            println!("{}", name);
        }
    }

    Ok(())
}
