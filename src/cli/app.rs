use clap::{Parser, Subcommand};

use super::commands::auth::AuthCommands;
use super::commands::diary::DiaryCommands;
use super::commands::record::RecordCommands;
use crate::api::resources::Resource;

#[derive(Parser)]
#[command(name = "insyte-cli")]
#[command(about = "A CLI tool for interacting with the Insyte CRM Web API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authentication and environment management
    Auth(AuthCommands),
    /// CRUD operations on CRM records
    Record(RecordCommands),
    /// Live Diary availability checks and lead booking
    Diary(DiaryCommands),
    /// Classify a natural-language query and run it when possible
    Ask {
        /// Free-text query, e.g. "find all contacts in NSW"
        query: String,
        /// Show the interpretation without calling the API
        #[arg(long)]
        dry_run: bool,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// List the selectable fields of a resource
    Fields {
        /// Resource name (contact, company, job, ...)
        resource: Resource,
    },
}
