mod client;
mod commands;
mod config;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use evman_core::Category;
use tracing_subscriber::EnvFilter;

use crate::client::ApiClient;
use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "evman")]
#[command(about = "Manage your events against a remote events API")]
struct Cli {
    /// Base URL of the events API (overrides config and EVMAN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered by category
    List {
        /// Only show events in this category (work, personal, other)
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Add a new event
    Add {
        /// Event title; prompted for when omitted
        title: Option<String>,

        /// Event date (YYYY-MM-DD, today up to one year ahead)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// work, personal or other
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Edit an existing event
    Edit {
        /// Id of the event to edit
        id: String,
    },
    /// Delete an event
    Delete {
        /// Id of the event to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Browse and manage events interactively (the default)
    Manage,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GlobalConfig::load(cli.api_url)?;
    let client = ApiClient::new(config.api_url);

    match cli.command.unwrap_or(Commands::Manage) {
        Commands::List { category } => commands::list::run(&client, category).await,
        Commands::Add {
            title,
            date,
            description,
            category,
        } => commands::add::run(&client, title, date, description, category).await,
        Commands::Edit { id } => commands::edit::run(&client, id).await,
        Commands::Delete { id, force } => commands::delete::run(&client, id, force).await,
        Commands::Manage => commands::manage::run(&client).await,
    }
}
