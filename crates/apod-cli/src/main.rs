use std::path::PathBuf;

use anyhow::Result;
use apod_infrastructure::ConfigService;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "apod")]
#[command(about = "APOD - browse the Astronomy Picture of the Day by date", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Keep config and cache under this directory instead of the platform defaults
    #[arg(long, global = true, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one date (YYYY-MM-DD) and print its picture
    Show {
        date: String,
        /// Include the explanation
        #[arg(long)]
        detail: bool,
    },
    /// Pick dates interactively
    Browse {
        /// Start with the explanation panel open
        #[arg(long)]
        detail: bool,
    },
    /// Inspect the local record cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// List cached dates with their titles
    List,
    /// Print the cache directory
    Path,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config (key redacted)
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_service = ConfigService::new(cli.base_dir.as_deref())?;
    if let Commands::Config {
        action: ConfigAction::Init,
    } = cli.command
    {
        return commands::config::init(&config_service);
    }

    let context = commands::AppContext::load(config_service)?;

    match cli.command {
        Commands::Show { date, detail } => commands::show::run(&context, &date, detail).await?,
        Commands::Browse { detail } => commands::browse::run(&context, detail).await?,
        Commands::Cache { action } => match action {
            CacheAction::List => commands::cache::list(&context).await?,
            CacheAction::Path => commands::cache::path(&context)?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::config::init(&context.config_service)?,
            ConfigAction::Show => commands::config::show(&context)?,
        },
    }

    Ok(())
}
