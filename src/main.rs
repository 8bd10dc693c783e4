use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod utils;

use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "deckboy")]
#[command(about = "Discover Game Boy ROM files and serve their data as JSON")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the ROM directory for Game Boy ROM files
    Scan(cli::scan::ScanArgs),

    /// Load a ROM file and emit its raw bytes
    Load(cli::load::LoadArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose).map_err(error::DeckBoyError::Internal)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan(args) => cli::scan::execute(args, &config).await,
        Commands::Load(args) => cli::load::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, &config).await,
    }
}
