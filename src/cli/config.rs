use clap::{Args, Subcommand};

use crate::config::{env, Config as AppConfig};
use crate::error::Result;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("Current configuration:");
            println!("  rom_directory:  {}", config.rom_directory.display());
            println!("  rom_extensions: {}", config.rom_extensions.join(", "));

            let overrides = env::active_overrides();
            if !overrides.is_empty() {
                println!("\nEnvironment overrides:");
                for (key, value) in overrides {
                    println!("  {} = {}", key, value);
                }
            }
        }

        ConfigCommands::Path => {
            let config_path = AppConfig::config_path()?;
            println!("{}", config_path.display());
        }
    }

    Ok(())
}
