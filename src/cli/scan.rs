use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::core::scanner::Scanner;
use crate::error::Result;

#[derive(Args)]
pub struct ScanArgs {
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

pub async fn execute(args: ScanArgs, config: &Config) -> Result<()> {
    let scanner = Scanner::new(config);
    let roms = scanner.scan().await;

    debug!("Serializing {} ROM entries", roms.len());
    let payload = if args.pretty {
        serde_json::to_string_pretty(&roms)?
    } else {
        serde_json::to_string(&roms)?
    };
    println!("{payload}");

    Ok(())
}
