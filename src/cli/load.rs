use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::loader::Loader;
use crate::error::Result;

#[derive(Args)]
pub struct LoadArgs {
    /// Path of the ROM file to load
    #[arg(value_name = "ROM_PATH")]
    rom_path: PathBuf,
}

pub async fn execute(args: LoadArgs, config: &Config) -> Result<()> {
    let loader = Loader::new(config);
    let data = loader.load(&args.rom_path).await?;

    // One integer per byte, in file order, for the frontend emulator
    let payload = serde_json::to_string(&data)?;
    println!("{payload}");

    Ok(())
}
