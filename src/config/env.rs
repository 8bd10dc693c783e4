//! Environment-variable overrides for configuration

use std::env;
use std::path::PathBuf;

use super::Config;

pub const ROM_DIRECTORY: &str = "DECKBOY_ROM_DIRECTORY";
pub const ROM_EXTENSIONS: &str = "DECKBOY_ROM_EXTENSIONS";

/// Apply environment-variable overrides on top of `config`.
pub fn apply(config: &mut Config) {
    if let Ok(dir) = env::var(ROM_DIRECTORY) {
        if !dir.trim().is_empty() {
            config.rom_directory = PathBuf::from(dir);
        }
    }

    if let Ok(extensions) = env::var(ROM_EXTENSIONS) {
        // Comma-separated, leading dots tolerated
        let parsed: Vec<String> = extensions
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if !parsed.is_empty() {
            config.rom_extensions = parsed;
        }
    }
}

/// Collect the deckboy environment overrides currently set, for display.
pub fn active_overrides() -> Vec<(String, String)> {
    [ROM_DIRECTORY, ROM_EXTENSIONS]
        .iter()
        .filter_map(|name| env::var(name).ok().map(|value| (name.to_string(), value)))
        .collect()
}
