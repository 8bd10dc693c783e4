//! Configuration for the ROM directory and accepted extensions
//!
//! Layering order: built-in defaults, then the config file, then
//! environment variables. The resulting value is immutable and injected
//! into the scanner and loader by reference.

use anyhow::anyhow;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{ConfigError, Result};

pub mod env;

fn default_rom_directory() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join("Downloads"),
        None => {
            warn!("Home directory unavailable; falling back to current directory");
            PathBuf::from(".")
        }
    }
}

fn default_rom_extensions() -> Vec<String> {
    vec!["gb".to_string(), "gbc".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for ROM files (non-recursive)
    #[serde(default = "default_rom_directory")]
    pub rom_directory: PathBuf,

    /// Accepted ROM file extensions, without the leading dot
    #[serde(default = "default_rom_extensions")]
    pub rom_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rom_directory: default_rom_directory(),
            rom_extensions: default_rom_extensions(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Pick up a .env file if one exists (Docker and development)
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        let config_file = match config_path {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };

        if config_file.exists() {
            let content = fs::read_to_string(&config_file).map_err(ConfigError::Io)?;
            config = toml::from_str(&content).map_err(ConfigError::InvalidFormat)?;
        }

        // Environment variables take highest priority
        env::apply(&mut config);

        config.validate()?;

        // Persist defaults on first run so the file is discoverable
        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent).map_err(ConfigError::Io)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("net", "deckboy", "deckboy-cli")
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeFailed)?;
        fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.rom_extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "rom_extensions".to_string(),
                value: "(empty list)".to_string(),
            }
            .into());
        }
        for ext in &self.rom_extensions {
            if ext.is_empty() || ext.contains(['.', '/', '\\', '*']) {
                return Err(ConfigError::InvalidValue {
                    field: "rom_extensions".to_string(),
                    value: ext.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckBoyError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rom_extensions, vec!["gb", "gbc"]);
        assert!(config.rom_directory.ends_with("Downloads") || config.rom_directory == Path::new("."));
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = Config {
            rom_extensions: vec![".gb".to_string()],
            ..Config::default()
        };
        let error = config.validate().unwrap_err();
        assert!(matches!(
            error,
            DeckBoyError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_extension_list() {
        let config = Config {
            rom_extensions: vec![],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            rom_directory: PathBuf::from("/tmp/roms"),
            rom_extensions: vec!["gb".to_string()],
        };
        config.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded.rom_directory, PathBuf::from("/tmp/roms"));
        assert_eq!(loaded.rom_extensions, vec!["gb"]);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let loaded: Config = toml::from_str("").unwrap();
        assert_eq!(loaded.rom_extensions, vec!["gb", "gbc"]);
    }
}
