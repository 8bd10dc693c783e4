//! Error handling for the deckboy application
//!
//! Load failures are typed so the caller can distinguish a rejected path
//! from a missing file from a genuine read error. Scan-side failures are
//! never surfaced here; the scanner logs and degrades instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckBoyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("ROM load error: {0}")]
    Load(#[from] LoadError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("ROM file must be within the configured ROM directory: {path}")]
    Security { path: PathBuf },

    #[error("ROM file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read ROM file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeckBoyError>;
