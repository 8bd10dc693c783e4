//! Command Line Interface module
//!
//! One module per subcommand:
//! - `scan`: emit discovered ROM metadata as JSON
//! - `load`: emit a ROM's raw bytes as JSON
//! - `config`: inspect the effective configuration

pub mod config;
pub mod load;
pub mod scan;
