//! Core ROM discovery and loading logic
//!
//! - `scanner`: directory enumeration producing [`scanner::RomEntry`] records
//! - `loader`: containment-checked full-file reads
//! - `header`: Game Boy cartridge header title extraction

pub mod header;
pub mod loader;
pub mod scanner;
