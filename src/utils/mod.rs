//! Utility modules for common functionality

pub mod logging;
