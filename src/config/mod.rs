//! Configuration module for the twitter-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod size;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig, UserConfig};
pub use size::ImageSize;
pub use validation::validate_config;
