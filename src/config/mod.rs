//! Configuration module for x-harvester.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Locating the default configuration file
//! - Configuration and handle validation

pub mod loader;
pub mod validation;

pub use loader::{
    default_config_path, ApiConfig, Config, DownloaderConfig, HarvestConfig, CONFIG_FILE_NAME,
};
pub use validation::{normalize_handles, validate_config, validate_handles};
