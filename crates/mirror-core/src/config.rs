//! Configuration file parsing, merging and validation
//!
//! This module handles:
//! - Config file discovery from the CLI flag, the working directory and the
//!   user config directory
//! - TOML parsing with serde
//! - Key-by-key merging with precedence rules
//! - Validation of the merged values

mod discovery;
mod merge;
mod types;
mod validation;

#[cfg(test)]
mod integration_tests;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use merge::ConfigMerger;
pub use types::{Config, DEFAULT_LOG_FILE, DEFAULT_PROGRESS_STEP};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// With `no_config` set, no file is read and the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read, does not parse, or
    /// the merged values are invalid.
    pub fn load(cli_config_path: Option<&Path>, no_config: bool) -> Result<Config> {
        if no_config {
            return Ok(Config::default());
        }

        let config_files = ConfigDiscovery::discover(cli_config_path)?;
        let merged = ConfigMerger::merge(&config_files)?;
        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }
}
