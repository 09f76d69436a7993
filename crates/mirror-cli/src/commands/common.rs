//! Common types and utilities for command execution

use std::path::Path;

use anyhow::Context;
use mirror_core::config::{Config, ConfigManager, ConfigMerger};

use crate::cli::Cli;

/// Execution options taken from the command line
pub struct RunOptions<'a> {
    /// Folder to mirror from, as given
    pub src: &'a Path,
    /// Folder to mirror into, as given
    pub dst: &'a Path,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
    /// Flag values that override every config file
    pub overrides: Config,
}

impl<'a> RunOptions<'a> {
    /// Collect the options from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &'a Cli) -> Self {
        Self {
            src: &cli.src,
            dst: &cli.dst,
            config_path: cli.config.as_deref(),
            no_config: cli.no_config,
            overrides: Config {
                ignore_name: cli.ignore_name.clone(),
                log_file: cli.log_file.clone(),
                progress_step: cli.progress_step,
                dry_run: cli.dry_run.then_some(true),
                assume_yes: cli.yes.then_some(true),
            },
        }
    }

    /// Load the config files and apply the flag overrides on top
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be loaded or is invalid.
    pub fn build_config(&self) -> anyhow::Result<Config> {
        let mut config = ConfigManager::load(self.config_path, self.no_config)
            .context("Failed to load configuration")?;
        ConfigMerger::overlay(&mut config, self.overrides.clone());
        Ok(config)
    }
}
