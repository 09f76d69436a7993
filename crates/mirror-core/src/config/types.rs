//! Configuration types and structures

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scanner::DEFAULT_IGNORE_NAME;

/// Log file written in the working directory unless configured otherwise
pub const DEFAULT_LOG_FILE: &str = "log";

/// Percentage between two progress reports unless configured otherwise
pub const DEFAULT_PROGRESS_STEP: u8 = 10;

/// Main configuration structure
///
/// Every key is optional so that files can be merged key by key; the
/// accessor methods supply the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory name excluded from indexing, with its subtree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_name: Option<String>,

    /// Path of the append-only log file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Percentage between two progress reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_step: Option<u8>,

    /// Show the plan without touching the destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    /// Answer yes to every confirmation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assume_yes: Option<bool>,
}

impl Config {
    /// Configured ignore-name, or `dont_mirror`
    #[must_use]
    pub fn ignore_name(&self) -> &str {
        self.ignore_name.as_deref().unwrap_or(DEFAULT_IGNORE_NAME)
    }

    /// Configured log file, or `log`
    #[must_use]
    pub fn log_file(&self) -> &Path {
        self.log_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_LOG_FILE))
    }

    /// Configured progress step, or 10
    #[must_use]
    pub fn progress_step(&self) -> u8 {
        self.progress_step.unwrap_or(DEFAULT_PROGRESS_STEP)
    }

    /// Whether dry-run is enabled
    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run == Some(true)
    }

    /// Whether confirmations are skipped
    #[must_use]
    pub fn assume_yes(&self) -> bool {
        self.assume_yes == Some(true)
    }
}
