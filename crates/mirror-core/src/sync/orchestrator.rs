//! Mirror orchestration - coordinates indexing, diffing and application

use std::path::Path;

use tracing::{debug, info};

use super::executor::PlanExecutor;
use super::journal::Journal;
use super::{MirrorMode, MirrorPlan, MirrorReport};
use crate::comparison::{files_to_clean, folders_to_clean, missing_files, missing_folders};
use crate::config::{Config, ConfigValidator};
use crate::error::Result;
use crate::scanner::TreeIndexer;

/// Main mirror engine
pub struct MirrorEngine {
    config: Config,
    indexer: TreeIndexer,
}

impl MirrorEngine {
    /// Create a new mirror engine
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        ConfigValidator::validate(&config)?;
        let indexer = TreeIndexer::new(config.ignore_name());

        Ok(Self { config, indexer })
    }

    /// Effective configuration
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Index both trees and diff them for `mode`
    ///
    /// Both walks finish before anything is changed.
    ///
    /// # Errors
    ///
    /// Returns an error if either tree cannot be walked.
    pub fn plan(&self, source: &Path, destination: &Path, mode: MirrorMode) -> Result<MirrorPlan> {
        info!("gathering info about files");

        let src = self.indexer.index(source)?;
        let dst = self.indexer.index(destination)?;
        debug!(
            "indexed {} folders and {} files in source, {} folders and {} files in destination",
            src.directories.len(),
            src.files.len(),
            dst.directories.len(),
            dst.files.len()
        );

        let plan = match mode {
            MirrorMode::Copy => MirrorPlan {
                mode,
                folders: missing_folders(&dst.directories, &src.directories),
                files: missing_files(&dst.files, &src.files),
            },
            MirrorMode::Clean => MirrorPlan {
                mode,
                folders: folders_to_clean(&dst.directories, &src.directories),
                files: files_to_clean(&dst.files, &src.files),
            },
        };

        Ok(plan)
    }

    /// Apply `plan` to `destination`
    ///
    /// The log file is truncated first. In dry-run mode nothing is written,
    /// the log included.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or log failure.
    pub fn apply(
        &self,
        plan: &MirrorPlan,
        source: &Path,
        destination: &Path,
    ) -> Result<MirrorReport> {
        let mut executor = PlanExecutor::new(self.config.dry_run(), self.config.progress_step());

        if !self.config.dry_run() {
            let journal = Journal::create(self.config.log_file())?;
            debug!("logging to {}", journal.path().display());
            executor = executor.with_journal(journal);
        }

        executor.execute(plan, source, destination)
    }
}
