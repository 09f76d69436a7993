//! Mirror planning and application
//!
//! A run is split in two halves so the caller can ask for confirmation in
//! between:
//! - [`MirrorEngine::plan`] indexes both trees and diffs them for one mode
//! - [`MirrorEngine::apply`] truncates the log file and executes the plan
//!   phase by phase, one path at a time

mod actions;
mod executor;
mod journal;
mod orchestrator;
mod progress;
mod reporting;

use std::fmt;

pub use actions::{MirrorAction, Phase, PhaseKind};
pub use executor::PlanExecutor;
pub use journal::{Journal, JournalSection};
pub use orchestrator::MirrorEngine;
pub use progress::Progress;
pub use reporting::{MirrorReporter, bytes_to_mb, group_thousands};

use crate::comparison::FileDiff;
use crate::index::{DirectorySet, sorted_paths};
use crate::order::{creation_order, deletion_order};

/// What a run does to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    /// Create missing directories and copy missing or resized files
    Copy,
    /// Remove files and directories absent from the source
    Clean,
}

impl fmt::Display for MirrorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => f.write_str("copy"),
            Self::Clean => f.write_str("clean"),
        }
    }
}

/// Diff of two trees for one mode, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorPlan {
    /// Mode the diff was computed for
    pub mode: MirrorMode,
    /// Directories to create (copy) or remove (clean)
    pub folders: DirectorySet,
    /// Files to copy (copy) or remove (clean)
    pub files: FileDiff,
}

impl MirrorPlan {
    /// Whether there is nothing to do
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    /// The plan as ordered phases
    ///
    /// Copy mode creates directories before copying into them; clean mode
    /// removes files before removing the directories that held them.
    #[must_use]
    pub fn phases(&self) -> Vec<Phase> {
        let files = sorted_paths(&self.files.files)
            .into_iter()
            .map(|path| (path, self.files.files.size_of(path).unwrap_or_default()));

        match self.mode {
            MirrorMode::Copy => vec![
                Phase::make_folders(creation_order(&self.folders)),
                Phase::copy_files(files, self.files.total_size),
            ],
            MirrorMode::Clean => vec![
                Phase::remove_files(files, self.files.total_size),
                Phase::remove_folders(deletion_order(&self.folders)),
            ],
        }
    }

    /// One-line description for the confirmation prompt
    #[must_use]
    pub fn summary(&self) -> String {
        let megabytes = bytes_to_mb(self.files.total_size);
        match self.mode {
            MirrorMode::Copy => format!(
                "{} files will be copied ({megabytes} MB) and {} folders will be created.",
                self.files.len(),
                self.folders.len()
            ),
            MirrorMode::Clean => format!(
                "{} files ({megabytes} MB) and {} folders will be deleted.",
                self.files.len(),
                self.folders.len()
            ),
        }
    }
}

/// Counts of what an applied plan did (or would do, in dry-run)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// `create_dir_all` calls issued
    pub directories_made: usize,
    /// `remove_dir_all` calls issued
    pub directories_removed: usize,
    /// Files copied
    pub files_copied: usize,
    /// Files removed
    pub files_removed: usize,
    /// Bytes written while copying
    pub bytes_copied: u64,
    /// Indexed size of the removed files
    pub bytes_removed: u64,
    /// Whether nothing was actually touched
    pub dry_run: bool,
}

impl MirrorReport {
    /// Total operations performed
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.directories_made + self.directories_removed + self.files_copied + self.files_removed
    }
}
