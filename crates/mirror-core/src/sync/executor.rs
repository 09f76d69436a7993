//! Applies a plan to the destination, one path at a time

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::actions::{MirrorAction, Phase};
use super::journal::Journal;
use super::progress::Progress;
use super::{MirrorPlan, MirrorReport};
use crate::error::{MirrorError, Operation, Result};

/// Executes plan phases in order, stopping at the first failure
pub struct PlanExecutor {
    dry_run: bool,
    progress_step: u8,
    journal: Option<Journal>,
}

impl PlanExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool, progress_step: u8) -> Self {
        Self {
            dry_run,
            progress_step,
            journal: None,
        }
    }

    /// Record every completed path in `journal`
    #[must_use]
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Run every non-empty phase of `plan`
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or log failure. Paths completed before
    /// it stay applied and recorded.
    pub fn execute(
        &self,
        plan: &MirrorPlan,
        source: &Path,
        destination: &Path,
    ) -> Result<MirrorReport> {
        let mut report = MirrorReport {
            dry_run: self.dry_run,
            ..MirrorReport::default()
        };

        for phase in plan.phases() {
            if phase.is_empty() {
                debug!("nothing to do for {:?}", phase.kind);
                continue;
            }
            self.run_phase(&phase, source, destination, &mut report)?;
        }

        Ok(report)
    }

    fn run_phase(
        &self,
        phase: &Phase,
        source: &Path,
        destination: &Path,
        report: &mut MirrorReport,
    ) -> Result<()> {
        let label = phase.kind.progress_label();
        info!("{label} 0%");

        let mut section = self
            .journal
            .as_ref()
            .map(|journal| journal.section(phase.kind.journal_header()))
            .transpose()?;
        let mut progress = Progress::new(phase.total, self.progress_step);

        for action in &phase.actions {
            let amount = self.apply(action, source, destination, report)?;

            if let Some(section) = section.as_mut() {
                section.record(action.path())?;
            }
            if let Some(percent) = progress.advance(amount) {
                info!("{label} {percent}%");
            }
        }

        if let Some(percent) = progress.finish() {
            info!("{label} {percent}%");
        }
        info!("done");
        Ok(())
    }

    /// Perform one action, returning the progress units it covered
    fn apply(
        &self,
        action: &MirrorAction,
        source: &Path,
        destination: &Path,
        report: &mut MirrorReport,
    ) -> Result<u64> {
        let target = destination.join(action.path());
        if !self.dry_run {
            reject_symlinks(destination, action.path(), action.operation())?;
        }

        let amount = match action {
            MirrorAction::MakeDirectory(_) => {
                if self.dry_run {
                    eprintln!("[DRY RUN] Would create directory: {}", target.display());
                } else {
                    fs::create_dir_all(&target)
                        .map_err(|err| MirrorError::io(Operation::CreateDirectory, &target, err))?;
                }
                report.directories_made += 1;
                1
            }
            MirrorAction::CopyFile { path, size } => {
                let origin = source.join(path);
                let written = if self.dry_run {
                    eprintln!(
                        "[DRY RUN] Would copy: {} -> {}",
                        origin.display(),
                        target.display()
                    );
                    *size
                } else {
                    fs::copy(&origin, &target).map_err(|err| {
                        // Blame the side that could not be used.
                        let failed = if origin.is_file() { &target } else { &origin };
                        MirrorError::io(Operation::CopyFile, failed, err)
                    })?
                };
                report.files_copied += 1;
                report.bytes_copied += written;
                written
            }
            MirrorAction::RemoveFile { size, .. } => {
                if self.dry_run {
                    eprintln!("[DRY RUN] Would remove file: {}", target.display());
                } else {
                    fs::remove_file(&target)
                        .map_err(|err| MirrorError::io(Operation::RemoveFile, &target, err))?;
                }
                report.files_removed += 1;
                report.bytes_removed += size;
                *size
            }
            MirrorAction::RemoveDirectory(_) => {
                if self.dry_run {
                    eprintln!("[DRY RUN] Would remove directory: {}", target.display());
                } else {
                    fs::remove_dir_all(&target)
                        .map_err(|err| MirrorError::io(Operation::RemoveDirectory, &target, err))?;
                }
                report.directories_removed += 1;
                1
            }
        };

        debug!("{action}");
        Ok(amount)
    }
}

/// Fail if `relative` or any of its parents below `destination` is a symlink
///
/// Checking stops at the first component that does not exist yet.
fn reject_symlinks(destination: &Path, relative: &Path, operation: Operation) -> Result<()> {
    let mut current = destination.to_path_buf();

    for component in relative.components() {
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                return Err(MirrorError::io(
                    operation,
                    current,
                    io::Error::other("refusing to go through a symbolic link"),
                ));
            }
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(MirrorError::io(operation, current, err)),
        }
    }

    Ok(())
}
