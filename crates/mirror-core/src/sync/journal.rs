//! Plain-text log of every path a run touched
//!
//! The log is truncated once per run. Each phase that has work appends a
//! header line followed by one relative path per line, written as soon as
//! the operation succeeds so an interrupted run still leaves a record.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, Operation, Result};

/// Log file of the current run
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Truncate (or create) the log file
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Io`] if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        File::create(&path).map_err(|err| MirrorError::io(Operation::WriteLog, &path, err))?;
        Ok(Self { path })
    }

    /// Location of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start a new section with `header`
    ///
    /// Sections after the first are separated by a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Io`] if the file cannot be opened or written.
    pub fn section(&self, header: &str) -> Result<JournalSection> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|err| self.error(err))?;
        let len = fs::metadata(&self.path)
            .map_err(|err| self.error(err))?
            .len();

        let separator = if len > 0 { "\n" } else { "" };
        writeln!(file, "{separator}{header}").map_err(|err| self.error(err))?;

        Ok(JournalSection {
            file,
            path: self.path.clone(),
        })
    }

    fn error(&self, err: std::io::Error) -> MirrorError {
        MirrorError::io(Operation::WriteLog, &self.path, err)
    }
}

/// Open section of the log, one line per recorded path
#[derive(Debug)]
pub struct JournalSection {
    file: File,
    path: PathBuf,
}

impl JournalSection {
    /// Append `relative` on its own line
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Io`] if the line cannot be written.
    pub fn record(&mut self, relative: &Path) -> Result<()> {
        writeln!(self.file, "{}", relative.display())
            .map_err(|err| MirrorError::io(Operation::WriteLog, &self.path, err))
    }
}
