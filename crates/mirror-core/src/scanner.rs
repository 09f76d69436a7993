//! Directory tree indexing
//!
//! Walks a root directory and records every directory and regular file below
//! it, keyed by path relative to the root:
//! - directories named after the ignore-name are skipped with their subtree
//! - symbolic links are never followed and never recorded
//! - the root itself is never recorded

mod roots;


use std::ffi::OsString;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

pub use roots::{resolve_root, validate_roots};

use crate::error::{MirrorError, Operation, Result};
use crate::index::TreeIndex;

/// Directory name excluded from indexing unless configured otherwise
pub const DEFAULT_IGNORE_NAME: &str = "dont_mirror";

/// Builds a [`TreeIndex`] for a directory tree
#[derive(Debug, Clone)]
pub struct TreeIndexer {
    ignore_name: OsString,
}

impl Default for TreeIndexer {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_NAME)
    }
}

impl TreeIndexer {
    /// Create an indexer that skips directories named `ignore_name`
    #[must_use]
    pub fn new(ignore_name: impl Into<OsString>) -> Self {
        Self {
            ignore_name: ignore_name.into(),
        }
    }

    /// Index the tree under `root`
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::Io`] as soon as any directory (the root
    /// included) cannot be listed or any file's metadata cannot be read.
    /// No partial index is returned.
    pub fn index(&self, root: &Path) -> Result<TreeIndex> {
        let mut index = TreeIndex::default();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry));

        for entry in walker {
            let entry = entry.map_err(|err| walk_error(root, err))?;
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|err| {
                    MirrorError::io(Operation::Walk, entry.path(), io::Error::other(err))
                })?
                .to_path_buf();

            let file_type = entry.file_type();
            if file_type.is_dir() {
                index.directories.insert(relative);
            } else if file_type.is_symlink() {
                debug!("Skipping symlink {}", entry.path().display());
            } else if file_type.is_file() {
                let metadata = entry.metadata().map_err(|err| walk_error(root, err))?;
                index.files.insert(relative, metadata.len());
            } else {
                warn!("Skipping special file {}", entry.path().display());
            }
        }

        debug!(
            "Indexed {}: {} directories, {} files",
            root.display(),
            index.directories.len(),
            index.files.len()
        );

        Ok(index)
    }

    // The root is checked by `filter_entry` even though `min_depth` hides it.
    fn is_ignored(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == self.ignore_name
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> MirrorError {
    let path = err.path().unwrap_or(root).to_path_buf();
    MirrorError::io(Operation::Walk, path, io::Error::from(err))
}
