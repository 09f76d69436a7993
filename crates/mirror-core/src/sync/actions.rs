//! Plan steps and the phases that group them

use std::fmt;
use std::path::Path;

use crate::error::Operation;
use crate::index::RelativePath;

/// Group of actions sharing a log section and a progress counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Create missing directories
    MakeFolders,
    /// Copy missing or resized files
    CopyFiles,
    /// Remove destination-only files
    RemoveFiles,
    /// Remove destination-only directories
    RemoveFolders,
}

impl PhaseKind {
    /// Section header written to the log file
    #[must_use]
    pub const fn journal_header(self) -> &'static str {
        match self {
            Self::MakeFolders => concat!(
                "directories made: ",
                "(if a folder had some parent directories, they were also created)"
            ),
            Self::CopyFiles => "files copied:",
            Self::RemoveFiles => "files removed:",
            Self::RemoveFolders => concat!(
                "directories removed: ",
                "(if a folder had some subdirectories, they were also removed)"
            ),
        }
    }

    /// Prefix of progress messages
    #[must_use]
    pub const fn progress_label(self) -> &'static str {
        match self {
            Self::MakeFolders => "making folders:",
            Self::CopyFiles => "copying files:",
            Self::RemoveFiles => "removing files:",
            Self::RemoveFolders => "removing folders:",
        }
    }
}

/// A single filesystem operation, relative to the source/destination roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorAction {
    /// `create_dir_all` under the destination
    MakeDirectory(RelativePath),
    /// Copy from the source to the destination, overwriting
    CopyFile {
        /// Relative path on both sides
        path: RelativePath,
        /// Size recorded in the source index
        size: u64,
    },
    /// Remove a file from the destination
    RemoveFile {
        /// Relative path in the destination
        path: RelativePath,
        /// Size recorded in the destination index
        size: u64,
    },
    /// `remove_dir_all` under the destination
    RemoveDirectory(RelativePath),
}

impl MirrorAction {
    /// Relative path the action targets
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MakeDirectory(path)
            | Self::RemoveDirectory(path)
            | Self::CopyFile { path, .. }
            | Self::RemoveFile { path, .. } => path,
        }
    }

    /// Filesystem operation reported when the action fails
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::MakeDirectory(_) => Operation::CreateDirectory,
            Self::CopyFile { .. } => Operation::CopyFile,
            Self::RemoveFile { .. } => Operation::RemoveFile,
            Self::RemoveDirectory(_) => Operation::RemoveDirectory,
        }
    }
}

impl fmt::Display for MirrorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MakeDirectory(path) => write!(f, "create directory {}", path.display()),
            Self::CopyFile { path, .. } => write!(f, "copy {}", path.display()),
            Self::RemoveFile { path, .. } => write!(f, "remove file {}", path.display()),
            Self::RemoveDirectory(path) => write!(f, "remove directory {}", path.display()),
        }
    }
}

/// Ordered actions of one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    /// What the actions do
    pub kind: PhaseKind,
    /// Actions in execution order
    pub actions: Vec<MirrorAction>,
    /// Progress denominator: bytes for file phases, action count for directories
    pub total: u64,
}

impl Phase {
    /// Create every path with its missing parents
    #[must_use]
    pub fn make_folders(paths: Vec<RelativePath>) -> Self {
        Self::directories(PhaseKind::MakeFolders, paths, MirrorAction::MakeDirectory)
    }

    /// Remove every path with its contents
    #[must_use]
    pub fn remove_folders(paths: Vec<RelativePath>) -> Self {
        Self::directories(PhaseKind::RemoveFolders, paths, MirrorAction::RemoveDirectory)
    }

    /// Copy every file; `total_size` is the diff's precomputed total
    pub fn copy_files<'a>(
        files: impl IntoIterator<Item = (&'a Path, u64)>,
        total_size: u64,
    ) -> Self {
        Self {
            kind: PhaseKind::CopyFiles,
            actions: files
                .into_iter()
                .map(|(path, size)| MirrorAction::CopyFile {
                    path: path.to_path_buf(),
                    size,
                })
                .collect(),
            total: total_size,
        }
    }

    /// Remove every file; `total_size` is the diff's precomputed total
    pub fn remove_files<'a>(
        files: impl IntoIterator<Item = (&'a Path, u64)>,
        total_size: u64,
    ) -> Self {
        Self {
            kind: PhaseKind::RemoveFiles,
            actions: files
                .into_iter()
                .map(|(path, size)| MirrorAction::RemoveFile {
                    path: path.to_path_buf(),
                    size,
                })
                .collect(),
            total: total_size,
        }
    }

    fn directories(
        kind: PhaseKind,
        paths: Vec<RelativePath>,
        action: fn(RelativePath) -> MirrorAction,
    ) -> Self {
        Self {
            kind,
            total: paths.len() as u64,
            actions: paths.into_iter().map(action).collect(),
        }
    }

    /// Whether the phase has nothing to do
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_phase_counts_actions() {
        let phase = Phase::remove_folders(vec!["b".into(), "a".into()]);

        assert_eq!(phase.kind, PhaseKind::RemoveFolders);
        assert_eq!(phase.total, 2);
        assert_eq!(phase.actions[0], MirrorAction::RemoveDirectory("b".into()));
        assert_eq!(phase.actions[0].operation(), Operation::RemoveDirectory);
    }

    #[test]
    fn test_journal_headers() {
        assert_eq!(
            PhaseKind::MakeFolders.journal_header(),
            "directories made: (if a folder had some parent directories, they were also created)"
        );
        assert_eq!(
            PhaseKind::RemoveFolders.journal_header(),
            "directories removed: (if a folder had some subdirectories, they were also removed)"
        );
    }

    #[test]
    fn test_file_phase_keeps_order_and_total() {
        let phase = Phase::copy_files([(Path::new("x"), 100), (Path::new("y"), 250)], 350);

        assert_eq!(phase.total, 350);
        assert_eq!(phase.actions.len(), 2);
        assert_eq!(phase.actions[1].path(), Path::new("y"));
        assert_eq!(phase.actions[1].to_string(), "copy y");
    }

    #[test]
    fn test_empty_phase() {
        assert!(Phase::make_folders(Vec::new()).is_empty());
    }
}
