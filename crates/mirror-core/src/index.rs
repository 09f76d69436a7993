//! Flat, relative-path snapshots of a directory tree
//!
//! A [`TreeIndex`] is built once per tree per run and never refreshed: every
//! later step (diff, ordering, progress accounting) works from the sizes
//! recorded here.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Path of an entry relative to the root of the tree it was found in
pub type RelativePath = PathBuf;

/// Every directory found during one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySet {
    entries: HashSet<RelativePath>,
}

impl DirectorySet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory, returning `false` if it was already present
    pub fn insert(&mut self, path: impl Into<RelativePath>) -> bool {
        self.entries.insert(path.into())
    }

    /// Whether `path` is in the set
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains(path)
    }

    /// Number of directories
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the directories in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

impl<P: Into<RelativePath>> FromIterator<P> for DirectorySet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every regular file found during one walk, with its size in bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: HashMap<RelativePath, u64>,
}

impl FileIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file and its size, returning the previous size if any
    pub fn insert(&mut self, path: impl Into<RelativePath>, size: u64) -> Option<u64> {
        self.entries.insert(path.into(), size)
    }

    /// Size recorded for `path`
    #[must_use]
    pub fn size_of(&self, path: &Path) -> Option<u64> {
        self.entries.get(path).copied()
    }

    /// Whether `path` is in the index
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of files
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, size)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, u64)> {
        self.entries.iter().map(|(path, size)| (path.as_path(), *size))
    }

    /// Sum of all recorded sizes
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.entries.values().sum()
    }
}

impl<P: Into<RelativePath>> FromIterator<(P, u64)> for FileIndex {
    fn from_iter<I: IntoIterator<Item = (P, u64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, size)| (path.into(), size))
                .collect(),
        }
    }
}

/// Snapshot of one tree: its directories and its regular files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeIndex {
    /// Directories below the root (the root itself is never recorded)
    pub directories: DirectorySet,
    /// Regular, non-symlink files below the root
    pub files: FileIndex,
}

/// Anything exposing a collection of relative paths
pub trait PathKeys {
    /// The paths, in arbitrary order
    fn path_keys(&self) -> impl Iterator<Item = &Path>;
}

impl PathKeys for DirectorySet {
    fn path_keys(&self) -> impl Iterator<Item = &Path> {
        self.iter()
    }
}

impl PathKeys for FileIndex {
    fn path_keys(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }
}

/// Keys of `keys` sorted ascending by path components
///
/// Component order keeps every subtree contiguous: a directory is immediately
/// followed by all of its descendants, before any sibling.
#[must_use]
pub fn sorted_paths<K: PathKeys>(keys: &K) -> Vec<&Path> {
    let mut sorted: Vec<&Path> = keys.path_keys().collect();
    sorted.sort_unstable();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_index_total_size() {
        let files: FileIndex = [("x", 100), ("y", 250)].into_iter().collect();
        assert_eq!(files.total_size(), 350);
        assert_eq!(files.size_of(Path::new("y")), Some(250));
        assert_eq!(files.size_of(Path::new("z")), None);
    }

    #[test]
    fn test_insert_keeps_keys_unique() {
        let mut dirs = DirectorySet::new();
        assert!(dirs.insert("a"));
        assert!(!dirs.insert("a"));
        assert_eq!(dirs.len(), 1);

        let mut files = FileIndex::new();
        assert_eq!(files.insert("f", 1), None);
        assert_eq!(files.insert("f", 2), Some(1));
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_sorted_paths_keeps_subtrees_contiguous() {
        let dirs: DirectorySet = ["a-c", "a/b", "a", "b"].into_iter().collect();
        let sorted = sorted_paths(&dirs);
        assert_eq!(
            sorted,
            vec![
                Path::new("a"),
                Path::new("a/b"),
                Path::new("a-c"),
                Path::new("b")
            ]
        );
    }

    #[test]
    fn test_sorted_paths_works_for_files() {
        let files: FileIndex = [("b.txt", 1), ("a.txt", 2)].into_iter().collect();
        assert_eq!(
            sorted_paths(&files),
            vec![Path::new("a.txt"), Path::new("b.txt")]
        );
    }
}
