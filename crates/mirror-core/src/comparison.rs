//! Set differences between a destination and a source index
//!
//! Two files are identical when they share a relative path and a size.
//! Nothing here touches the filesystem and nothing here can fail.


use std::path::Path;

use crate::index::{DirectorySet, FileIndex};

/// Files selected by a diff, with their combined size
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDiff {
    /// Selected files and the sizes they were indexed with
    pub files: FileIndex,
    /// Sum of the sizes in `files`, computed once at diff time
    pub total_size: u64,
}

impl FileDiff {
    /// Number of files selected
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Directories present in `src` but not in `dst`
#[must_use]
pub fn missing_folders(dst: &DirectorySet, src: &DirectorySet) -> DirectorySet {
    src.iter().filter(|dir| !dst.contains(dir)).collect()
}

/// Directories present in `dst` but not in `src`
#[must_use]
pub fn folders_to_clean(dst: &DirectorySet, src: &DirectorySet) -> DirectorySet {
    dst.iter().filter(|dir| !src.contains(dir)).collect()
}

/// Files in `src` that are absent from `dst` or recorded there with another size
///
/// Sizes and the total come from `src`.
#[must_use]
pub fn missing_files(dst: &FileIndex, src: &FileIndex) -> FileDiff {
    select(src, |path, size| dst.size_of(path) != Some(size))
}

/// Files in `dst` that are absent from `src`
///
/// Sizes and the total come from `dst`.
#[must_use]
pub fn files_to_clean(dst: &FileIndex, src: &FileIndex) -> FileDiff {
    select(dst, |path, _| !src.contains(path))
}

fn select(from: &FileIndex, keep: impl Fn(&Path, u64) -> bool) -> FileDiff {
    let mut diff = FileDiff::default();
    for (path, size) in from.iter().filter(|&(path, size)| keep(path, size)) {
        diff.files.insert(path, size);
        diff.total_size += size;
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(paths: &[&str]) -> DirectorySet {
        paths.iter().copied().collect()
    }

    fn files(entries: &[(&str, u64)]) -> FileIndex {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_missing_folders() {
        let src = dirs(&["same", "same/inner", "same/inner/not_in_dst"]);
        let dst = dirs(&["same", "same/inner", "same/inner/not_in_src"]);

        assert_eq!(
            missing_folders(&dst, &src),
            dirs(&["same/inner/not_in_dst"])
        );
    }

    #[test]
    fn test_folders_to_clean() {
        let src = dirs(&["same", "same/inner", "same/inner/not_in_dst"]);
        let dst = dirs(&["same", "same/inner", "same/inner/not_in_src"]);

        assert_eq!(
            folders_to_clean(&dst, &src),
            dirs(&["same/inner/not_in_src"])
        );
    }

    #[test]
    fn test_missing_files_includes_size_mismatch() {
        let src = files(&[("same", 1), ("inner/not_in_dst", 1), ("different", 2)]);
        let dst = files(&[("same", 1), ("inner/not_in_src", 1), ("different", 1)]);

        let diff = missing_files(&dst, &src);

        assert_eq!(diff.files, files(&[("inner/not_in_dst", 1), ("different", 2)]));
        assert_eq!(diff.total_size, 3);
    }

    #[test]
    fn test_files_to_clean_uses_destination_sizes() {
        let src = files(&[("same", 1), ("inner/not_in_dst", 1), ("different", 2)]);
        let dst = files(&[("same", 1), ("inner/not_in_src", 7), ("different", 1)]);

        let diff = files_to_clean(&dst, &src);

        assert_eq!(diff.files, files(&[("inner/not_in_src", 7)]));
        assert_eq!(diff.total_size, 7);
    }

    #[test]
    fn test_total_is_sum_of_returned_entries() {
        let src = files(&[("x", 100), ("y", 250)]);

        let diff = missing_files(&FileIndex::new(), &src);

        assert_eq!(diff.len(), 2);
        assert_eq!(diff.total_size, 350);
    }

    #[test]
    fn test_equal_size_is_identical() {
        let src = files(&[("report.pdf", 4096)]);
        let dst = files(&[("report.pdf", 4096)]);

        assert!(missing_files(&dst, &src).is_empty());

        let grown = files(&[("report.pdf", 4097)]);
        let diff = missing_files(&dst, &grown);
        assert_eq!(diff.files.size_of(Path::new("report.pdf")), Some(4097));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let src = files(&[("a", 1)]);
        let dst = files(&[("b", 2)]);
        let (src_before, dst_before) = (src.clone(), dst.clone());

        let _ = missing_files(&dst, &src);
        let _ = files_to_clean(&dst, &src);

        assert_eq!(src, src_before);
        assert_eq!(dst, dst_before);
    }

    #[test]
    fn test_empty_indexes() {
        assert!(missing_folders(&DirectorySet::new(), &DirectorySet::new()).is_empty());
        assert_eq!(
            files_to_clean(&FileIndex::new(), &FileIndex::new()),
            FileDiff::default()
        );
    }
}
