//! Ordering of directory operations with nested entries collapsed
//!
//! Both orders assume the primitive applied to each path is recursive:
//! "create with parents" for [`creation_order`] and "remove with contents"
//! for [`deletion_order`]. Any path covered by such a call on another path
//! in the plan is dropped.

use std::path::Path;

use crate::index::{DirectorySet, RelativePath, sorted_paths};

/// Whether `ancestor` is a strict ancestor of `path`
///
/// Compares whole components, so `ab` is not an ancestor of `abc`.
#[must_use]
pub fn is_ancestor(ancestor: &Path, path: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}

/// Ascending order keeping only the deepest member of each ancestor chain
///
/// A path is dropped when the path right after it in sorted order is one of
/// its descendants, since creating that descendant with all missing parents
/// creates it too. The last path is always kept.
#[must_use]
pub fn creation_order(paths: &DirectorySet) -> Vec<RelativePath> {
    let sorted = sorted_paths(paths);

    let mut order: Vec<RelativePath> = sorted
        .windows(2)
        .filter(|pair| !is_ancestor(pair[0], pair[1]))
        .map(|pair| pair[0].to_path_buf())
        .collect();

    if let Some(last) = sorted.last() {
        order.push(last.to_path_buf());
    }

    order
}

/// Descending order keeping only the shallowest member of each subtree
///
/// Removing a directory recursively removes everything below it, so a
/// descendant of another planned path must never be targeted on its own.
#[must_use]
pub fn deletion_order(paths: &DirectorySet) -> Vec<RelativePath> {
    let mut roots: Vec<&Path> = Vec::new();

    // Sorted by components, each subtree directly follows its root.
    for path in sorted_paths(paths) {
        if roots.last().is_none_or(|root| !is_ancestor(root, path)) {
            roots.push(path);
        }
    }

    roots.into_iter().rev().map(Path::to_path_buf).collect()
}
