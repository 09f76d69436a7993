//! Validation of the source and destination roots before any walk

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, Operation, Result, TreeRole};

/// Resolve `path` to an absolute, canonical directory path
///
/// # Errors
///
/// - [`MirrorError::Argument`] if `path` is empty
/// - [`MirrorError::NotFound`] if it does not exist or is not a directory
/// - [`MirrorError::Io`] if canonicalization fails for any other reason
pub fn resolve_root(path: &Path, role: TreeRole) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(MirrorError::Argument(format!("the {role} folder is missing")));
    }

    let canonical = match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(MirrorError::NotFound {
                role,
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(MirrorError::io(Operation::Resolve, path, err)),
    };

    if !canonical.is_dir() {
        return Err(MirrorError::NotFound {
            role,
            path: path.to_path_buf(),
        });
    }

    Ok(canonical)
}

/// Resolve both roots, returning `(source, destination)`
///
/// # Errors
///
/// Fails like [`resolve_root`] for either side, and with
/// [`MirrorError::Argument`] when both resolve to the same directory or one
/// lies inside the other.
pub fn validate_roots(source: &Path, destination: &Path) -> Result<(PathBuf, PathBuf)> {
    let source = resolve_root(source, TreeRole::Source)?;
    let destination = resolve_root(destination, TreeRole::Destination)?;

    if source == destination {
        return Err(MirrorError::Argument(format!(
            "source and destination are the same folder: {}",
            source.display()
        )));
    }

    if source.starts_with(&destination) || destination.starts_with(&source) {
        return Err(MirrorError::Argument(format!(
            "source and destination are nested: {} and {}",
            source.display(),
            destination.display()
        )));
    }

    Ok((source, destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_path_is_argument_error() {
        let err = resolve_root(Path::new(""), TreeRole::Source).unwrap_err();
        assert!(matches!(err, MirrorError::Argument(_)));
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");

        let err = resolve_root(&missing, TreeRole::Destination).unwrap_err();
        assert!(matches!(
            err,
            MirrorError::NotFound {
                role: TreeRole::Destination,
                ..
            }
        ));
    }

    #[test]
    fn test_file_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "content").unwrap();

        let err = resolve_root(&file, TreeRole::Source).unwrap_err();
        assert!(matches!(
            err,
            MirrorError::NotFound {
                role: TreeRole::Source,
                ..
            }
        ));
    }

    #[test]
    fn test_roots_are_made_absolute() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();

        let (resolved_src, resolved_dst) =
            validate_roots(&src.join("..").join("src"), &dst).unwrap();

        assert!(resolved_src.is_absolute());
        assert_eq!(resolved_src, dunce::canonicalize(&src).unwrap());
        assert_eq!(resolved_dst, dunce::canonicalize(&dst).unwrap());
    }

    #[test]
    fn test_same_root_is_rejected() {
        let tmp = TempDir::new().unwrap();

        let err = validate_roots(tmp.path(), tmp.path()).unwrap_err();
        assert!(matches!(err, MirrorError::Argument(_)));
    }

    #[test]
    fn test_source_inside_destination_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("sub");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("keep.txt"), "keep").unwrap();

        let err = validate_roots(&src, tmp.path()).unwrap_err();
        assert!(matches!(err, MirrorError::Argument(_)));
        assert!(err.to_string().contains("nested"));
        assert!(src.join("keep.txt").exists());
    }

    #[test]
    fn test_destination_inside_source_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("backup");
        fs::create_dir(&dst).unwrap();

        let err = validate_roots(tmp.path(), &dst).unwrap_err();
        assert!(matches!(err, MirrorError::Argument(_)));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_accepted() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("data");
        let dst = tmp.path().join("data-copy");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();

        assert!(validate_roots(&src, &dst).is_ok());
    }

    #[test]
    fn test_source_checked_before_destination() {
        let tmp = TempDir::new().unwrap();

        let err = validate_roots(&tmp.path().join("a"), &tmp.path().join("b")).unwrap_err();
        assert!(matches!(
            err,
            MirrorError::NotFound {
                role: TreeRole::Source,
                ..
            }
        ));
    }
}
