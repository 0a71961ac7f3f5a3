use std::path::{Component, Path, PathBuf};

use crate::errors::{FileOperation, IoError};

pub fn normalize_path(source: &Path) -> PathBuf {
    let mut new_path = PathBuf::new();

    for component in source.components() {
        match component {
            // Skip the current-dir marker "."
            Component::CurDir => {}

            // For "..", pop the last component if possible
            Component::ParentDir => {
                new_path.pop();
            }

            // For normal components, push them
            other => new_path.push(other.as_os_str()),
        }
    }

    new_path
}

/// Resolves `path` against the current working directory and normalizes the result.
///
/// The path does not have to exist.
pub fn resolve_base_path(path: &Path) -> Result<PathBuf, IoError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir()
            .map_err(|error| IoError::new(FileOperation::CurrentDir, path.into(), error))?;
        cwd.join(path)
    };

    Ok(normalize_path(&absolute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_normalize_path_drops_cur_dir() {
        assert_eq!(
            normalize_path(Path::new("/tmp/./a/./b")),
            PathBuf::from("/tmp/a/b")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_path_pops_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/tmp/a/../b/c/..")),
            PathBuf::from("/tmp/b")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_path_does_not_escape_root() {
        assert_eq!(normalize_path(Path::new("/../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_base_path_is_absolute() {
        let resolved = resolve_base_path(Path::new(".")).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, normalize_path(&cwd));
    }

    #[test]
    fn test_resolve_base_path_joins_relative() {
        let resolved = resolve_base_path(Path::new("a/b/../c")).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(resolved, normalize_path(&cwd).join("a").join("c"));
    }
}
