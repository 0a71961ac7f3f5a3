use crate::{
    errors::{FileOperation, IoError},
    tree::{Tree, TreeNode},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{fs::OpenOptions, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    #[error("I/O error while building structure")]
    #[diagnostic(code(create_structure::builder::io))]
    Io(#[from] IoError),
}

/// Materializes `tree` on disk relative to `base_path`, in declaration order.
///
/// Directories are created if missing and files are opened in append mode, so running this
/// against an existing structure leaves it (and the content of its files) intact.
///
/// # Errors
///
/// Returns a [`BuildError`] on the first directory or file that cannot be created. Entries
/// created before the failure are left in place.
pub fn build(base_path: &Path, tree: &Tree) -> Result<(), BuildError> {
    for (name, node) in &tree.0 {
        let path = base_path.join(name);

        match node {
            TreeNode::Dir(children) => {
                create_directory(&path)?;
                build(&path, children)?;
            }
            TreeNode::Files(files) => {
                create_directory(&path)?;
                for file in files {
                    touch_file(&path.join(file))?;
                }
            }
            TreeNode::File => touch_file(&path)?,
        }
    }

    Ok(())
}
/// Creates all directories in the specified path if they do not exist.
pub(crate) fn create_directory(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("ensured directory: {}", path.display());

    Ok(())
}
/// Opens the file in create+append mode and closes it right away.
///
/// Existing content is never truncated.
fn touch_file(path: &Path) -> Result<(), BuildError> {
    let existed = path.is_file();

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| IoError::new(FileOperation::Touch, path.into(), error))?;

    let msg = if existed {
        format!("{} {}", "exists".yellow(), path.display())
    } else {
        format!("{} {}", "create".green(), path.display())
    };

    println!("{}", &msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ANLEAGUE_NODEJS;
    use std::fs;

    #[test]
    fn test_build_creates_every_planned_entry() {
        let dir = tempfile::tempdir().unwrap();

        build(dir.path(), &ANLEAGUE_NODEJS).unwrap();

        for entry in ANLEAGUE_NODEJS.entries() {
            let path = dir.path().join(&entry.destination);
            if entry.is_file {
                assert!(path.is_file(), "missing file: {}", path.display());
                assert_eq!(fs::metadata(&path).unwrap().len(), 0);
            } else {
                assert!(path.is_dir(), "missing dir: {}", path.display());
            }
        }
    }

    #[test]
    fn test_build_creates_missing_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("a").join("b").join("c");
        let tree = Tree::new().files("models", &["user.js"]).file("app.js");

        build(&base, &tree).unwrap();

        assert!(base.join("models").join("user.js").is_file());
        assert!(base.join("app.js").is_file());
    }

    #[test]
    fn test_build_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let tree = Tree::new().file(".env").files("public", &["styles.css"]);

        fs::write(dir.path().join(".env"), "PORT=3000\n").unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();
        fs::write(dir.path().join("public").join("styles.css"), "body {}").unwrap();

        build(dir.path(), &tree).unwrap();
        build(dir.path(), &tree).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(".env")).unwrap(),
            "PORT=3000\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("public").join("styles.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn test_build_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("not-a-dir");
        fs::write(&base, "").unwrap();

        let result = build(&base, &Tree::new().files("models", &["user.js"]));

        match result {
            Err(BuildError::Io(error)) => {
                assert!(matches!(error.operation, FileOperation::Mkdir));
                assert_eq!(error.path, base.join("models"));
            }
            Ok(()) => panic!("expected build to fail"),
        }
    }

    #[test]
    fn test_build_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("routes"), "").unwrap();
        let tree = Tree::new()
            .files("models", &["user.js"])
            .files("routes", &["auth.js"])
            .file("app.js");

        assert!(build(dir.path(), &tree).is_err());

        assert!(dir.path().join("models").join("user.js").is_file());
        assert!(!dir.path().join("app.js").exists());
    }
}
