use crate::{
    builder::{self, BuildError},
    errors::IoError,
    preview::preview_as_tree,
    tree::{API_DIR, ANLEAGUE_NODEJS, PROJECT_DIR},
    utils::resolve_base_path,
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum StructureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

const DEFAULT_BASE_PATH: &str = ".";

/// Returns the generated project directory for a given base path.
pub fn project_root(base: &Path) -> PathBuf {
    base.join(API_DIR).join(PROJECT_DIR)
}

/// Creates the anleague-nodejs structure under `path`, or under the current directory when
/// `path` is `None`, and returns the resolved absolute base path.
///
/// # Errors
///
/// Returns a [`StructureError`] if:
///
/// - The current directory cannot be read while resolving a relative `path`.
/// - A directory or file cannot be created.
pub fn create_structure(path: Option<&Path>) -> Result<PathBuf, StructureError> {
    let base = resolve_base_path(path.unwrap_or(Path::new(DEFAULT_BASE_PATH)))?;

    log::info!("creating project structure under: {}", base.display());

    builder::create_directory(&base)?;
    builder::build(&base, &ANLEAGUE_NODEJS)?;

    Ok(base)
}

/// Prints the structure [`create_structure`] would create under `path` without touching disk.
///
/// # Errors
///
/// Returns a [`StructureError`] if the current directory cannot be read.
pub fn preview_structure(path: Option<&Path>) -> Result<PathBuf, StructureError> {
    let base = resolve_base_path(path.unwrap_or(Path::new(DEFAULT_BASE_PATH)))?;

    log::debug!("previewing project structure under: {}", base.display());

    preview_as_tree(&ANLEAGUE_NODEJS, &base);

    Ok(base)
}
