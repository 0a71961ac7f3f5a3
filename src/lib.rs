//! Creates the fixed anleague-nodejs project skeleton on disk.
mod api;
pub mod builder;
pub mod errors;
pub mod preview;
pub mod tree;
pub mod utils;

pub use api::{create_structure, preview_structure, project_root, StructureError};
