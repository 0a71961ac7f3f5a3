use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A single entry of a [`Tree`] description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A directory whose children are themselves described by a [`Tree`].
    Dir(Tree),
    /// A directory holding only empty files, listed by name.
    Files(Vec<String>),
    /// An empty file created directly at the parent's location.
    File,
}

/// An ordered mapping of entry name to [`TreeNode`].
///
/// Creation follows declaration order, so an [`IndexMap`] is used rather than a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree(pub IndexMap<String, TreeNode>);

/// A flattened view of one directory or file a [`Tree`] will create, relative to the base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub destination: PathBuf,
    pub is_file: bool,
}

impl Tree {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn dir(mut self, name: &str, children: Tree) -> Self {
        self.0.insert(name.to_string(), TreeNode::Dir(children));
        self
    }

    pub fn files(mut self, name: &str, files: &[&str]) -> Self {
        let files = files.iter().map(|file| file.to_string()).collect();
        self.0.insert(name.to_string(), TreeNode::Files(files));
        self
    }

    pub fn file(mut self, name: &str) -> Self {
        self.0.insert(name.to_string(), TreeNode::File);
        self
    }

    /// Flattens the tree into the entries it creates, in creation order.
    pub fn entries(&self) -> Vec<PlannedEntry> {
        let mut entries = Vec::new();
        collect_entries(self, Path::new(""), &mut entries);
        entries
    }

    pub fn directory_count(&self) -> usize {
        self.entries().iter().filter(|e| !e.is_file).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries().iter().filter(|e| e.is_file).count()
    }
}

fn collect_entries(tree: &Tree, prefix: &Path, entries: &mut Vec<PlannedEntry>) {
    for (name, node) in &tree.0 {
        let destination = prefix.join(name);

        match node {
            TreeNode::Dir(children) => {
                entries.push(PlannedEntry {
                    destination: destination.clone(),
                    is_file: false,
                });
                collect_entries(children, &destination, entries);
            }
            TreeNode::Files(files) => {
                entries.push(PlannedEntry {
                    destination: destination.clone(),
                    is_file: false,
                });
                for file in files {
                    entries.push(PlannedEntry {
                        destination: destination.join(file),
                        is_file: true,
                    });
                }
            }
            TreeNode::File => entries.push(PlannedEntry {
                destination,
                is_file: true,
            }),
        }
    }
}

/// Name of the top level directory the structure lives in.
pub const API_DIR: &str = "anleague-api";
/// Name of the generated project directory, nested in [`API_DIR`].
pub const PROJECT_DIR: &str = "anleague-nodejs";

lazy_static::lazy_static! {
    /// The anleague-nodejs project skeleton.
    pub static ref ANLEAGUE_NODEJS: Tree = Tree::new().dir(
        API_DIR,
        Tree::new().dir(
            PROJECT_DIR,
            Tree::new()
                .files("models", &["user.js", "team.js", "match.js", "tournament.js"])
                .files("routes", &["auth.js", "teams.js", "admin.js", "public.js"])
                .files(
                    "controllers",
                    &["teamController.js", "matchController.js", "etc."],
                )
                .files("views", &["bracket.ejs", "matchSummary.ejs", "etc."])
                .files("public", &["styles.css"])
                .file(".env")
                .file("app.js")
                .file("package.json")
                .file("README.md"),
        ),
    );
}
