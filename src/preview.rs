use crate::tree::{Tree, TreeNode};
use colored::Colorize;
use std::path::Path;

fn push_line(out: &mut String, prefix: &str, is_last: bool, name: String) {
    let connector = if is_last { "└── " } else { "├── " };

    out.push_str(&format!("{}{}{}\n", prefix.yellow(), connector.yellow(), name));
}

fn dir_label(name: &str) -> String {
    format!("{}/", name).blue().to_string()
}

fn file_label(name: &str) -> String {
    name.green().to_string()
}

/// Appends the children of `tree` in a nice ASCII style.
fn render_children(tree: &Tree, prefix: &str, out: &mut String) {
    let len = tree.0.len();

    for (i, (name, node)) in tree.0.iter().enumerate() {
        let is_last = i == len - 1;
        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        match node {
            TreeNode::Dir(children) => {
                push_line(out, prefix, is_last, dir_label(name));
                render_children(children, &child_prefix, out);
            }
            TreeNode::Files(files) => {
                push_line(out, prefix, is_last, dir_label(name));
                for (j, file) in files.iter().enumerate() {
                    push_line(out, &child_prefix, j == files.len() - 1, file_label(file));
                }
            }
            TreeNode::File => push_line(out, prefix, is_last, file_label(name)),
        }
    }
}

/// Renders `tree` below `root_label`, followed by a directory/file count summary.
pub fn render_tree(tree: &Tree, root_label: &str) -> String {
    let mut out = format!("{}\n", root_label.blue());

    render_children(tree, "", &mut out);

    out.push_str(&format!(
        "\n{} directories, {} files\n",
        tree.directory_count(),
        tree.file_count()
    ));

    out
}

pub fn preview_as_tree(tree: &Tree, base: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(tree, &base.display().to_string()));

    let fancy_prompt = format!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        "Nothing was written. Run without --preview to create it.".bright_green()
    );

    println!("{}", fancy_prompt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree_layout() {
        colored::control::set_override(false);

        let tree = Tree::new()
            .files("models", &["user.js", "team.js"])
            .file("app.js");

        let rendered = render_tree(&tree, "root");

        let expected = "root\n\
                        ├── models/\n\
                        │   ├── user.js\n\
                        │   └── team.js\n\
                        └── app.js\n\
                        \n\
                        1 directories, 3 files\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_nested_dir_uses_blank_prefix_after_last() {
        colored::control::set_override(false);

        let tree = Tree::new().dir("api", Tree::new().file(".env"));

        let rendered = render_tree(&tree, "root");

        assert!(rendered.contains("└── api/\n    └── .env\n"));
    }
}
