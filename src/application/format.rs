//! Text output for the team structure.

use termtree::Tree;

use crate::config::{Settings, Style};
use crate::domain::{EmployeeNode, TeamTree};

/// Format the tree per configured style. An empty tree yields the empty label.
pub fn format_tree(tree: &TeamTree, settings: &Settings) -> String {
    match (settings.style, tree.root()) {
        (Style::Indented, _) => tree.render().to_text(&settings.layout()),
        (Style::Tree, Some(root)) => to_termtree(root).to_string().trim_end().to_string(),
        (Style::Tree, None) => settings.empty_label.clone(),
    }
}

/// Convert a subtree into a `termtree::Tree`, left child before right.
pub fn to_termtree(node: &EmployeeNode) -> Tree<String> {
    Tree::new(node.name().to_string()).with_leaves(
        [node.left(), node.right()]
            .into_iter()
            .flatten()
            .map(to_termtree),
    )
}
