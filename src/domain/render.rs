//! Pre-order traversal and the depth-indented listing built on it.

use std::fmt;

use crate::domain::EmployeeNode;

/// Lazy pre-order walk: node, then its left subtree, then its right subtree.
///
/// Yields `(depth, name)` with the starting node at depth 0.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a EmployeeNode)>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a EmployeeNode>) -> Self {
        Self {
            stack: root.map(|node| (0, node)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Right is pushed first so the whole left subtree is yielded before it
        if let Some(right) = node.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, node.name()))
    }
}

/// One line of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    pub depth: usize,
    pub name: String,
}

impl RenderEntry {
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
        }
    }
}

/// Materialized result of rendering a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// Sentinel for a tree without a team lead.
    Empty,
    /// Pre-order entries, never empty.
    Entries(Vec<RenderEntry>),
}

impl Rendering {
    pub fn is_empty(&self) -> bool {
        matches!(self, Rendering::Empty)
    }

    pub fn entries(&self) -> &[RenderEntry] {
        match self {
            Rendering::Empty => &[],
            Rendering::Entries(entries) => entries,
        }
    }

    pub fn to_text(&self, layout: &IndentLayout) -> String {
        match self {
            Rendering::Empty => layout.empty_label.clone(),
            Rendering::Entries(entries) => entries
                .iter()
                .map(|e| {
                    format!(
                        "{}{} {}",
                        " ".repeat(layout.indent.saturating_mul(e.depth)),
                        layout.bullet,
                        e.name
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl<'a> FromIterator<(usize, &'a str)> for Rendering {
    fn from_iter<I: IntoIterator<Item = (usize, &'a str)>>(iter: I) -> Self {
        let entries: Vec<RenderEntry> = iter
            .into_iter()
            .map(|(depth, name)| RenderEntry::new(depth, name))
            .collect();
        if entries.is_empty() {
            Rendering::Empty
        } else {
            Rendering::Entries(entries)
        }
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&IndentLayout::default()))
    }
}

/// Text layout for the indented listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentLayout {
    /// Spaces per depth level
    pub indent: usize,
    /// Marker printed before each name
    pub bullet: String,
    /// Printed instead of a listing when the tree is empty
    pub empty_label: String,
}

impl Default for IndentLayout {
    fn default() -> Self {
        Self {
            indent: 2,
            bullet: "-".into(),
            empty_label: "(empty)".into(),
        }
    }
}
