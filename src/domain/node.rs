use std::fmt;

use crate::domain::Side;

/// Employee in the team hierarchy.
///
/// Owns at most one left and one right subordinate. There is no parent link,
/// traversal is strictly top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNode {
    name: String,
    left: Option<Box<EmployeeNode>>,
    right: Option<Box<EmployeeNode>>,
}

impl EmployeeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&EmployeeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&EmployeeNode> {
        self.right.as_deref()
    }

    pub fn child(&self, side: Side) -> Option<&EmployeeNode> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Case-insensitive comparison, surrounding whitespace ignored on both sides.
    pub fn answers_to(&self, name: &str) -> bool {
        normalize(&self.name) == normalize(name)
    }

    // Slot writes are reserved for the tree, which enforces the fill-once rule.
    pub(super) fn slot_mut(&mut self, side: Side) -> &mut Option<Box<EmployeeNode>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(super) fn children_mut(
        &mut self,
    ) -> (Option<&mut EmployeeNode>, Option<&mut EmployeeNode>) {
        (self.left.as_deref_mut(), self.right.as_deref_mut())
    }
}

impl fmt::Display for EmployeeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
