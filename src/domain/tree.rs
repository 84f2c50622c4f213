//! Team hierarchy as a binary tree of employees.

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::node::normalize;
use crate::domain::render::{PreOrder, Rendering};
use crate::domain::{EmployeeNode, Side};

/// Externally visible state of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    Empty,
    Populated,
}

/// Outcome of one recursive attach step.
enum Attach {
    Inserted,
    Occupied,
    NotFound,
}

/// Binary team tree rooted at the team lead.
///
/// The root is set once and never replaced. Nodes are only ever added under an
/// existing manager, each child slot filled at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamTree {
    root: Option<Box<EmployeeNode>>,
}

impl TeamTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&EmployeeNode> {
        self.root.as_deref()
    }

    pub fn state(&self) -> TreeState {
        match self.root {
            Some(_) => TreeState::Populated,
            None => TreeState::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sets the team lead. Fails if one already exists, leaving it untouched.
    pub fn create_root(&mut self, name: &str) -> TreeResult<()> {
        if let Some(root) = &self.root {
            return Err(TreeError::AlreadyExists {
                name: root.name().to_string(),
            });
        }
        self.root = Some(Box::new(EmployeeNode::new(name)));
        Ok(())
    }

    /// Attaches `employee_name` under the first node answering to `manager_name`.
    ///
    /// `side` is parsed before anything else, so a bad token fails with
    /// [`TreeError::InvalidSide`] even on an empty tree.
    pub fn insert(&mut self, manager_name: &str, employee_name: &str, side: &str) -> TreeResult<()> {
        let side: Side = side.parse()?;
        self.insert_at(manager_name, employee_name, side)
    }

    /// Typed variant of [`TeamTree::insert`].
    ///
    /// Search is depth-first, left before right. The first node whose name
    /// matches decides the outcome, even when its slot is taken and a later
    /// namesake has room.
    pub fn insert_at(&mut self, manager_name: &str, employee_name: &str, side: Side) -> TreeResult<()> {
        let root = self.root.as_deref_mut().ok_or(TreeError::EmptyTree)?;
        let manager = normalize(manager_name);
        match attach(root, &manager, employee_name, side) {
            Attach::Inserted => Ok(()),
            Attach::Occupied => Err(TreeError::SlotOccupied {
                manager: manager_name.to_string(),
                side,
            }),
            Attach::NotFound => Err(TreeError::ManagerNotFound(manager_name.to_string())),
        }
    }

    /// Lazy pre-order `(depth, name)` sequence.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    /// Eager pre-order listing, or [`Rendering::Empty`] without a team lead.
    pub fn render(&self) -> Rendering {
        self.pre_order().collect()
    }

    /// First node answering to `name`, in insertion search order.
    pub fn find(&self, name: &str) -> Option<&EmployeeNode> {
        let wanted = normalize(name);
        let mut stack: Vec<&EmployeeNode> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            if normalize(node.name()) == wanted {
                return Some(node);
            }
            stack.extend(node.right());
            stack.extend(node.left());
        }
        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Number of levels, 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.pre_order().map(|(depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Names of nodes without subordinates, left to right.
    pub fn leaf_names(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root() {
            collect_leaves(root, &mut leaves);
        }
        leaves
    }
}

fn attach(node: &mut EmployeeNode, manager: &str, employee: &str, side: Side) -> Attach {
    if normalize(node.name()) == manager {
        let slot = node.slot_mut(side);
        if slot.is_some() {
            return Attach::Occupied;
        }
        *slot = Some(Box::new(EmployeeNode::new(employee)));
        return Attach::Inserted;
    }

    let (left, right) = node.children_mut();
    if let Some(left) = left {
        match attach(left, manager, employee, side) {
            Attach::NotFound => {}
            settled => return settled,
        }
    }
    match right {
        Some(right) => attach(right, manager, employee, side),
        None => Attach::NotFound,
    }
}

fn collect_leaves(node: &EmployeeNode, leaves: &mut Vec<String>) {
    if node.is_leaf() {
        leaves.push(node.name().to_string());
        return;
    }
    for child in [node.left(), node.right()].into_iter().flatten() {
        collect_leaves(child, leaves);
    }
}
