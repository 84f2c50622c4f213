//! Company directory service
//!
//! Owns one team tree for the lifetime of a session and applies user input to it.

use tracing::{debug, instrument};

use crate::application::format::format_tree;
use crate::application::placement::Placement;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{Side, TeamTree};

/// Service wrapping a [`TeamTree`] with input cleanup and display settings.
#[derive(Debug)]
pub struct Directory {
    tree: TeamTree,
    settings: Settings,
}

impl Directory {
    pub fn new(settings: Settings) -> Self {
        Self {
            tree: TeamTree::new(),
            settings,
        }
    }

    pub fn tree(&self) -> &TeamTree {
        &self.tree
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn has_team_lead(&self) -> bool {
        !self.tree.is_empty()
    }

    /// Set the root. Returns the stored (trimmed) name.
    #[instrument(level = "debug", skip(self))]
    pub fn add_team_lead(&mut self, name: &str) -> ApplicationResult<String> {
        let name = non_empty(name, "team lead")?;
        self.tree.create_root(name)?;
        debug!("team lead set: {}", name);
        Ok(name.to_string())
    }

    /// Attach an employee under a manager. Returns the side used.
    #[instrument(level = "debug", skip(self))]
    pub fn add_employee(
        &mut self,
        manager: &str,
        employee: &str,
        side: &str,
    ) -> ApplicationResult<Side> {
        let manager = non_empty(manager, "manager")?;
        let employee = non_empty(employee, "employee")?;
        let side: Side = side.parse()?;
        self.tree.insert_at(manager, employee, side)?;
        debug!("{} placed {} of {}, {} nodes", employee, side, manager, self.tree.len());
        Ok(side)
    }

    pub fn place(&mut self, placement: &Placement) -> ApplicationResult<Side> {
        self.add_employee(&placement.manager, &placement.employee, &placement.side)
    }

    /// Team structure formatted per settings.
    pub fn structure(&self) -> String {
        format_tree(&self.tree, &self.settings)
    }
}

fn non_empty<'a>(name: &'a str, role: &'static str) -> ApplicationResult<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApplicationError::EmptyName(role));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TreeError;

    #[test]
    fn given_padded_names_when_adding_then_stores_trimmed() {
        let mut directory = Directory::new(Settings::default());

        let lead = directory.add_team_lead("  Alice  ").unwrap();
        directory.add_employee(" alice", " Bob ", " LEFT ").unwrap();

        assert_eq!(lead, "Alice");
        let root = directory.tree().root().unwrap();
        assert_eq!(root.name(), "Alice");
        assert_eq!(root.left().map(|n| n.name()), Some("Bob"));
    }

    #[test]
    fn given_blank_name_when_adding_then_rejected_before_tree() {
        let mut directory = Directory::new(Settings::default());

        let err = directory.add_team_lead("   ").unwrap_err();

        assert!(matches!(err, ApplicationError::EmptyName("team lead")));
        assert!(!directory.has_team_lead());
    }

    #[test]
    fn given_bad_side_when_adding_then_tree_error_surfaces() {
        let mut directory = Directory::new(Settings::default());
        directory.add_team_lead("Alice").unwrap();

        let err = directory.add_employee("Alice", "Bob", "up").unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Tree(TreeError::InvalidSide(ref s)) if s == "up"
        ));
        assert_eq!(directory.tree().len(), 1);
    }

    #[test]
    fn given_placement_when_placing_then_returns_side() {
        let mut directory = Directory::new(Settings::default());
        directory.add_team_lead("CEO").unwrap();

        let side = directory.place(&"CEO:CFO:right".parse().unwrap()).unwrap();

        assert_eq!(side, Side::Right);
        assert_eq!(directory.structure(), "- CEO\n  - CFO");
    }
}
