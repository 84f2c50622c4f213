//! User-facing wording for tree outcomes.

use crate::domain::{Side, TreeError};

pub fn team_lead_added(name: &str) -> String {
    format!("{name} added as the team lead.")
}

pub fn employee_added(employee: &str, manager: &str, side: Side) -> String {
    format!("{employee} added to the {} of {manager}", side_label(side))
}

/// Human-readable explanation of a rejected tree operation.
pub fn rejection(err: &TreeError) -> String {
    match err {
        TreeError::AlreadyExists { .. } => "Team lead already exists.".to_string(),
        TreeError::InvalidSide(_) => "Invalid side. Please enter LEFT or RIGHT.".to_string(),
        TreeError::EmptyTree => {
            "No team lead exists yet. Please add a team lead first.".to_string()
        }
        TreeError::ManagerNotFound(name) => {
            format!("Manager '{name}' not found in the current team structure.")
        }
        TreeError::SlotOccupied { manager, side } => {
            format!("{} side of {manager} is already occupied.", side_label(*side))
        }
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Left => "LEFT",
        Side::Right => "RIGHT",
    }
}
