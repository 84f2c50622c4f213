//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::Side;

/// Tree errors represent rejected operations.
/// None of them leave the tree modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("team lead already exists: {name}")]
    AlreadyExists { name: String },

    #[error("invalid side: {0:?} (expected left or right)")]
    InvalidSide(String),

    #[error("no team lead exists yet")]
    EmptyTree,

    #[error("manager not found: {0}")]
    ManagerNotFound(String),

    #[error("{side} side of {manager} is already occupied")]
    SlotOccupied { manager: String, side: Side },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
