//! Domain layer: the team tree and its nodes
//!
//! This layer is independent of external concerns (no I/O, no logging, no config loading).

pub mod error;
pub mod node;
pub mod render;
pub mod side;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use node::EmployeeNode;
pub use render::{IndentLayout, PreOrder, RenderEntry, Rendering};
pub use side::Side;
pub use tree::{TeamTree, TreeState};
