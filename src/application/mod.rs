//! Application layer: the collaborator around the team tree
//!
//! This layer owns the session's tree, cleans up user input and turns outcomes into text.

pub mod directory;
pub mod error;
pub mod error_ext;
pub mod format;
pub mod messages;
pub mod placement;
pub mod shell;

pub use directory::Directory;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use placement::Placement;
pub use shell::{MenuChoice, Shell};
