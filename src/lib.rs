//! Team hierarchy manager.
//!
//! The [`domain`] layer holds the binary team tree: each employee has at most a
//! left and a right subordinate. [`application`] wraps it for interactive and
//! batch use, [`cli`] exposes it as a command line tool.
//!
//! ```
//! use teamtree::domain::{TeamTree, TreeError};
//!
//! let mut tree = TeamTree::new();
//! tree.create_root("CEO").unwrap();
//! tree.insert("ceo", "CTO", "left").unwrap();
//! assert_eq!(tree.insert("CEO", "VP", "left"), Err(TreeError::SlotOccupied {
//!     manager: "CEO".into(),
//!     side: teamtree::domain::Side::Left,
//! }));
//! assert_eq!(tree.render().to_string(), "- CEO\n  - CTO");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
