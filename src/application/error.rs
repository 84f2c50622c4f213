//! Application-level errors (wraps tree errors)

use thiserror::Error;

use crate::domain::TreeError;

/// Application errors wrap tree errors and add collaborator-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    #[error("invalid placement {spec:?}: {reason}")]
    InvalidPlacement { spec: String, reason: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
