//! Error conversion helpers for terminal I/O
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", line).with_context("write menu")?;
    /// ```
    fn with_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: context.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_keeps_source() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));

        let err = result.with_context("write menu").unwrap_err();

        assert_eq!(err.to_string(), "I/O error: write menu");
        assert!(matches!(
            err,
            ApplicationError::Io { ref source, .. } if source.kind() == io::ErrorKind::BrokenPipe
        ));
    }
}
