//! Path expression error type
//!
//! Compilation is the only fallible stage of the engine. Evaluation treats
//! structural misses as no-matches, so a [`PathError`] always means the
//! expression text itself was rejected.

use thiserror::Error;

/// Result alias for path expression compilation
pub type PathResult<T> = Result<T, PathError>;

/// Error produced when a path expression fails to compile
///
/// The offending character offset is folded into the message when the
/// tokenizer or parser knows it, and remains queryable via
/// [`PathError::position`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path expression: {message}")]
pub struct PathError {
    message: String,
    position: Option<usize>,
}

impl PathError {
    pub(crate) fn new(message: impl Into<String>, position: Option<usize>) -> Self {
        let message = match position {
            Some(offset) => format!("{} (at offset {offset})", message.into()),
            None => message.into(),
        };
        Self { message, position }
    }

    /// Human-readable description of the failure
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Character offset in the source expression, when known
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}
