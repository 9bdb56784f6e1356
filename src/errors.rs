//! Error types for text transformations
//!
//! The only hard error in this crate is requesting an operation in a
//! mode that has no implementation (e.g. plain-text highlighting).
//! Everything else — malformed markup, missing phrases, absent search
//! matches, empty input — has a defined recovery or fast path and is
//! never surfaced as an error.

use thiserror::Error;

/// Result type alias for text transformation operations
pub type TextResult<T> = Result<T, TextError>;

/// Error types for text transformation operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// Operation requested in a mode that does not implement it
    #[error("`{operation}` is not supported in {mode} mode")]
    Unsupported {
        operation: &'static str,
        mode: &'static str,
    },
}

impl TextError {
    pub(crate) fn unsupported(operation: &'static str, mode: &'static str) -> Self {
        TextError::Unsupported { operation, mode }
    }
}
