//! Error types for the untoc library.

use std::io;
use thiserror::Error;

/// Result type alias for untoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading fragments or writing outlines.
///
/// The outline engine itself never fails on content: unparseable or
/// ambiguous fragments are dropped, and an empty input yields an empty
/// outline. Errors only surface at the I/O boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fragment record failed structural validation.
    #[error("Invalid fragment at index {index}: {reason}")]
    InvalidFragment {
        /// Position of the offending record in the input sequence.
        index: usize,
        /// Human-readable description of the violation.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_fragment(index: usize, reason: impl Into<String>) -> Self {
        Error::InvalidFragment {
            index,
            reason: reason.into(),
        }
    }
}
