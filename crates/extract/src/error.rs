//! Extraction Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No extraction capability is registered for the file's extension
    /// (or the file has no extension at all).
    #[display("unsupported file type: {}", _0.display())]
    UnsupportedType(#[error(not(source))] PathBuf),
    /// The file could not be opened or read.
    #[display("unreadable file: {}", _0.display())]
    Unreadable(#[error(not(source))] PathBuf),
    /// The file was read but its metadata could not be parsed.
    #[display("malformed metadata: {_0}")]
    Malformed(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A transient I/O hiccup may clear; a wrong extension or a broken
        // container will not.
        matches!(self, Self::Unreadable(_))
    }
}
