//! Engine Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.
//!
//! Almost all of these kinds are scoped to a single file or rename pair:
//! the engine catches them at the smallest possible scope, logs them with
//! enough context to diagnose, and continues with the rest of the batch.
//! Only [`ErrorKind::InvalidArgument`] surfaces to the immediate caller.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::{Path, PathBuf};

/// An engine error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Malformed call-level input; the one kind that aborts a call instead
    /// of being swallowed per item.
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[error(not(source))] String),
    /// A referenced path does not exist or is not a usable file.
    #[display("not a usable file: {}", _0.display())]
    FileNotValid(#[error(not(source))] PathBuf),
    /// No metadata extraction capability covers the file's extension.
    #[display("unsupported file type: {}", _0.display())]
    UnsupportedType(#[error(not(source))] PathBuf),
    /// Metadata lookup failed for a supported file (unreadable, malformed).
    #[display("metadata lookup failed for file: {}", _0.display())]
    Metadata(#[error(not(source))] PathBuf),
    /// A scheme key was absent from the file's metadata, or its value was
    /// empty.
    #[display("metadata key `{key}` missing or empty for file: {}", path.display())]
    MissingKey {
        /// The file whose resolution was aborted.
        path: PathBuf,
        /// The offending scheme token.
        key: String,
    },
    /// A plan entry's new-name value is not a bare, non-empty file name.
    /// Plans are caller-mutable, so the executor re-checks the invariant.
    #[display("candidate filename is not a bare file name: {_0:?}")]
    InvalidFilename(#[error(not(source))] String),
    /// Underlying I/O error from the filesystem rename itself.
    #[display("I/O error: {_0}")]
    Io(IoError),
    /// Reserved: a rename call returned success but the destination could
    /// not be confirmed. The executor deliberately performs no post-rename
    /// verification, so this kind is defined but never raised.
    #[display("rename could not be confirmed: {}", _0.display())]
    RenameFailed(#[error(not(source))] PathBuf),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}
impl ErrorKind {
    /// Convert a metadata extraction error into an engine error, preserving
    /// the extract crate's `Exn` frame (error tree) as a child in its own
    /// error tree. Unsupported-type failures keep their distinct category.
    #[track_caller]
    pub fn metadata(path: &Path, err: remeta_extract::error::Error) -> Error {
        let kind = match &*err {
            remeta_extract::error::ErrorKind::UnsupportedType(p) => Self::UnsupportedType(p.clone()),
            _ => Self::Metadata(path.to_path_buf()),
        };
        err.raise(kind)
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Metadata(_))
    }
}
