//! In-memory metadata provider for tests.

use crate::error::{ErrorKind, Result};
use crate::metadata::Metadata;
use crate::provider::MetadataProvider;
use exn::OptionExt;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

/// [`MetadataProvider`] backed by a fixed file-name → [`Metadata`] table.
///
/// Keyed by file name rather than full path so callers can stage files in
/// temporary directories without knowing the final absolute path up front.
/// Any file name not in the table behaves as an unsupported type.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    files: BTreeMap<OsString, Metadata>,
}
impl MockProvider {
    /// Creates an empty provider; every lookup fails until entries are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the metadata returned for files named `file_name`.
    pub fn insert(&mut self, file_name: impl Into<OsString>, metadata: Metadata) {
        self.files.insert(file_name.into(), metadata);
    }
}
impl MetadataProvider for MockProvider {
    fn lookup(&self, path: &Path) -> Result<Metadata> {
        let name = path.file_name().ok_or_raise(|| ErrorKind::UnsupportedType(path.to_path_buf()))?;
        self.files.get(name).cloned().ok_or_raise(|| ErrorKind::UnsupportedType(path.to_path_buf()))
    }
}
