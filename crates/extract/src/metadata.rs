//! Per-file metadata as a flat key/value map.

use std::collections::BTreeMap;

/// Well-known metadata key names emitted by the bundled extractors.
///
/// Naming schemes reference these by name; nothing stops a custom
/// [`Extractor`](crate::Extractor) from emitting additional keys.
pub mod keys {
    /// Capture timestamp of a still image (EXIF DateTimeOriginal).
    pub const DATE_TIME: &str = "date_time";
    /// Camera manufacturer (EXIF Make).
    pub const MAKE: &str = "make";
    /// Camera model (EXIF Model).
    pub const MODEL: &str = "model";
    /// Performing artist of an audio track.
    pub const ARTIST: &str = "artist";
    /// Album an audio track belongs to.
    pub const ALBUM: &str = "album";
    /// Title of an audio track.
    pub const TITLE: &str = "title";
    /// Track number within the album.
    pub const TRACK: &str = "track";
    /// Release year.
    pub const YEAR: &str = "year";
    /// Genre tag.
    pub const GENRE: &str = "genre";
}

/// A mapping from metadata key to text value for a single file.
///
/// Produced fresh per file by a [`MetadataProvider`](crate::MetadataProvider);
/// never cached, never shared across files. Values are stored as text —
/// callers concatenate them into filenames and have no use for richer types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    values: BTreeMap<String, String>,
}
impl Metadata {
    /// Creates an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key/value pair, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Looks up the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns `true` if no keys were extracted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of extracted keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over all key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Self::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}
