//! EXIF metadata extraction for still images.

use crate::error::{ErrorKind, Result};
use crate::metadata::{Metadata, keys};
use crate::provider::Extractor;
use exif::{Exif, In, Reader, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Reads EXIF fields from still-image containers (TIFF, JPEG, PNG, WebP).
///
/// Emits [`keys::DATE_TIME`] (DateTimeOriginal, falling back to the plain
/// DateTime tag), [`keys::MAKE`] and [`keys::MODEL`] when present. Images
/// without EXIF data are malformed as far as scheme resolution is concerned;
/// the error is scoped to the one file by the engine.
pub struct ImageExtractor;

impl ImageExtractor {
    /// Renders one EXIF field as trimmed text, if the tag exists in the
    /// primary IFD.
    fn field(exif: &Exif, tag: Tag) -> Option<String> {
        let field = exif.get_field(tag, In::PRIMARY)?;
        // Ascii values render quoted; strip that along with stray padding.
        let value = field.display_value().to_string();
        let value = value.trim().trim_matches('"').trim().to_string();
        (!value.is_empty()).then_some(value)
    }
}

impl Extractor for ImageExtractor {
    fn extract(&self, path: &Path) -> Result<Metadata> {
        let file = File::open(path).map_err(|_| ErrorKind::Unreadable(path.to_path_buf()))?;
        let mut reader = BufReader::new(file);
        let exif = Reader::new()
            .read_from_container(&mut reader)
            .map_err(|e| ErrorKind::Malformed(e.to_string()))?;

        let mut metadata = Metadata::new();
        if let Some(taken) = Self::field(&exif, Tag::DateTimeOriginal).or_else(|| Self::field(&exif, Tag::DateTime)) {
            metadata.insert(keys::DATE_TIME, taken);
        }
        if let Some(make) = Self::field(&exif, Tag::Make) {
            metadata.insert(keys::MAKE, make);
        }
        if let Some(model) = Self::field(&exif, Tag::Model) {
            metadata.insert(keys::MODEL, model);
        }
        trace!(path = %path.display(), fields = metadata.len(), "extracted image metadata");
        Ok(metadata)
    }
}
