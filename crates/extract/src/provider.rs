//! Extension-based routing to metadata extractors.
//!
//! Routing is performed purely on the file's extension string, lower-cased —
//! no content sniffing, no MIME detection. The static
//! [`capability_for`] table is the single extension point for supporting new
//! media classes: add a [`Capability`] variant, list its extensions, and
//! register an [`Extractor`] for it.

use crate::error::{ErrorKind, Result};
use crate::metadata::Metadata;
use exn::OptionExt;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;
use tracing::trace;

/// A format-specific metadata reader for one capability class.
pub trait Extractor: Send + Sync {
    /// Reads the file at `path` and returns its metadata.
    fn extract(&self, path: &Path) -> Result<Metadata>;
}

/// The lookup boundary consumed by the renaming engine.
///
/// Given a file path, returns that file's metadata or signals that no
/// extraction capability covers it. Implementations must produce a fresh
/// [`Metadata`] per call; the engine never caches lookups.
pub trait MetadataProvider {
    /// Resolves the metadata for a single file.
    ///
    /// # Errors
    /// [`ErrorKind::UnsupportedType`] when no capability covers the file's
    /// extension; extractor-specific kinds when reading or parsing fails.
    fn lookup(&self, path: &Path) -> Result<Metadata>;
}

/// Identifier for a class of metadata extraction capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Still-image formats carrying EXIF data.
    Image,
    /// Audio formats carrying tag data.
    Audio,
}

/// Recognized still-image extensions (lower-case).
pub const IMAGE_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "tif", "tiff", "webp"];
/// Recognized audio extensions (lower-case). A fixed, enumerated set.
pub const AUDIO_EXTENSIONS: &[&str] = &["aac", "flac", "m4a", "mp3", "ogg", "opus", "wav"];

/// Maps a file extension (any case, no leading dot) to its capability class.
///
/// Returns `None` for anything outside the two fixed extension sets — the
/// "unsupported type" default.
pub fn capability_for(extension: &str) -> Option<Capability> {
    let ext = extension.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(Capability::Image)
    } else if AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        Some(Capability::Audio)
    } else {
        None
    }
}

/// [`MetadataProvider`] that dispatches to a registered [`Extractor`] per
/// [`Capability`], routing by file extension.
///
/// [`ExtensionRouter::new`] registers the bundled EXIF and audio tag
/// extractors; [`register`](Self::register) swaps or adds one without
/// touching any caller.
pub struct ExtensionRouter {
    extractors: BTreeMap<Capability, Box<dyn Extractor>>,
}
impl ExtensionRouter {
    /// Creates a router with the bundled extractors registered.
    pub fn new() -> Self {
        let mut router = Self { extractors: BTreeMap::new() };
        router.register(Capability::Image, Box::new(crate::image::ImageExtractor));
        router.register(Capability::Audio, Box::new(crate::audio::AudioExtractor));
        router
    }

    /// Registers (or replaces) the extractor for a capability class.
    pub fn register(&mut self, capability: Capability, extractor: Box<dyn Extractor>) {
        self.extractors.insert(capability, extractor);
    }
}
impl Default for ExtensionRouter {
    fn default() -> Self {
        Self::new()
    }
}
impl MetadataProvider for ExtensionRouter {
    fn lookup(&self, path: &Path) -> Result<Metadata> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .ok_or_raise(|| ErrorKind::UnsupportedType(path.to_path_buf()))?;
        let capability =
            capability_for(extension).ok_or_raise(|| ErrorKind::UnsupportedType(path.to_path_buf()))?;
        trace!(?capability, extension, "dispatching metadata extraction");
        let extractor =
            self.extractors.get(&capability).ok_or_raise(|| ErrorKind::UnsupportedType(path.to_path_buf()))?;
        extractor.extract(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_capability_for_known_extensions() {
        assert_eq!(capability_for("tif"), Some(Capability::Image));
        assert_eq!(capability_for("jpg"), Some(Capability::Image));
        assert_eq!(capability_for("mp3"), Some(Capability::Audio));
        assert_eq!(capability_for("flac"), Some(Capability::Audio));
    }

    #[test]
    fn test_capability_for_is_case_insensitive() {
        assert_eq!(capability_for("TIF"), Some(Capability::Image));
        assert_eq!(capability_for("Mp3"), Some(Capability::Audio));
    }

    #[test]
    fn test_capability_for_unknown_extension() {
        assert_eq!(capability_for("txt"), None);
        assert_eq!(capability_for("html"), None);
        assert_eq!(capability_for(""), None);
    }

    #[test]
    fn test_lookup_unsupported_extension() {
        let router = ExtensionRouter::new();
        let err = router.lookup(Path::new("notes.txt")).unwrap_err();
        assert_eq!(&*err, &ErrorKind::UnsupportedType(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_lookup_missing_extension() {
        let router = ExtensionRouter::new();
        let err = router.lookup(Path::new("Makefile")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::UnsupportedType(_)));
    }

    #[test]
    fn test_register_replaces_extractor() {
        struct Fixed;
        impl Extractor for Fixed {
            fn extract(&self, _path: &Path) -> crate::error::Result<Metadata> {
                Ok([("title", "fixed")].into_iter().collect())
            }
        }

        let mut router = ExtensionRouter::new();
        router.register(Capability::Audio, Box::new(Fixed));
        let metadata = router.lookup(Path::new("song.mp3")).unwrap();
        assert_eq!(metadata.get("title"), Some("fixed"));
    }
}
