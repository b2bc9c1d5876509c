//! Tag metadata extraction for audio files.

use crate::error::{ErrorKind, Result};
use crate::metadata::{Metadata, keys};
use crate::provider::Extractor;
use lofty::prelude::*;
use lofty::probe::Probe;
use std::path::Path;
use tracing::trace;

/// Reads tag data (ID3v2, Vorbis comments, MP4 ilst, ...) from audio files.
///
/// Emits [`keys::ARTIST`], [`keys::ALBUM`], [`keys::TITLE`], [`keys::TRACK`],
/// [`keys::YEAR`] and [`keys::GENRE`] for whichever fields the file's primary
/// tag carries. A readable file with no tag at all yields empty metadata;
/// scheme resolution then skips the file on its first key reference.
pub struct AudioExtractor;

impl Extractor for AudioExtractor {
    fn extract(&self, path: &Path) -> Result<Metadata> {
        let tagged = Probe::open(path)
            .map_err(|_| ErrorKind::Unreadable(path.to_path_buf()))?
            .read()
            .map_err(|e| ErrorKind::Malformed(e.to_string()))?;

        let mut metadata = Metadata::new();
        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(artist) = tag.artist() {
                metadata.insert(keys::ARTIST, artist.as_ref());
            }
            if let Some(album) = tag.album() {
                metadata.insert(keys::ALBUM, album.as_ref());
            }
            if let Some(title) = tag.title() {
                metadata.insert(keys::TITLE, title.as_ref());
            }
            if let Some(track) = tag.track() {
                metadata.insert(keys::TRACK, track.to_string());
            }
            if let Some(year) = tag.year() {
                metadata.insert(keys::YEAR, year.to_string());
            }
            if let Some(genre) = tag.genre() {
                metadata.insert(keys::GENRE, genre.as_ref());
            }
        }
        trace!(path = %path.display(), fields = metadata.len(), "extracted audio metadata");
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.mp3");
        let err = AudioExtractor.extract(&path).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Unreadable(_)));
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.flac");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"definitely not a FLAC stream").unwrap();
        let err = AudioExtractor.extract(&path).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Malformed(_)));
    }
}
