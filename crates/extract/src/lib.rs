//! Metadata extraction boundary for the renaming engine.
//!
//! The engine never parses binary media formats itself; it consumes the
//! [`MetadataProvider`] trait defined here. The bundled [`ExtensionRouter`]
//! dispatches by file extension to one [`Extractor`] per [`Capability`]
//! class — EXIF for still images, tag readers for audio — and surfaces a
//! distinguishable unsupported-type error for everything else.

mod audio;
pub mod error;
mod image;
mod metadata;
#[cfg(feature = "mock")]
mod mock;
mod provider;

pub use crate::audio::AudioExtractor;
pub use crate::image::ImageExtractor;
pub use crate::metadata::{Metadata, keys};
#[cfg(feature = "mock")]
pub use crate::mock::MockProvider;
pub use crate::provider::{
    AUDIO_EXTENSIONS, Capability, ExtensionRouter, Extractor, IMAGE_EXTENSIONS, MetadataProvider, capability_for,
};
