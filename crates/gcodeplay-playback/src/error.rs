//! Error handling for the playback engine.
//!
//! Playback itself never fails on malformed programs (they degrade to
//! inert steps); the only fallible operations live on the drawing
//! surface.

use thiserror::Error;

/// Playback error type.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// Export requested before anything was rendered
    #[error("surface has no rendered content to export")]
    SurfaceNotReady,

    /// The raster frame could not be encoded
    #[error("image encoding failed: {reason}")]
    EncodingFailed {
        /// A message describing the encoder failure.
        reason: String,
    },
}

/// Result type using [`PlaybackError`].
pub type Result<T> = std::result::Result<T, PlaybackError>;
