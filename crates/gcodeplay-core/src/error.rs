//! Error handling for GCodePlay core.
//!
//! Parsing is deliberately infallible (malformed input degrades to
//! inert data), so the error surface here is small: settings
//! validation and persistence.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type for GCodePlay.
#[derive(Error, Debug)]
pub enum Error {
    /// Step delay outside the supported range
    #[error("invalid step delay {delay_ms}ms: must be between {min}ms and {max}ms")]
    InvalidDelay {
        /// The rejected delay in milliseconds.
        delay_ms: u64,
        /// Lower bound of the valid range.
        min: u64,
        /// Upper bound of the valid range.
        max: u64,
    },

    /// Settings file could not be read or written
    #[error("settings error: {reason}")]
    Settings {
        /// A message describing the settings failure.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
