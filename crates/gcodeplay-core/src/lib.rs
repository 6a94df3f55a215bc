//! # GCodePlay Core
//!
//! Command model, parser, sample programs, and settings for GCodePlay.
//! Provides the fundamental data types shared by the playback engine
//! and the application binary.

pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod samples;
pub mod types;

pub use command::{AxisParams, MotionCommand, Opcode, Program};
pub use config::{
    PlaybackSettings, DEFAULT_STEP_DELAY_MS, MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS,
};
pub use error::{Error, Result};
pub use parser::parse;
pub use samples::Sample;

// Re-export type aliases for convenience
pub use types::{thread_safe, thread_safe_rw, ThreadSafe, ThreadSafeRw};
