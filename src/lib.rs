//! # GCodePlay
//!
//! A Rust-based G-Code toolpath replay tool: parses a small subset of
//! motion commands (`G0`, `G1`) and animates the resulting 2D toolpath
//! as a timed, cancelable sequence of line segments on a raster
//! surface, with PNG export.
//!
//! ## Architecture
//!
//! GCodePlay is organized as a workspace with multiple crates:
//!
//! 1. **gcodeplay-core** - Command model, parser, samples, settings
//! 2. **gcodeplay-playback** - Drawing surface and playback scheduler
//! 3. **gcodeplay** - Main binary that integrates the crates

pub use gcodeplay_core::{
    parse, samples, AxisParams, Error, MotionCommand, Opcode, PlaybackSettings, Program, Sample,
    DEFAULT_STEP_DELAY_MS, MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS,
};

pub use gcodeplay_playback::{
    play, shared_surface, DrawingSurface, PenState, PlaybackError, PlaybackSession, Player,
    RasterSurface, SessionState, SharedSurface, GRID_SPACING, MARKER_RADIUS, SURFACE_SIZE,
};

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
