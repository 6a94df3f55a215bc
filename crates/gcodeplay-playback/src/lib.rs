//! # GCodePlay Playback
//!
//! Drawing surface abstraction, raster surface implementation, and the
//! time-stepped playback scheduler for GCodePlay. The scheduler walks a
//! parsed [`Program`](gcodeplay_core::Program), emitting one rendered
//! segment per command at a fixed inter-command delay, and supports
//! cancellation as a unit via [`PlaybackSession::reset`].

pub mod error;
pub mod scheduler;
pub mod surface;

pub use error::{PlaybackError, Result};
pub use scheduler::{play, PenState, PlaybackSession, Player, SessionState};
pub use surface::{
    shared_surface, DrawingSurface, RasterSurface, SharedSurface, GRID_SPACING, MARKER_RADIUS,
    SURFACE_SIZE,
};
