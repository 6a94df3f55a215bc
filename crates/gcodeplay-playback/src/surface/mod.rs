//! Drawing surface abstraction.
//!
//! The scheduler renders against this trait; [`RasterSurface`] is the
//! shipped implementation (an RGBA framebuffer with PNG export), and
//! tests substitute recording doubles.

pub mod raster;

pub use raster::RasterSurface;

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::Result;

/// Logical surface size in the reference deployment, in units.
pub const SURFACE_SIZE: u32 = 500;

/// Background grid spacing, in units.
pub const GRID_SPACING: u32 = 25;

/// Radius of the tool-position marker, in units.
pub const MARKER_RADIUS: f64 = 5.0;

/// A 2D immediate-mode drawing surface.
///
/// Path state (the current point, the accumulated segments) belongs to
/// the surface, mirroring a canvas 2D context: `move_to` starts from a
/// point, `line_to` extends the current path, `stroke` rasterizes it,
/// and `begin_path` discards it.
pub trait DrawingSurface: Send {
    /// Surface dimensions as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Erase everything, restoring the blank background.
    fn clear(&mut self);

    /// Draw the static background grid.
    fn draw_grid(&mut self);

    /// Discard the current path.
    fn begin_path(&mut self);

    /// Set the current path point without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current path with a segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Rasterize the current path.
    fn stroke(&mut self);

    /// Fill a circle centered at `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Serialize the current raster to PNG bytes.
    ///
    /// Returns [`PlaybackError::SurfaceNotReady`](crate::PlaybackError::SurfaceNotReady)
    /// if nothing has been rendered yet.
    fn export_image(&self) -> Result<Vec<u8>>;
}

/// A surface handle shared between the caller and the step tasks.
pub type SharedSurface = Arc<Mutex<dyn DrawingSurface>>;

/// Wrap a surface for sharing with a playback session.
pub fn shared_surface<S: DrawingSurface + 'static>(surface: S) -> SharedSurface {
    Arc::new(Mutex::new(surface))
}
