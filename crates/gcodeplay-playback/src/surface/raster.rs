//! Raster implementation of the drawing surface.
//!
//! A fixed-size RGBA framebuffer with the same presentation the
//! reference deployment uses: dark background, gray 25-unit grid,
//! white strokes, red tool markers, PNG export.

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use super::{DrawingSurface, GRID_SPACING, SURFACE_SIZE};
use crate::error::{PlaybackError, Result};

const BACKGROUND_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
const GRID_COLOR: Rgba<u8> = Rgba([0x55, 0x55, 0x55, 0xff]);
const STROKE_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const MARKER_COLOR: Rgba<u8> = Rgba([0xff, 0x00, 0x00, 0xff]);

/// An in-memory raster drawing surface.
pub struct RasterSurface {
    frame: RgbaImage,
    /// Current path point, if one has been established.
    current: Option<(f64, f64)>,
    /// Segments accumulated since the last `begin_path`.
    segments: Vec<((f64, f64), (f64, f64))>,
    /// Whether any draw operation has touched the frame.
    touched: bool,
}

impl RasterSurface {
    /// Create a surface at the reference size (500×500).
    pub fn new() -> Self {
        Self::with_size(SURFACE_SIZE, SURFACE_SIZE)
    }

    /// Create a surface with explicit dimensions.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            frame: RgbaImage::from_pixel(width, height, BACKGROUND_COLOR),
            current: None,
            segments: Vec::new(),
            touched: false,
        }
    }

    /// Read a pixel, if it is within bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.frame.width() && y < self.frame.height() {
            Some(*self.frame.get_pixel(x, y))
        } else {
            None
        }
    }

    fn put_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.frame.width() && (y as u32) < self.frame.height()
        {
            self.frame.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Bresenham line rasterization; endpoints outside the frame are
    /// clipped pixel by pixel.
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba<u8>) {
        if !from.0.is_finite() || !from.1.is_finite() || !to.0.is_finite() || !to.1.is_finite() {
            return;
        }

        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.frame.width(), self.frame.height())
    }

    fn clear(&mut self) {
        for pixel in self.frame.pixels_mut() {
            *pixel = BACKGROUND_COLOR;
        }
        self.current = None;
        self.segments.clear();
        self.touched = true;
    }

    fn draw_grid(&mut self) {
        let (width, height) = self.size();
        let mut x = 0;
        while x < width {
            self.draw_line((x as f64, 0.0), (x as f64, (height - 1) as f64), GRID_COLOR);
            x += GRID_SPACING;
        }
        let mut y = 0;
        while y < height {
            self.draw_line((0.0, y as f64), ((width - 1) as f64, y as f64), GRID_COLOR);
            y += GRID_SPACING;
        }
        self.touched = true;
    }

    fn begin_path(&mut self) {
        self.current = None;
        self.segments.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.current = Some((x, y));
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if let Some(from) = self.current {
            self.segments.push((from, (x, y)));
        }
        self.current = Some((x, y));
    }

    fn stroke(&mut self) {
        let segments = std::mem::take(&mut self.segments);
        for (from, to) in &segments {
            self.draw_line(*from, *to, STROKE_COLOR);
        }
        self.segments = segments;
        self.touched = true;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        if !x.is_finite() || !y.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let min_x = (x - radius).floor() as i64;
        let max_x = (x + radius).ceil() as i64;
        let min_y = (y - radius).floor() as i64;
        let max_y = (y + radius).ceil() as i64;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 - x;
                let dy = py as f64 - y;
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(px, py, MARKER_COLOR);
                }
            }
        }
        self.touched = true;
    }

    fn export_image(&self) -> Result<Vec<u8>> {
        if !self.touched {
            return Err(PlaybackError::SurfaceNotReady);
        }
        let mut bytes = Vec::new();
        self.frame
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| PlaybackError::EncodingFailed {
                reason: e.to_string(),
            })?;
        Ok(bytes)
    }
}
