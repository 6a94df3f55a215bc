//! Pen position tracking.

/// Current tool position in surface coordinates.
///
/// Scheduler-owned and transient: seeded at the surface center before
/// each run and updated exactly once per executed motion command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenState {
    x: f64,
    y: f64,
}

impl PenState {
    /// Create a pen at the given surface position.
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Current position as `(x, y)` surface coordinates.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Move the pen to a new surface position.
    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_tracks_moves() {
        let mut pen = PenState::at(250.0, 250.0);
        pen.move_to(260.0, 200.0);
        assert_eq!(pen.position(), (260.0, 200.0));
    }
}
