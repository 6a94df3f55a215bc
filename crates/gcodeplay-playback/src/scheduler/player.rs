//! Single-session playback front end.

use gcodeplay_core::{PlaybackSettings, Program};
use tracing::debug;

use super::session::PlaybackSession;
use crate::error::Result;
use crate::surface::SharedSurface;

/// Owns a surface and at most one playback session at a time.
///
/// Starting a new run while a previous session is still running is a
/// misuse of the scheduler (the sessions would interleave their writes
/// to the shared surface), so `play` resets any active predecessor
/// before scheduling the new program.
pub struct Player {
    surface: SharedSurface,
    session: Option<PlaybackSession>,
}

impl Player {
    /// Create a player around a shared surface.
    pub fn new(surface: SharedSurface) -> Self {
        Self {
            surface,
            session: None,
        }
    }

    /// The surface this player renders to.
    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    /// The current session, if any run has been started.
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// Start playing a program, canceling any still-running session.
    pub fn play(&mut self, program: Program, settings: &PlaybackSettings) -> &mut PlaybackSession {
        if let Some(previous) = self.session.as_mut() {
            if previous.is_running() {
                debug!(session = %previous.id(), "auto-resetting active session");
            }
            previous.reset();
        }

        self.session
            .insert(super::play(program, settings, self.surface.clone()))
    }

    /// Cancel the current session, if one is running.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
    }

    /// Wait for the current session to finish firing its steps.
    pub async fn wait(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.wait().await;
        }
    }

    /// Export the surface's current raster as PNG bytes.
    pub fn export_image(&self) -> Result<Vec<u8>> {
        self.surface.lock().export_image()
    }
}
