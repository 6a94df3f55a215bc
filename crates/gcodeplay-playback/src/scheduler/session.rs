//! Playback session lifecycle.

use gcodeplay_core::{ThreadSafe, ThreadSafeRw};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::pen::PenState;
use crate::surface::SharedSurface;

/// Lifecycle state of a playback session.
///
/// `Running → Reset` on cancel, `Running → Complete` once every
/// scheduled step has fired. Both `Reset` and `Complete` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Steps are scheduled and may still fire.
    Running,
    /// The session was canceled; no further step may touch the surface.
    Reset,
    /// Every scheduled step has fired.
    Complete,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Reset => write!(f, "Reset"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// The cancelable handle identifying one in-flight animation.
///
/// Owns every scheduled step task so that a single [`reset`] call
/// cancels the whole outstanding batch, not just the next step.
///
/// [`reset`]: PlaybackSession::reset
pub struct PlaybackSession {
    id: Uuid,
    tasks: Vec<JoinHandle<()>>,
    state: ThreadSafeRw<SessionState>,
    pen: ThreadSafe<PenState>,
    surface: SharedSurface,
}

impl PlaybackSession {
    pub(crate) fn new(
        id: Uuid,
        tasks: Vec<JoinHandle<()>>,
        state: ThreadSafeRw<SessionState>,
        pen: ThreadSafe<PenState>,
        surface: SharedSurface,
    ) -> Self {
        Self {
            id,
            tasks,
            state,
            pen,
            surface,
        }
    }

    /// Unique identifier of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    /// Whether steps may still fire.
    pub fn is_running(&self) -> bool {
        self.state() == SessionState::Running
    }

    /// Current pen position in surface coordinates.
    pub fn pen_position(&self) -> (f64, f64) {
        self.pen.lock().position()
    }

    /// Cancel the session and discard its rendering.
    ///
    /// Aborts every outstanding step task, then clears the surface and
    /// redraws the background grid. Once this returns, no step of this
    /// session can mutate the surface again. Calling reset on an
    /// already-reset or already-completed session is a no-op.
    pub fn reset(&mut self) {
        {
            let mut state = self.state.write();
            if *state != SessionState::Running {
                return;
            }
            *state = SessionState::Reset;
        }

        for task in self.tasks.drain(..) {
            task.abort();
        }

        let mut surface = self.surface.lock();
        surface.clear();
        surface.draw_grid();
        debug!(session = %self.id, "playback reset");
    }

    /// Wait for every scheduled step to finish firing or be aborted.
    pub async fn wait(&mut self) {
        for task in self.tasks.drain(..) {
            // aborted steps surface a JoinError we don't care about
            let _ = task.await;
        }
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("pending_tasks", &self.tasks.len())
            .finish()
    }
}
