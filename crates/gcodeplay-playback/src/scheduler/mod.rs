//! Time-stepped playback scheduler.
//!
//! Walks a parsed program and emits one rendered segment per command
//! at a fixed inter-command delay. Steps are scheduled up front as
//! independent delayed tasks (the i-th step fires `i * delay` after
//! the call), so cancellation aborts the whole outstanding batch.

pub mod pen;
pub mod player;
pub mod session;

pub use pen::PenState;
pub use player::Player;
pub use session::{PlaybackSession, SessionState};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gcodeplay_core::{
    thread_safe, thread_safe_rw, MotionCommand, PlaybackSettings, Program, ThreadSafe,
    ThreadSafeRw,
};
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::surface::{SharedSurface, MARKER_RADIUS};

/// Start playing a program against a surface.
///
/// Clears the surface, redraws the background grid, seeds the pen at
/// the surface center (the logical origin), and schedules every
/// command as an independent delayed step. Must be called from within
/// a tokio runtime.
///
/// An empty program is born [`SessionState::Complete`] and renders
/// nothing beyond the initial clear and grid.
pub fn play(
    program: Program,
    settings: &PlaybackSettings,
    surface: SharedSurface,
) -> PlaybackSession {
    let commands = program.into_commands();
    let total = commands.len();
    let delay = settings.step_delay();
    let id = Uuid::new_v4();

    let (origin_x, origin_y) = {
        let mut surface = surface.lock();
        let (width, height) = surface.size();
        let origin = (width as f64 / 2.0, height as f64 / 2.0);
        surface.clear();
        surface.draw_grid();
        surface.begin_path();
        surface.move_to(origin.0, origin.1);
        origin
    };

    let initial = if total == 0 {
        SessionState::Complete
    } else {
        SessionState::Running
    };
    let state = thread_safe_rw(initial);
    let pen = thread_safe(PenState::at(origin_x, origin_y));
    let fired = Arc::new(AtomicUsize::new(0));

    debug!(
        session = %id,
        commands = total,
        delay_ms = settings.step_delay_ms,
        "starting playback"
    );

    let mut tasks = Vec::with_capacity(total);
    for (index, command) in commands.into_iter().enumerate() {
        let surface = surface.clone();
        let state = state.clone();
        let pen = pen.clone();
        let fired = fired.clone();

        tasks.push(tokio::spawn(async move {
            tokio::time::sleep(delay * index as u32).await;
            execute_step(index, &command, (origin_x, origin_y), &surface, &state, &pen);

            let done = fired.fetch_add(1, Ordering::SeqCst) + 1;
            if done == total {
                let mut state = state.write();
                if *state == SessionState::Running {
                    *state = SessionState::Complete;
                }
            }
        }));
    }

    PlaybackSession::new(id, tasks, state, pen, surface)
}

/// Execute one scheduled step.
///
/// Holds the surface lock for the whole mutation so step bodies and
/// reset never interleave their surface writes.
fn execute_step(
    index: usize,
    command: &MotionCommand,
    origin: (f64, f64),
    surface: &SharedSurface,
    state: &ThreadSafeRw<SessionState>,
    pen: &ThreadSafe<PenState>,
) {
    let mut surface = surface.lock();
    if *state.read() != SessionState::Running {
        return;
    }

    if !command.opcode.is_motion() {
        trace!(index, opcode = %command.opcode, "unsupported opcode, no drawing effect");
        return;
    }

    // Surface Y grows downward while logical G-Code Y grows upward.
    let target_x = origin.0 + command.params.x_offset();
    let target_y = origin.1 - command.params.y_offset();

    // Malformed axis literals parse to NaN; such a step draws nothing
    // and leaves the pen where it was, but still occupies its slot in
    // the timeline.
    if !target_x.is_finite() || !target_y.is_finite() {
        warn!(index, command = %command, "non-finite target, skipping draw");
        return;
    }

    surface.line_to(target_x, target_y);
    surface.stroke();
    surface.fill_circle(target_x, target_y, MARKER_RADIUS);
    // Restart the path so the next segment strokes independently and
    // the marker never smears across accumulated geometry.
    surface.begin_path();
    surface.move_to(target_x, target_y);

    pen.lock().move_to(target_x, target_y);
    trace!(index, x = target_x, y = target_y, "step rendered");
}
