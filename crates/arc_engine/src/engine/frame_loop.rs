//! Frame loop
//!
//! One iteration is always: frame commands, present, poll events. The close
//! flag is checked before each iteration and nowhere else.

use super::bootstrap::Session;
use crate::foundation::time::FrameTimer;
use crate::platform::{CurrentContext, WindowSystem};
use crate::render::GraphicsApi;

pub use crate::foundation::time::FrameStats;

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Close not requested
    Running,
    /// Close requested; terminal
    Stopped,
}

impl LoopState {
    /// Derive the state from the window's close-request flag
    pub const fn from_close_flag(close_requested: bool) -> Self {
        if close_requested {
            Self::Stopped
        } else {
            Self::Running
        }
    }
}

/// Run frames until the window is asked to close
///
/// Each iteration calls `frame`, presents the back buffer and polls events
/// without blocking. The only pause is whatever the buffer swap imposes
/// (vsync). Returns the number of frames presented and the time spent.
pub fn run_loop<S, G, F>(
    session: &mut Session<S>,
    _context: &CurrentContext,
    gfx: &mut G,
    mut frame: F,
) -> FrameStats
where
    S: WindowSystem,
    G: GraphicsApi,
    F: FnMut(&mut G),
{
    let Some((system, window)) = session.parts_mut() else {
        log::warn!("Frame loop started without a window");
        return FrameStats::default();
    };

    log::info!("Starting main loop...");
    let mut timer = FrameTimer::new();

    while LoopState::from_close_flag(window.should_close()) == LoopState::Running {
        frame(gfx);
        window.swap_buffers();
        system.poll_events(window.inner_mut());
        timer.tick();
    }

    let stats = timer.stats();
    log::info!(
        "Main loop stopped after {} frames ({:.1} fps average)",
        stats.frame_count,
        stats.average_fps()
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ClearColor, ContextAttributes, WindowConfig};
    use crate::platform::testing::{
        calls, count, new_log, Call, CallLog, RecordingGraphics, RecordingSystem,
    };
    use crate::render::clear::ClearPass;

    fn ready_session(
        log: &CallLog,
        system: RecordingSystem,
    ) -> (Session<RecordingSystem>, CurrentContext) {
        let mut session = Session::initialize(|| Ok::<_, String>(system)).unwrap();
        session.configure_context(ContextAttributes::default(), &WindowConfig::default());
        session.create_window(800, 600, "Arc Engine").unwrap();
        let context = session.make_current().unwrap();
        log.borrow_mut().clear();
        (session, context)
    }

    #[test]
    fn test_loop_state_from_close_flag() {
        assert_eq!(LoopState::from_close_flag(false), LoopState::Running);
        assert_eq!(LoopState::from_close_flag(true), LoopState::Stopped);
    }

    #[test]
    fn test_each_iteration_clears_presents_then_polls() {
        let log = new_log();
        let system = RecordingSystem::new(&log).close_after_polls(3);
        let (mut session, context) = ready_session(&log, system);
        let mut gfx = RecordingGraphics::new(&log);
        let pass = ClearPass::default();

        let stats = run_loop(&mut session, &context, &mut gfx, |g| pass.record(g));

        assert_eq!(stats.frame_count, 3);
        let iteration = [
            Call::ShouldClose,
            Call::ClearColor(ClearColor::default()),
            Call::Clear,
            Call::SwapBuffers,
            Call::PollEvents,
        ];
        let mut expected: Vec<Call> =
            iteration.iter().cloned().cycle().take(iteration.len() * 3).collect();
        expected.push(Call::ShouldClose);
        assert_eq!(calls(&log), expected);
    }

    #[test]
    fn test_close_during_iteration_stops_before_next() {
        for n in 1..=5 {
            let log = new_log();
            let system = RecordingSystem::new(&log).close_after_polls(n);
            let (mut session, context) = ready_session(&log, system);
            let mut gfx = RecordingGraphics::new(&log);
            let mut frames_seen = 0;

            let stats = run_loop(&mut session, &context, &mut gfx, |_| frames_seen += 1);

            assert_eq!(frames_seen, n);
            assert_eq!(stats.frame_count, u64::from(n));
            assert_eq!(count(&log, &Call::SwapBuffers), n as usize);
            assert_eq!(count(&log, &Call::PollEvents), n as usize);
            assert_eq!(calls(&log).last(), Some(&Call::ShouldClose));
        }
    }

    #[test]
    fn test_close_before_first_frame_runs_nothing() {
        let log = new_log();
        let (mut session, context) = ready_session(&log, RecordingSystem::new(&log));
        if let Some(window) = session.window_mut() {
            window.inner_mut().close_requested = true;
        }
        let mut gfx = RecordingGraphics::new(&log);

        let stats = run_loop(&mut session, &context, &mut gfx, |g| ClearPass::default().record(g));

        assert_eq!(stats.frame_count, 0);
        assert_eq!(calls(&log), vec![Call::ShouldClose]);
    }
}
