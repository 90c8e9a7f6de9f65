//! Engine lifecycle: bootstrap, frame loop, shutdown

use std::fmt::Display;
use std::io::Write;

use crate::config::ConfigError;
use crate::core::config::AppConfig;
use crate::error::InitError;
use crate::platform::{CurrentContext, WindowHandle, WindowSystem};
use crate::render::{clear::ClearPass, GraphicsApi};

pub mod bootstrap;
pub mod frame_loop;
pub mod shutdown;

pub use bootstrap::{report_context_info, Phase, Session};
pub use frame_loop::{run_loop, FrameStats, LoopState};
pub use shutdown::ShutdownReport;

/// Message written once the window has closed and everything is released
pub const CLOSED_MESSAGE: &str = "Window closed.";

/// Result of a complete run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Frames presented before the close request
    pub frames: FrameStats,
    /// Release steps performed
    pub shutdown: ShutdownReport,
}

/// Drives one window through bootstrap, the frame loop and shutdown
#[derive(Debug, Clone)]
pub struct Engine {
    config: AppConfig,
}

impl Engine {
    /// Create an engine for a validated configuration
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run until the window closes, clearing every frame to the configured
    /// color
    ///
    /// Diagnostics (driver version and renderer before the loop, the closed
    /// message after shutdown) go to `out`.
    pub fn run<S, E, L, G, O>(
        &self,
        open: impl FnOnce() -> Result<S, E>,
        load_graphics: L,
        out: &mut O,
    ) -> Result<RunReport, InitError>
    where
        S: WindowSystem,
        E: Display,
        L: FnOnce(&mut WindowHandle<S::Window>, &CurrentContext) -> G,
        G: GraphicsApi,
        O: Write,
    {
        let pass = ClearPass::new(self.config.clear_color);
        self.run_with(open, load_graphics, out, |gfx| pass.record(gfx))
    }

    /// Run until the window closes with a caller-supplied frame
    ///
    /// Any early failure after the subsystem is up still releases it: the
    /// session is dropped on the error path and its drop performs shutdown.
    pub fn run_with<S, E, L, G, O, F>(
        &self,
        open: impl FnOnce() -> Result<S, E>,
        load_graphics: L,
        out: &mut O,
        frame: F,
    ) -> Result<RunReport, InitError>
    where
        S: WindowSystem,
        E: Display,
        L: FnOnce(&mut WindowHandle<S::Window>, &CurrentContext) -> G,
        G: GraphicsApi,
        O: Write,
        F: FnMut(&mut G),
    {
        let window_config = &self.config.window;

        let mut session = Session::initialize(open)?;
        session.configure_context(self.config.context, window_config);
        session.create_window(window_config.width, window_config.height, &window_config.title)?;

        let context = session.make_current().ok_or_else(missing_window)?;
        session.apply_swap_interval(&context, window_config.vsync);

        let window = session.window_mut().ok_or_else(missing_window)?;
        let mut gfx = load_graphics(window, &context);
        report_context_info(&gfx, out);

        let frames = run_loop(&mut session, &context, &mut gfx, frame);
        drop(gfx);

        let shutdown = session.shutdown();
        if let Err(err) = writeln!(out, "{CLOSED_MESSAGE}").and_then(|()| out.flush()) {
            log::warn!("Could not write closed message: {err}");
        }

        Ok(RunReport { frames, shutdown })
    }
}

fn missing_window() -> InitError {
    InitError::window("no window available to bind a context to")
}
