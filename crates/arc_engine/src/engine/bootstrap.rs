//! Platform bootstrap
//!
//! Brings up the windowing subsystem, the window and its OpenGL context in
//! the only order that works:
//!
//! `initialize` → `configure_context` → `create_window` → `make_current`
//!
//! [`Session`] tracks where in that sequence it is, so out-of-order calls are
//! refused (or ignored, for late configuration) instead of producing a
//! half-configured context.

use std::fmt::Display;
use std::io::Write;

use crate::core::config::{ContextAttributes, WindowConfig};
use crate::error::InitError;
use crate::platform::{CurrentContext, WindowHandle, WindowSystem};
use crate::render::GraphicsApi;

/// How far the bootstrap sequence has progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Subsystem initialized, no hints applied yet
    Initialized,
    /// Context attributes recorded
    Configured,
    /// Window exists, context not yet current
    WindowCreated,
    /// Context is current on this thread
    Current,
}

/// Live windowing subsystem plus at most one window
///
/// Returned by [`Session::initialize`] and consumed by
/// [`Session::shutdown`]. If a session is dropped without an explicit
/// shutdown (early return, panic in a frame callback), the drop performs the
/// same release, so the subsystem is torn down exactly once on every path.
pub struct Session<S: WindowSystem> {
    pub(crate) system: Option<S>,
    pub(crate) window: Option<WindowHandle<S::Window>>,
    attributes: Option<ContextAttributes>,
    phase: Phase,
}

impl<S: WindowSystem> Session<S> {
    /// Initialize the windowing subsystem
    ///
    /// `open` performs the backend's process-wide initialization, for example
    /// [`crate::platform::glfw_backend::GlfwSystem::init`].
    pub fn initialize<F, E>(open: F) -> Result<Self, InitError>
    where
        F: FnOnce() -> Result<S, E>,
        E: Display,
    {
        log::info!("Initializing windowing subsystem...");
        let system = match open() {
            Ok(system) => system,
            Err(err) => {
                S::release_after_failed_init();
                return Err(InitError::subsystem(err.to_string()));
            }
        };

        Ok(Self {
            system: Some(system),
            window: None,
            attributes: None,
            phase: Phase::Initialized,
        })
    }

    /// Record the requested context before any window exists
    ///
    /// Only the first call has an effect; later calls are logged and ignored.
    pub fn configure_context(&mut self, attrs: ContextAttributes, window: &WindowConfig) {
        if self.phase != Phase::Initialized {
            log::warn!("Context attributes already fixed ({:?}); ignoring {:?}", self.phase, attrs);
            return;
        }
        let Some(system) = self.system.as_mut() else {
            return;
        };

        log::debug!(
            "Requesting OpenGL {}.{} {:?} context (forward compatible: {})",
            attrs.major, attrs.minor, attrs.profile, attrs.forward_compatible
        );
        system.apply_context_hints(&attrs, window);
        self.attributes = Some(attrs);
        self.phase = Phase::Configured;
    }

    /// Create the window for the configured context
    ///
    /// On failure the subsystem stays initialized and is still released when
    /// the session shuts down.
    pub fn create_window(
        &mut self,
        width: u32,
        height: u32,
        title: &str,
    ) -> Result<&mut WindowHandle<S::Window>, InitError> {
        match self.phase {
            Phase::Initialized => {
                return Err(InitError::window(
                    "context attributes must be configured before creating a window",
                ));
            }
            Phase::WindowCreated | Phase::Current => {
                return Err(InitError::window("a window already exists"));
            }
            Phase::Configured => {}
        }

        if width == 0 || height == 0 {
            return Err(InitError::window(format!("invalid window size {width}x{height}")));
        }
        if title.is_empty() {
            return Err(InitError::window("window title cannot be empty"));
        }

        let system = self
            .system
            .as_mut()
            .ok_or_else(|| InitError::window("windowing subsystem is not live"))?;

        log::info!("Creating {width}x{height} window \"{title}\"...");
        let Some(window) = system.create_window(width, height, title) else {
            let detail = self.attributes.map_or_else(String::new, |attrs| {
                format!(
                    " with an OpenGL {}.{} {:?} context",
                    attrs.major, attrs.minor, attrs.profile
                )
            });
            return Err(InitError::window(format!(
                "platform could not create a {width}x{height} window{detail}"
            )));
        };

        self.phase = Phase::WindowCreated;
        Ok(self.window.insert(WindowHandle::new(window)))
    }

    /// Make the window's context current on the calling thread
    ///
    /// Returns `None` when there is no window yet.
    pub fn make_current(&mut self) -> Option<CurrentContext> {
        let (system, window) = self.parts_mut()?;
        system.make_context_current(window.inner_mut());
        self.phase = Phase::Current;
        Some(CurrentContext::new())
    }

    /// Set the presentation pacing: swap interval 1 with vsync, 0 without
    pub fn apply_swap_interval(&mut self, _context: &CurrentContext, vsync: bool) {
        if let Some(system) = self.system.as_mut() {
            system.set_swap_interval(u32::from(vsync));
            log::debug!("Swap interval set (vsync: {vsync})");
        }
    }

    /// Current bootstrap phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Context attributes recorded by [`Session::configure_context`]
    pub const fn attributes(&self) -> Option<ContextAttributes> {
        self.attributes
    }

    /// The live window, if one was created
    pub fn window(&self) -> Option<&WindowHandle<S::Window>> {
        self.window.as_ref()
    }

    /// Mutable access to the live window
    pub fn window_mut(&mut self) -> Option<&mut WindowHandle<S::Window>> {
        self.window.as_mut()
    }

    pub(crate) fn parts_mut(&mut self) -> Option<(&mut S, &mut WindowHandle<S::Window>)> {
        match (self.system.as_mut(), self.window.as_mut()) {
            (Some(system), Some(window)) => Some((system, window)),
            _ => None,
        }
    }
}

/// Report the driver version and renderer once
///
/// Purely diagnostic: a failed write is logged and otherwise ignored.
pub fn report_context_info<G: GraphicsApi, O: Write>(gfx: &G, out: &mut O) {
    let version = gfx.version();
    let renderer = gfx.renderer();
    log::info!("OpenGL context ready: {version} on {renderer}");

    let written = writeln!(out, "OpenGL Version: {version}")
        .and_then(|()| writeln!(out, "OpenGL Renderer: {renderer}"))
        .and_then(|()| out.flush());
    if let Err(err) = written {
        log::warn!("Could not write context info: {err}");
    }
}
