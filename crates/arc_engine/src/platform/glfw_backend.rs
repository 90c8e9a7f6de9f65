//! Window management using GLFW
//!
//! Provides the process-wide GLFW subsystem and an OpenGL-capable window.

use std::ffi::c_void;
use std::sync::atomic::AtomicBool;

use glfw::{ClientApiHint, Context, OpenGlProfileHint, SwapInterval, WindowEvent, WindowHint};

use super::{PlatformWindow, SubsystemLease, WindowSystem};
use crate::core::config::{ContextAttributes, ContextProfile, WindowConfig};

/// Set while a [`GlfwSystem`] is alive
static GLFW_LIVE: AtomicBool = AtomicBool::new(false);

/// Initialized GLFW library
///
/// At most one exists per process. Dropping or terminating it shuts GLFW
/// down and frees the slot for a later initialization.
pub struct GlfwSystem {
    // Field order matters: GLFW terminates before the lease is released.
    glfw: glfw::Glfw,
    _lease: SubsystemLease,
}

impl GlfwSystem {
    /// Initialize GLFW
    ///
    /// GLFW errors reported after this point are forwarded to the `log`
    /// facade instead of panicking, so a failed window creation surfaces as
    /// `None` from [`WindowSystem::create_window`].
    pub fn init() -> Result<Self, String> {
        let lease = SubsystemLease::acquire(&GLFW_LIVE)
            .ok_or_else(|| "GLFW is already initialized in this process".to_string())?;

        let glfw = glfw::init(glfw::log_errors).map_err(|err| format!("glfwInit failed: {err:?}"))?;
        log::info!("GLFW {} initialized", glfw::get_version_string());

        Ok(Self { glfw, _lease: lease })
    }
}

impl WindowSystem for GlfwSystem {
    type Window = GlfwWindow;

    fn apply_context_hints(&mut self, attrs: &ContextAttributes, window: &WindowConfig) {
        let profile = match attrs.profile {
            ContextProfile::Core => OpenGlProfileHint::Core,
            ContextProfile::Compatibility => OpenGlProfileHint::Compat,
            ContextProfile::Any => OpenGlProfileHint::Any,
        };

        self.glfw.window_hint(WindowHint::ClientApi(ClientApiHint::OpenGl));
        self.glfw.window_hint(WindowHint::ContextVersion(attrs.major, attrs.minor));
        self.glfw.window_hint(WindowHint::OpenGlProfile(profile));
        self.glfw.window_hint(WindowHint::OpenGlForwardCompat(attrs.forward_compatible));
        self.glfw.window_hint(WindowHint::Resizable(window.resizable));
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Option<GlfwWindow> {
        let (mut window, events) = self
            .glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)?;

        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_key_polling(true);

        Some(GlfwWindow { window, events })
    }

    fn make_context_current(&mut self, window: &mut GlfwWindow) {
        window.window.make_current();
    }

    fn set_swap_interval(&mut self, interval: u32) {
        let interval = if interval == 0 {
            SwapInterval::None
        } else {
            SwapInterval::Sync(interval)
        };
        self.glfw.set_swap_interval(interval);
    }

    fn poll_events(&mut self, window: &mut GlfwWindow) {
        self.glfw.poll_events();

        for (_, event) in glfw::flush_messages(&window.events) {
            match event {
                WindowEvent::Close => log::info!("Window close requested"),
                WindowEvent::FramebufferSize(width, height) => {
                    log::debug!("Framebuffer resized to {width}x{height}");
                }
                other => log::trace!("Window event: {other:?}"),
            }
        }
    }

    fn destroy_window(&mut self, window: GlfwWindow) {
        drop(window);
        log::debug!("GLFW window destroyed");
    }

    fn terminate(self) {
        drop(self);
        log::debug!("GLFW terminated");
    }

    fn release_after_failed_init() {
        // glfwInit terminates itself when it fails, and a refused lease means
        // another live subsystem that must stay untouched.
        log::debug!("GLFW init failed; nothing left to terminate");
    }
}

/// GLFW window with its OpenGL context and event queue
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

impl PlatformWindow for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const c_void
    }
}
