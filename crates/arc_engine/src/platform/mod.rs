//! Windowing platform layer
//!
//! The engine never talks to GLFW directly. It sequences calls through two
//! traits:
//!
//! ```text
//! ┌──────────────────────────┐
//! │ engine::Session          │  bootstrap / loop / shutdown ordering
//! └────────────┬─────────────┘
//!              │ uses
//! ┌────────────▼─────────────┐
//! │ WindowSystem             │  process-wide subsystem (hints, events, terminate)
//! │ PlatformWindow           │  one window + its GL context
//! └────────────┬─────────────┘
//!              │ implemented by
//! ┌────────────▼─────────────┐
//! │ glfw_backend::GlfwSystem │
//! └──────────────────────────┘
//! ```
//!
//! Tests substitute a recording backend so the ordering can be checked
//! without a display server.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::config::{ContextAttributes, WindowConfig};

pub mod glfw_backend;

#[cfg(test)]
pub(crate) mod testing;

/// Process-wide windowing subsystem
///
/// A value of this type exists only between a successful initialization and
/// [`WindowSystem::terminate`].
pub trait WindowSystem {
    /// Window type created by this subsystem
    type Window: PlatformWindow;

    /// Record context and window hints for the next window creation
    fn apply_context_hints(&mut self, attrs: &ContextAttributes, window: &WindowConfig);

    /// Create a window with the previously applied hints
    ///
    /// Returns `None` when the platform cannot satisfy the hints or allocate
    /// a window.
    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Option<Self::Window>;

    /// Bind the window's context to the calling thread
    fn make_context_current(&mut self, window: &mut Self::Window);

    /// Set how many vertical blanks a buffer swap waits for
    fn set_swap_interval(&mut self, interval: u32);

    /// Process pending events without blocking and drain the window's queue
    fn poll_events(&mut self, window: &mut Self::Window);

    /// Release a window and its context
    fn destroy_window(&mut self, window: Self::Window);

    /// Release the subsystem
    fn terminate(self);

    /// Release step for an initialization that failed
    ///
    /// No subsystem value exists at this point, so this only undoes whatever
    /// a partial initialization left behind. Must be safe to call when
    /// nothing is left.
    fn release_after_failed_init();
}

/// A platform window with an attached OpenGL context
pub trait PlatformWindow {
    /// Whether the user or OS requested the window to close
    fn should_close(&self) -> bool;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Address of an OpenGL entry point, null when unavailable
    fn get_proc_address(&mut self, symbol: &str) -> *const c_void;
}

/// Owned handle to the single live window
///
/// Not `Send`: the window and its context stay on the thread that created
/// them.
pub struct WindowHandle<W> {
    inner: W,
    _thread_bound: PhantomData<*const ()>,
}

impl<W: PlatformWindow> WindowHandle<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            _thread_bound: PhantomData,
        }
    }

    /// Check the close-request flag
    pub fn should_close(&self) -> bool {
        self.inner.should_close()
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.inner.swap_buffers();
    }

    /// Resolve an OpenGL entry point through the window's context
    pub fn get_proc_address(&mut self, symbol: &str) -> *const c_void {
        self.inner.get_proc_address(symbol)
    }

    pub(crate) fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub(crate) fn into_inner(self) -> W {
        self.inner
    }
}

/// Proof that a rendering context is current on this thread
///
/// Only [`crate::engine::Session::make_current`] hands these out. The type is
/// neither `Send` nor `Sync`, so the capability cannot migrate to another
/// thread. Anything that issues graphics commands asks for a reference to it.
#[derive(Debug)]
pub struct CurrentContext {
    _thread_bound: PhantomData<*const ()>,
}

impl CurrentContext {
    pub(crate) const fn new() -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }
}

/// Claim on a process-wide "subsystem is live" flag
///
/// Acquiring fails while another lease on the same flag is alive. Dropping
/// the lease frees the flag.
#[derive(Debug)]
pub struct SubsystemLease {
    flag: &'static AtomicBool,
}

impl SubsystemLease {
    /// Take the flag, or `None` if it is already held
    pub fn acquire(flag: &'static AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubsystemLease {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
