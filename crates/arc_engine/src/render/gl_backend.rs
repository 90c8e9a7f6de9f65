//! OpenGL implementation of [`GraphicsApi`]
#![allow(unsafe_code)]

use std::ffi::CStr;
use std::marker::PhantomData;

use super::GraphicsApi;
use crate::core::config::ClearColor;
use crate::platform::{CurrentContext, PlatformWindow, WindowHandle};

/// OpenGL function table bound to the current context
///
/// The `gl` crate keeps its entry points in process globals, so this type is
/// only a typed view over them. It is not `Send`: commands must come from the
/// thread holding the context.
pub struct GlGraphics {
    can_clear: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl GlGraphics {
    /// Load OpenGL entry points through the window's context
    ///
    /// Requires the context to be current, which the [`CurrentContext`]
    /// argument proves.
    /// Missing clear entry points are logged and turn the clear calls into
    /// no-ops.
    pub fn load<W: PlatformWindow>(
        window: &mut WindowHandle<W>,
        _context: &CurrentContext,
    ) -> Self {
        gl::load_with(|symbol| window.get_proc_address(symbol));
        Self::from_loaded_symbols()
    }

    fn from_loaded_symbols() -> Self {
        let missing: Vec<&str> = [
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
        ]
        .into_iter()
        .filter_map(|(name, loaded)| (!loaded).then_some(name))
        .collect();

        if !missing.is_empty() {
            log::warn!("{} could not be resolved; frames will not be cleared", missing.join(", "));
        }

        Self {
            can_clear: missing.is_empty(),
            _thread_bound: PhantomData,
        }
    }

    fn get_string(name: gl::types::GLenum) -> String {
        if !gl::GetString::is_loaded() {
            return "<unavailable>".to_string();
        }

        // SAFETY: the entry point is loaded and a context is current; the
        // returned pointer is either null or a static NUL-terminated string.
        let ptr = unsafe { gl::GetString(name) };
        if ptr.is_null() {
            return "<unavailable>".to_string();
        }
        unsafe { CStr::from_ptr(ptr.cast()) }.to_string_lossy().into_owned()
    }
}

impl GraphicsApi for GlGraphics {
    fn clear_color(&mut self, color: ClearColor) {
        if !self.can_clear {
            return;
        }
        // SAFETY: entry point resolved and the context is current on this
        // thread (see `load`)
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) };
    }

    fn clear(&mut self) {
        if !self.can_clear {
            return;
        }
        // SAFETY: as for `clear_color`
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    fn version(&self) -> String {
        Self::get_string(gl::VERSION)
    }

    fn renderer(&self) -> String {
        Self::get_string(gl::RENDERER)
    }
}
