//! Graphics API seam
//!
//! The frame loop only needs to clear the framebuffer and, once at startup,
//! report which driver it is talking to. [`GraphicsApi`] is that surface;
//! [`gl_backend::GlGraphics`] implements it on OpenGL.

use crate::core::config::ClearColor;

pub mod clear;
pub mod gl_backend;

/// Graphics commands issued against the current context
pub trait GraphicsApi {
    /// Set the color used by [`GraphicsApi::clear`]
    fn clear_color(&mut self, color: ClearColor);

    /// Clear the color buffer
    fn clear(&mut self);

    /// Driver version string
    fn version(&self) -> String;

    /// Renderer (GPU) description string
    fn renderer(&self) -> String;
}
