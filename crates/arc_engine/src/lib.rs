//! # Arc Engine
//!
//! Bootstrap and frame loop for an OpenGL application window.
//!
//! The engine owns three phases, run strictly in order on one thread:
//!
//! - **Bootstrap**: initialize the windowing subsystem, apply context hints,
//!   create the window and make its OpenGL context current
//! - **Frame loop**: clear, present and poll events until the window is asked
//!   to close
//! - **Shutdown**: destroy the window, then terminate the subsystem
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arc_engine::prelude::*;
//!
//! fn main() {
//!     arc_engine::foundation::logging::init();
//!
//!     let engine = Engine::new(AppConfig::default()).expect("default config is valid");
//!     let mut stdout = std::io::stdout();
//!     match engine.run(GlfwSystem::init, GlGraphics::load::<GlfwWindow>, &mut stdout) {
//!         Ok(report) => log::info!("{} frames rendered", report.frames.frame_count),
//!         Err(err) => {
//!             eprintln!("{err}");
//!             std::process::exit(err.exit_code());
//!         }
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod platform;
pub mod render;
pub mod engine;

mod error;

pub use error::InitError;
pub use engine::{Engine, RunReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, RunReport, InitError,
        core::config::{AppConfig, WindowConfig, ContextAttributes, ContextProfile, ClearColor},
        config::{Config, ConfigError},
        engine::{Session, ShutdownReport, frame_loop::{run_loop, LoopState, FrameStats}},
        platform::{WindowSystem, PlatformWindow, WindowHandle, CurrentContext},
        platform::glfw_backend::{GlfwSystem, GlfwWindow},
        render::{GraphicsApi, clear::ClearPass, gl_backend::GlGraphics},
    };
}
