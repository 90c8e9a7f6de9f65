//! Foundation module - Core utilities shared by the engine
//!
//! - Logging setup
//! - Frame timing

pub mod time;
pub mod logging;
