//! # Core Engine Module
//!
//! Shared configuration types consumed by the bootstrap, the frame loop and
//! the binary.

pub mod config;

pub use config::{
    AppConfig,
    WindowConfig,
    ContextAttributes,
    ContextProfile,
    ClearColor,
};
