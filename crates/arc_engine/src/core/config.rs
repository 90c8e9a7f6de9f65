//! # Application Configuration
//!
//! Everything the bootstrap needs to know before it creates the window:
//! window geometry and title, the requested OpenGL context, and the clear
//! color used by the default frame.
//!
//! All types deserialize through the [`Config`] trait from TOML or RON
//! files. Fields missing from a file keep their defaults.

use serde::Deserialize;

use crate::config::{Config, ConfigError};

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Wait for vertical sync when presenting (swap interval 1)
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given size and title
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            resizable: true,
            vsync: true,
        }
    }

    /// Enable or disable vsync pacing
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Check the window can be requested from the platform
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window dimensions must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("Arc Engine", 800, 600)
    }
}

/// OpenGL profile requested for the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ContextProfile {
    /// Core profile, deprecated functionality removed
    Core,
    /// Compatibility profile
    Compatibility,
    /// Let the platform pick
    Any,
}

/// # Context Attributes
///
/// Requested OpenGL version, profile and forward compatibility. Recorded once
/// before window creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContextAttributes {
    /// Major GL version
    pub major: u32,
    /// Minor GL version
    pub minor: u32,
    /// Context profile
    pub profile: ContextProfile,
    /// Request a forward-compatible context (required on macOS)
    pub forward_compatible: bool,
}

impl ContextAttributes {
    /// Core, forward-compatible context of the given version
    pub const fn core(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            profile: ContextProfile::Core,
            forward_compatible: true,
        }
    }

    /// Set the profile
    pub const fn with_profile(mut self, profile: ContextProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set forward compatibility
    pub const fn with_forward_compatible(mut self, forward_compatible: bool) -> Self {
        self.forward_compatible = forward_compatible;
        self
    }

    /// Check the request is well-formed
    pub fn validate(&self) -> Result<(), String> {
        if self.major == 0 {
            return Err("Context major version must be at least 1".to_string());
        }
        // Profiles only exist from 3.2 onwards
        if self.profile != ContextProfile::Any && (self.major, self.minor) < (3, 2) {
            return Err(format!(
                "{:?} profile requires OpenGL 3.2 or newer, got {}.{}",
                self.profile, self.major, self.minor
            ));
        }
        Ok(())
    }
}

impl Default for ContextAttributes {
    /// OpenGL 4.1 core, the newest version macOS provides
    fn default() -> Self {
        Self::core(4, 1)
    }
}

/// RGBA color used to clear the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClearColor {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl ClearColor {
    /// Create a color from components in `0.0..=1.0`
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    fn validate(&self) -> Result<(), String> {
        let in_range = [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c));
        if in_range {
            Ok(())
        } else {
            Err(format!("Clear color components must be within 0.0..=1.0, got {self:?}"))
        }
    }
}

impl Default for ClearColor {
    /// Dark blue
    fn default() -> Self {
        Self::new(0.1, 0.1, 0.2, 1.0)
    }
}

/// # Complete Application Configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Window to create
    pub window: WindowConfig,
    /// OpenGL context to request
    pub context: ContextAttributes,
    /// Background color of every frame
    pub clear_color: ClearColor,
}

impl AppConfig {
    /// Set the window configuration
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the requested context
    pub fn with_context(mut self, context: ContextAttributes) -> Self {
        self.context = context;
        self
    }

    /// Set the clear color
    pub fn with_clear_color(mut self, clear_color: ClearColor) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate().map_err(ConfigError::Invalid)?;
        self.context.validate().map_err(ConfigError::Invalid)?;
        self.clear_color.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

impl Config for AppConfig {}
