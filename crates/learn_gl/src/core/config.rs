//! # Application Configuration
//!
//! Window, context, input and clear color settings for the render loop.
//! Every struct uses `#[serde(default)]`, so a config file only needs the
//! fields it wants to change.
//!
//! ```toml
//! clear_color = { r = 0.1, g = 0.1, b = 0.1, a = 1.0 }
//!
//! [window]
//! title = "My Window"
//! width = 1024
//! height = 768
//! ```

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::input::KeyCode;

/// RGBA color used to clear the framebuffer every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl ClearColor {
    /// Create a color from its channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::new(0.2, 0.3, 0.3, 1.0)
    }
}

/// OpenGL context version and profile requested at window creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Context major version
    pub major: u32,
    /// Context minor version
    pub minor: u32,
    /// Request a core profile context
    pub core_profile: bool,
    /// Request a forward-compatible context (required on macOS)
    pub forward_compat: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            major: 3,
            minor: 3,
            core_profile: true,
            forward_compat: true,
        }
    }
}

/// Window creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in screen coordinates
    pub width: u32,
    /// Initial height in screen coordinates
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// OpenGL context settings
    pub context: ContextConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            context: ContextConfig::default(),
        }
    }
}

/// Input settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Key that closes the window
    pub exit_key: KeyCode,
}

/// Top-level configuration for the hello window application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Input settings
    pub input: InputConfig,
    /// Framebuffer clear color
    pub clear_color: ClearColor,
}

impl Config for AppConfig {}
