//! # learn_gl
//!
//! Window, OpenGL context and render loop plumbing for the hello window
//! tutorial: open a window, clear it to a fixed color every frame, and stop
//! when the window is closed or the exit key is pressed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use learn_gl::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let platform = GlfwPlatform::new()?;
//!     Engine::new(platform, AppConfig::default()).run()?;
//!     Ok(())
//! }
//! ```
//!
//! The render loop only depends on the [`render::Platform`],
//! [`render::WindowBackend`] and [`render::GraphicsApi`] traits, so it can be
//! driven by something other than GLFW and OpenGL.

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod input;
pub mod render;

mod engine;

pub use engine::{report, Engine, EngineError};

#[cfg(test)]
mod tests;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        core::config::{AppConfig, ClearColor, ContextConfig, InputConfig, WindowConfig},
        input::{InputPoller, KeyCode},
        render::{
            ClearMask, FrameStats, GlfwPlatform, GraphicsApi, Platform, RenderLoop,
            WindowBackend, WindowEvent,
        },
        report, Engine, EngineError,
    };
}
