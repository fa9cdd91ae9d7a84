//! Backend-agnostic window management traits
//!
//! [`Platform`] is the windowing library itself: it creates windows, loads
//! the graphics API for a window's context, and is torn down exactly once.
//! [`WindowBackend`] is a single created window. The render loop only talks
//! to these traits, so tests can drive it with a fake platform.

use thiserror::Error;

use crate::core::config::WindowConfig;
use crate::input::KeyCode;
use crate::render::graphics::{GraphicsApi, GraphicsResult};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library could not be initialized
    #[error("Failed to initialize GLFW: {0}")]
    InitializationFailed(String),

    /// The windowing library refused to create the window or its context
    #[error("Failed to create GLFW window")]
    CreationFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Window events the render loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The framebuffer changed size, in pixels
    FramebufferResized {
        /// New framebuffer width
        width: u32,
        /// New framebuffer height
        height: u32,
    },
    /// The user asked to close the window
    CloseRequested,
}

/// Operations on a created window
///
/// Window operations other than creation are treated as infallible, matching
/// the underlying libraries which report problems through their own error
/// callbacks.
pub trait WindowBackend {
    /// Check if the window should close
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    fn set_should_close(&mut self, should_close: bool);

    /// Whether `key` is currently held down
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Take the events collected by the last [`poll_events`](Self::poll_events)
    fn drain_events(&mut self) -> Vec<WindowEvent>;
}

/// A windowing library able to create windows with a graphics context
pub trait Platform {
    /// Window type produced by this platform
    type Window: WindowBackend;

    /// Graphics API bound to a window's context
    type Graphics: GraphicsApi;

    /// Create a window and its context
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Self::Window>;

    /// Make the window's context current and load the graphics API for it
    fn load_graphics(&mut self, window: &mut Self::Window) -> GraphicsResult<Self::Graphics>;

    /// Release all windowing library resources
    fn terminate(self);
}
