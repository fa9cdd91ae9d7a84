//! Graphics API abstraction
//!
//! The render loop needs three state calls from the graphics API: set the
//! viewport, set the clear color and clear buffers. [`GraphicsApi`] exposes
//! exactly those, with [`OpenGl`] as the production implementation.

pub mod opengl;

pub use opengl::OpenGl;

use bitflags::bitflags;
use thiserror::Error;

use crate::core::config::ClearColor;

bitflags! {
    /// Buffers cleared by [`GraphicsApi::clear`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearMask: u32 {
        /// Color buffer
        const COLOR = gl::COLOR_BUFFER_BIT;
        /// Depth buffer
        const DEPTH = gl::DEPTH_BUFFER_BIT;
        /// Stencil buffer
        const STENCIL = gl::STENCIL_BUFFER_BIT;
    }
}

/// Graphics API errors
#[derive(Error, Debug)]
pub enum GraphicsError {
    /// Function pointers could not be loaded for the current context
    #[error("Failed to initialize OpenGL function loader (missing {missing})")]
    LoaderFailed {
        /// Name of the first entry point that did not resolve
        missing: &'static str,
    },
}

/// Result alias for graphics operations
pub type GraphicsResult<T> = Result<T, GraphicsError>;

/// Graphics calls issued by the render loop
pub trait GraphicsApi {
    /// Map output to the rectangle at (`x`, `y`) of the given size
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Set the color used by subsequent clears
    fn clear_color(&mut self, color: ClearColor);

    /// Clear the buffers in `mask`
    fn clear(&mut self, mask: ClearMask);

    /// Report errors raised since the last check
    ///
    /// Backends without error reporting can rely on the default, which
    /// reports nothing.
    fn take_errors(&mut self) -> Vec<u32> {
        Vec::new()
    }
}
