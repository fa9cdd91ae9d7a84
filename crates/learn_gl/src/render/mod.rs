//! Rendering: window platform, graphics API, viewport callbacks and the render loop

pub mod graphics;
pub mod render_loop;
pub mod viewport;
pub mod window;

pub use graphics::{ClearMask, GraphicsApi, GraphicsError, GraphicsResult, OpenGl};
pub use render_loop::{FrameStats, RenderLoop};
pub use viewport::{resize_viewport, FramebufferCallbacks};
pub use window::{GlfwPlatform, Platform, WindowBackend, WindowError, WindowEvent};
