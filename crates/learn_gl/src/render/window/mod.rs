//! Window management subsystem
//!
//! - **`backend`**: the [`Platform`] and [`WindowBackend`] traits the render loop drives
//! - **`glfw_backend`**: the GLFW implementation used by the application

pub mod backend;
pub mod glfw_backend;

pub use backend::{Platform, WindowBackend, WindowError, WindowEvent, WindowResult};
pub use glfw_backend::{GlfwPlatform, GlfwWindow};
