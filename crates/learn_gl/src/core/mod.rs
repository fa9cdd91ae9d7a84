//! Core engine types shared by the window, input and render modules

pub mod config;

pub use config::{AppConfig, ClearColor, ContextConfig, InputConfig, WindowConfig};
