//! Window management using GLFW
//!
//! Provides window creation, OpenGL context setup and event handling.

use std::ffi::c_void;

use glfw::Context;

use crate::core::config::WindowConfig;
use crate::input::KeyCode;
use crate::render::graphics::{GraphicsResult, OpenGl};
use crate::render::window::backend::{Platform, WindowBackend, WindowError, WindowEvent, WindowResult};

/// The GLFW library, initialized
pub struct GlfwPlatform {
    glfw: glfw::Glfw,
}

impl GlfwPlatform {
    /// Initialize GLFW
    ///
    /// GLFW errors are logged, not raised, so failed calls surface through
    /// their return values as [`WindowError`]s.
    pub fn new() -> WindowResult<Self> {
        let glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;
        log::info!("GLFW initialized");
        Ok(Self { glfw })
    }

    fn apply_hints(&mut self, config: &WindowConfig) {
        let context = &config.context;
        self.glfw
            .window_hint(glfw::WindowHint::ContextVersion(context.major, context.minor));
        if context.core_profile {
            self.glfw
                .window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        }
        self.glfw
            .window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compat));
        self.glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
    }
}

impl Platform for GlfwPlatform {
    type Window = GlfwWindow;
    type Graphics = OpenGl;

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<GlfwWindow> {
        self.apply_hints(config);

        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);

        log::info!(
            "Created {}x{} window \"{}\" (OpenGL {}.{})",
            config.width,
            config.height,
            config.title,
            config.context.major,
            config.context.minor
        );

        Ok(GlfwWindow { window, events, pending: Vec::new() })
    }

    fn load_graphics(&mut self, window: &mut GlfwWindow) -> GraphicsResult<OpenGl> {
        window.window.make_current();
        OpenGl::load_with(|name| window.window.get_proc_address(name) as *const c_void)
    }

    fn terminate(self) {
        log::info!("Terminating GLFW");
        drop(self.glfw);
    }
}

/// A GLFW window with a current-capable OpenGL context
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    pending: Vec<WindowEvent>,
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.window.get_key(to_glfw_key(key)) == glfw::Action::Press
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (clamp_dimension(width), clamp_dimension(height))
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn poll_events(&mut self) {
        self.window.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    self.pending.push(WindowEvent::FramebufferResized {
                        width: clamp_dimension(width),
                        height: clamp_dimension(height),
                    });
                }
                glfw::WindowEvent::Close => self.pending.push(WindowEvent::CloseRequested),
                _ => {}
            }
        }
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.pending)
    }
}

/// GLFW reports sizes as `i32`; anything negative is treated as zero
fn clamp_dimension(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

const fn to_glfw_key(key: KeyCode) -> glfw::Key {
    match key {
        KeyCode::Escape => glfw::Key::Escape,
        KeyCode::Enter => glfw::Key::Enter,
        KeyCode::Space => glfw::Key::Space,
        KeyCode::Tab => glfw::Key::Tab,
        KeyCode::Backspace => glfw::Key::Backspace,
        KeyCode::Q => glfw::Key::Q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_dimensions_clamp_to_zero() {
        assert_eq!(clamp_dimension(-5), 0);
        assert_eq!(clamp_dimension(0), 0);
        assert_eq!(clamp_dimension(800), 800);
    }

    #[test]
    fn test_unavailable_context_is_an_error() {
        // Headless hosts fail at init; hosts with a display cannot make a 99.0 context.
        let mut platform = match GlfwPlatform::new() {
            Ok(platform) => platform,
            Err(e) => {
                assert!(matches!(e, WindowError::InitializationFailed(_)));
                return;
            }
        };
        let mut config = WindowConfig::default();
        config.context.major = 99;
        config.context.minor = 0;

        let result = platform.create_window(&config);

        assert!(matches!(result, Err(WindowError::CreationFailed)));
        platform.terminate();
    }

    #[test]
    fn test_exit_key_maps_to_glfw_escape() {
        assert_eq!(to_glfw_key(KeyCode::Escape), glfw::Key::Escape);
        assert_eq!(to_glfw_key(KeyCode::Q), glfw::Key::Q);
    }
}
