//! The per-frame cycle: input, clear, present, events

use crate::core::config::{AppConfig, ClearColor};
use crate::input::InputPoller;
use crate::render::graphics::{ClearMask, GraphicsApi};
use crate::render::viewport::{resize_viewport, FramebufferCallbacks};
use crate::render::window::{WindowBackend, WindowEvent};

/// Counters reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Completed loop iterations
    pub frames: u64,
    /// Resize events dispatched to callbacks
    pub resizes: u64,
}

/// Owns a window and its graphics API for the lifetime of the loop
pub struct RenderLoop<W, G> {
    window: W,
    graphics: G,
    input: InputPoller,
    clear_color: ClearColor,
    callbacks: FramebufferCallbacks<G>,
    stats: FrameStats,
}

impl<W: WindowBackend, G: GraphicsApi> RenderLoop<W, G> {
    /// Set up the loop and map the viewport to the current framebuffer
    pub fn new(window: W, mut graphics: G, config: &AppConfig) -> Self {
        let (width, height) = window.framebuffer_size();
        resize_viewport(&mut graphics, width, height);

        Self {
            window,
            graphics,
            input: InputPoller::new(config.input.exit_key),
            clear_color: config.clear_color,
            callbacks: FramebufferCallbacks::with_viewport_resize(),
            stats: FrameStats::default(),
        }
    }

    /// Resize callbacks, for registering more
    pub fn callbacks_mut(&mut self) -> &mut FramebufferCallbacks<G> {
        &mut self.callbacks
    }

    /// The window driven by this loop
    pub const fn window(&self) -> &W {
        &self.window
    }

    /// Counters so far
    pub const fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Run frames until the window is flagged for closure
    ///
    /// The flag is checked once before every frame.
    pub fn run(&mut self) -> FrameStats {
        log::info!("Starting render loop");
        while !self.window.should_close() {
            self.frame();
        }
        log::info!(
            "Render loop finished after {} frames ({} resizes)",
            self.stats.frames,
            self.stats.resizes
        );
        self.stats
    }

    /// One iteration of the loop
    pub fn frame(&mut self) {
        self.input.process_input(&mut self.window);

        self.graphics.clear_color(self.clear_color);
        self.graphics.clear(ClearMask::COLOR);
        if cfg!(debug_assertions) {
            for error in self.graphics.take_errors() {
                log::warn!("OpenGL error 0x{error:04X} during frame {}", self.stats.frames);
            }
        }

        self.window.swap_buffers();
        self.window.poll_events();

        for event in self.window.drain_events() {
            match event {
                WindowEvent::FramebufferResized { width, height } => {
                    self.callbacks.dispatch(&mut self.graphics, width, height);
                    self.stats.resizes += 1;
                }
                WindowEvent::CloseRequested => log::debug!("Window close requested"),
            }
        }

        self.stats.frames += 1;
    }
}
