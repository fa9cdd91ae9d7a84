//! Framebuffer resize handling
//!
//! Resize callbacks are closures registered on a [`FramebufferCallbacks`]
//! owned by the render loop. Each receives the graphics API explicitly, so
//! no callback needs global access to the context.

use crate::render::graphics::GraphicsApi;

/// Map output to the whole framebuffer after a resize
pub fn resize_viewport<G: GraphicsApi + ?Sized>(graphics: &mut G, width: u32, height: u32) {
    log::debug!("Framebuffer resized to {width}x{height}");
    graphics.viewport(0, 0, width, height);
}

type ResizeCallback<G> = Box<dyn FnMut(&mut G, u32, u32)>;

/// Callbacks run when the framebuffer changes size
pub struct FramebufferCallbacks<G> {
    callbacks: Vec<ResizeCallback<G>>,
}

impl<G: GraphicsApi> FramebufferCallbacks<G> {
    /// An empty registry
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    /// A registry with [`resize_viewport`] installed
    pub fn with_viewport_resize() -> Self {
        let mut callbacks = Self::new();
        callbacks.on_resize(|graphics: &mut G, width, height| resize_viewport(graphics, width, height));
        callbacks
    }

    /// Register a callback, run after those already registered
    pub fn on_resize<F>(&mut self, callback: F)
    where
        F: FnMut(&mut G, u32, u32) + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Run every callback for a new framebuffer size
    pub fn dispatch(&mut self, graphics: &mut G, width: u32, height: u32) {
        for callback in &mut self.callbacks {
            callback(graphics, width, height);
        }
    }
}

impl<G: GraphicsApi> Default for FramebufferCallbacks<G> {
    fn default() -> Self {
        Self::with_viewport_resize()
    }
}
