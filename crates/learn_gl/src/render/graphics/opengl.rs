//! OpenGL backend built on the `gl` crate
//!
//! Every call here is a raw FFI call into the driver, which is only sound
//! while the context the pointers were loaded for is current on this thread.
//! [`OpenGl`] is created after `make_current` and lives on the render thread.

#![allow(unsafe_code)]

use std::ffi::c_void;

use crate::core::config::ClearColor;
use crate::render::graphics::{ClearMask, GraphicsApi, GraphicsError, GraphicsResult};

/// OpenGL function table for the current context
#[derive(Debug)]
pub struct OpenGl {
    // Not Send/Sync: the context is bound to the thread that loaded it.
    _not_send: std::marker::PhantomData<*const ()>,
}

impl OpenGl {
    /// Load function pointers through `loader` and verify the ones the render loop calls
    pub fn load_with<F>(mut loader: F) -> GraphicsResult<Self>
    where
        F: FnMut(&str) -> *const c_void,
    {
        gl::load_with(|name| loader(name));

        let required: [(&'static str, bool); 4] = [
            ("glViewport", gl::Viewport::is_loaded()),
            ("glClearColor", gl::ClearColor::is_loaded()),
            ("glClear", gl::Clear::is_loaded()),
            ("glGetError", gl::GetError::is_loaded()),
        ];
        for (missing, loaded) in required {
            if !loaded {
                log::error!("OpenGL entry point {missing} did not load");
                return Err(GraphicsError::LoaderFailed { missing });
            }
        }

        log::info!("OpenGL function pointers loaded");
        Ok(Self { _not_send: std::marker::PhantomData })
    }
}

impl GraphicsApi for OpenGl {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        unsafe { gl::Viewport(x, y, width, height) }
    }

    fn clear_color(&mut self, color: ClearColor) {
        unsafe { gl::ClearColor(color.r, color.g, color.b, color.a) }
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe { gl::Clear(mask.bits()) }
    }

    fn take_errors(&mut self) -> Vec<u32> {
        let mut errors = Vec::new();
        loop {
            let error = unsafe { gl::GetError() };
            if error == gl::NO_ERROR {
                break;
            }
            errors.push(error);
        }
        errors
    }
}
