//! Startup and shutdown around the render loop

use std::io::Write;

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::config::AppConfig;
use crate::render::graphics::GraphicsError;
use crate::render::render_loop::{FrameStats, RenderLoop};
use crate::render::window::{Platform, WindowError};

/// Fatal startup errors
///
/// Each displays as the one-line diagnostic printed before exiting.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window or windowing library failure
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Graphics function loading failure
    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    /// Configuration could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Process exit status for this error
    pub const fn exit_code(&self) -> i32 {
        -1
    }
}

/// Write the one-line diagnostic for `error` to `out` and return the exit status
pub fn report(error: &EngineError, out: &mut impl Write) -> i32 {
    if let Err(io) = writeln!(out, "{error}") {
        log::error!("Could not write diagnostic: {io}");
    }
    error.exit_code()
}

/// Drives a [`Platform`] from window creation to termination
pub struct Engine<P: Platform> {
    platform: P,
    config: AppConfig,
}

impl<P: Platform> Engine<P> {
    /// Create an engine over an initialized platform
    pub const fn new(platform: P, config: AppConfig) -> Self {
        Self { platform, config }
    }

    /// Create the window, load graphics, run the loop and terminate the platform
    ///
    /// The platform is terminated exactly once on every path, including
    /// failures. No graphics call is made unless loading succeeded.
    pub fn run(self) -> Result<FrameStats, EngineError> {
        let Self { mut platform, config } = self;

        log::info!("Creating window...");
        let mut window = match platform.create_window(&config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{e}");
                platform.terminate();
                return Err(e.into());
            }
        };

        log::info!("Loading graphics API...");
        let graphics = match platform.load_graphics(&mut window) {
            Ok(graphics) => graphics,
            Err(e) => {
                log::error!("{e}");
                drop(window);
                platform.terminate();
                return Err(e.into());
            }
        };

        let mut render_loop = RenderLoop::new(window, graphics, &config);
        let stats = render_loop.run();

        drop(render_loop);
        platform.terminate();
        log::info!("Shutdown complete");
        Ok(stats)
    }
}
