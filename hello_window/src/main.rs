//! Hello Window
//!
//! Opens an 800x600 OpenGL 3.3 window and clears it to a dark teal every
//! frame until the window is closed or Escape is pressed.

use learn_gl::prelude::*;

/// Optional settings file read from the working directory
const CONFIG_PATH: &str = "hello_window.toml";

fn run() -> Result<FrameStats, EngineError> {
    let config = AppConfig::load_or_default(CONFIG_PATH)?;
    log::info!(
        "Window \"{}\" {}x{}, exit key {:?}",
        config.window.title,
        config.window.width,
        config.window.height,
        config.input.exit_key
    );

    let platform = GlfwPlatform::new()?;
    Engine::new(platform, config).run()
}

fn main() {
    learn_gl::foundation::logging::init();

    log::info!("Starting Hello Window");

    match run() {
        Ok(stats) => {
            log::info!("Hello Window finished after {} frames", stats.frames);
        }
        Err(e) => {
            let code = report(&e, &mut std::io::stdout());
            std::process::exit(code);
        }
    }
}
