//! Keyboard polling
//!
//! The render loop asks the window once per frame whether the exit key is
//! held down. Nothing else about keyboard state is tracked.

use crate::render::window::WindowBackend;
use serde::{Deserialize, Serialize};

/// Key codes understood by the window backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Escape key
    #[default]
    Escape,
    /// Enter key
    Enter,
    /// Space key
    Space,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Q key
    Q,
}

/// Requests window closure while the exit key is pressed
#[derive(Debug, Clone, Copy)]
pub struct InputPoller {
    exit_key: KeyCode,
}

impl InputPoller {
    /// Create a poller that closes the window on `exit_key`
    pub const fn new(exit_key: KeyCode) -> Self {
        Self { exit_key }
    }

    /// The key that closes the window
    pub const fn exit_key(&self) -> KeyCode {
        self.exit_key
    }

    /// Flag the window for closure if the exit key is currently pressed
    pub fn process_input<W: WindowBackend + ?Sized>(&self, window: &mut W) {
        if window.is_key_pressed(self.exit_key) {
            log::info!("{:?} pressed, closing window", self.exit_key);
            window.set_should_close(true);
        }
    }
}

impl Default for InputPoller {
    fn default() -> Self {
        Self::new(KeyCode::Escape)
    }
}
