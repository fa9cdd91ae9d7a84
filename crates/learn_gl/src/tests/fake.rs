//! Fake platform that records every windowing and graphics call in order

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::core::config::{ClearColor, WindowConfig};
use crate::input::KeyCode;
use crate::render::graphics::{ClearMask, GraphicsApi, GraphicsError, GraphicsResult};
use crate::render::window::{Platform, WindowBackend, WindowError, WindowEvent, WindowResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateWindow,
    LoadGraphics,
    Terminate,
    SetShouldClose(bool),
    SwapBuffers,
    PollEvents,
    Viewport(i32, i32, u32, u32),
    ClearColor(ClearColor),
    Clear(ClearMask),
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn graphics_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Viewport(..) | Call::ClearColor(_) | Call::Clear(_)))
            .collect()
    }
}

/// What the fake window does as polls happen
#[derive(Debug, Clone, Default)]
pub struct WindowScript {
    /// The close flag becomes true during this poll, as if the user clicked the close button
    pub close_after_polls: Option<usize>,
    /// Keys reported pressed once this many polls have happened
    pub keys_after_polls: Vec<(usize, KeyCode)>,
    /// Events delivered by the poll with the given number (1-based)
    pub events_at_poll: HashMap<usize, Vec<WindowEvent>>,
}

pub struct FakeWindow {
    log: CallLog,
    script: WindowScript,
    framebuffer: (u32, u32),
    should_close: bool,
    polls: usize,
    pending: Vec<WindowEvent>,
}

impl FakeWindow {
    pub fn new(log: CallLog, script: WindowScript) -> Self {
        Self {
            log,
            script,
            framebuffer: (800, 600),
            should_close: false,
            polls: 0,
            pending: Vec::new(),
        }
    }

    fn pressed_keys(&self) -> HashSet<KeyCode> {
        self.script
            .keys_after_polls
            .iter()
            .filter(|(after, _)| self.polls >= *after)
            .map(|(_, key)| *key)
            .collect()
    }
}

impl WindowBackend for FakeWindow {
    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.log.push(Call::SetShouldClose(should_close));
        self.should_close = should_close;
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys().contains(&key)
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer
    }

    fn swap_buffers(&mut self) {
        self.log.push(Call::SwapBuffers);
    }

    fn poll_events(&mut self) {
        self.log.push(Call::PollEvents);
        self.polls += 1;

        if let Some(events) = self.script.events_at_poll.remove(&self.polls) {
            for event in &events {
                if let WindowEvent::FramebufferResized { width, height } = *event {
                    self.framebuffer = (width, height);
                }
            }
            self.pending.extend(events);
        }
        if self.script.close_after_polls == Some(self.polls) {
            self.should_close = true;
            self.pending.push(WindowEvent::CloseRequested);
        }
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.pending)
    }
}

pub struct FakeGraphics {
    log: CallLog,
}

impl FakeGraphics {
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl GraphicsApi for FakeGraphics {
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.log.push(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&mut self, color: ClearColor) {
        self.log.push(Call::ClearColor(color));
    }

    fn clear(&mut self, mask: ClearMask) {
        self.log.push(Call::Clear(mask));
    }
}

#[derive(Default)]
pub struct FakePlatform {
    pub log: CallLog,
    pub fail_create: bool,
    pub fail_load: bool,
    pub script: WindowScript,
}

impl FakePlatform {
    pub fn closing_after(frames: usize) -> Self {
        Self {
            script: WindowScript {
                close_after_polls: Some(frames),
                ..WindowScript::default()
            },
            ..Self::default()
        }
    }
}

impl Platform for FakePlatform {
    type Window = FakeWindow;
    type Graphics = FakeGraphics;

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<FakeWindow> {
        self.log.push(Call::CreateWindow);
        if self.fail_create {
            return Err(WindowError::CreationFailed);
        }
        let mut window = FakeWindow::new(self.log.clone(), std::mem::take(&mut self.script));
        window.framebuffer = (config.width, config.height);
        Ok(window)
    }

    fn load_graphics(&mut self, _window: &mut FakeWindow) -> GraphicsResult<FakeGraphics> {
        self.log.push(Call::LoadGraphics);
        if self.fail_load {
            return Err(GraphicsError::LoaderFailed { missing: "glClear" });
        }
        Ok(FakeGraphics::new(self.log.clone()))
    }

    fn terminate(self) {
        self.log.push(Call::Terminate);
    }
}
