//! Recording backends for unit tests
//!
//! Every call into the windowing and graphics layers is appended to a shared
//! log so tests can assert on exact ordering.

use std::cell::RefCell;
use std::ffi::c_void;
use std::io::Write;
use std::rc::Rc;

use super::{PlatformWindow, WindowSystem};
use crate::core::config::{ClearColor, ContextAttributes, WindowConfig};
use crate::render::GraphicsApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Hints(ContextAttributes),
    CreateWindow {
        width: u32,
        height: u32,
        title: String,
    },
    MakeCurrent,
    SwapInterval(u32),
    ShouldClose,
    SwapBuffers,
    PollEvents,
    DestroyWindow,
    Terminate,
    ReleaseAfterFailedInit,
    Output(String),
    ClearColor(ClearColor),
    Clear,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

thread_local! {
    // Log of the test running on this thread, for hooks that have no `self`
    static THREAD_LOG: RefCell<Option<CallLog>> = const { RefCell::new(None) };
}

pub fn new_log() -> CallLog {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    THREAD_LOG.with(|current| *current.borrow_mut() = Some(Rc::clone(&log)));
    log
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.borrow().clone()
}

pub fn count(log: &CallLog, call: &Call) -> usize {
    log.borrow().iter().filter(|c| *c == call).count()
}

pub struct RecordingSystem {
    log: CallLog,
    fail_create: bool,
    close_after_polls: Option<u32>,
    polls: u32,
}

impl RecordingSystem {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Rc::clone(log),
            fail_create: false,
            close_after_polls: None,
            polls: 0,
        }
    }

    /// Refuse every window creation, like an unsupported context version
    pub fn failing_window_creation(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Raise the close flag during the n-th event poll
    pub fn close_after_polls(mut self, polls: u32) -> Self {
        self.close_after_polls = Some(polls);
        self
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl WindowSystem for RecordingSystem {
    type Window = RecordingWindow;

    fn apply_context_hints(&mut self, attrs: &ContextAttributes, _window: &WindowConfig) {
        self.record(Call::Hints(*attrs));
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Option<RecordingWindow> {
        self.record(Call::CreateWindow {
            width,
            height,
            title: title.to_string(),
        });
        if self.fail_create {
            return None;
        }
        Some(RecordingWindow {
            log: Rc::clone(&self.log),
            close_requested: false,
        })
    }

    fn make_context_current(&mut self, _window: &mut RecordingWindow) {
        self.record(Call::MakeCurrent);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.record(Call::SwapInterval(interval));
    }

    fn poll_events(&mut self, window: &mut RecordingWindow) {
        self.record(Call::PollEvents);
        self.polls += 1;
        if self.close_after_polls.is_some_and(|n| self.polls >= n) {
            window.close_requested = true;
        }
    }

    fn destroy_window(&mut self, _window: RecordingWindow) {
        self.record(Call::DestroyWindow);
    }

    fn terminate(self) {
        self.record(Call::Terminate);
    }

    fn release_after_failed_init() {
        THREAD_LOG.with(|current| {
            if let Some(log) = current.borrow().as_ref() {
                log.borrow_mut().push(Call::ReleaseAfterFailedInit);
            }
        });
    }
}

pub struct RecordingWindow {
    log: CallLog,
    pub close_requested: bool,
}

impl PlatformWindow for RecordingWindow {
    fn should_close(&self) -> bool {
        self.log.borrow_mut().push(Call::ShouldClose);
        self.close_requested
    }

    fn swap_buffers(&mut self) {
        self.log.borrow_mut().push(Call::SwapBuffers);
    }

    fn get_proc_address(&mut self, _symbol: &str) -> *const c_void {
        std::ptr::null()
    }
}

pub struct RecordingGraphics {
    log: CallLog,
}

impl RecordingGraphics {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl GraphicsApi for RecordingGraphics {
    fn clear_color(&mut self, color: ClearColor) {
        self.log.borrow_mut().push(Call::ClearColor(color));
    }

    fn clear(&mut self) {
        self.log.borrow_mut().push(Call::Clear);
    }

    fn version(&self) -> String {
        "4.1 Recording".to_string()
    }

    fn renderer(&self) -> String {
        "Recording Renderer".to_string()
    }
}

/// Diagnostic stream that records each completed line into the call log
pub struct RecordingOutput {
    log: CallLog,
    pending: Vec<u8>,
}

impl RecordingOutput {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Rc::clone(log),
            pending: Vec::new(),
        }
    }
}

impl Write for RecordingOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            let text = String::from_utf8_lossy(&line[..end]).into_owned();
            self.log.borrow_mut().push(Call::Output(text));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
