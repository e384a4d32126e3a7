//! Destination for user-visible diagnostics.
//!
//! Range rejections and tag reports are plain text lines. Where they go
//! depends on who is running the program:
//! - Native runs: stdout (default)
//! - Tests and embedders: an in-memory buffer they can inspect
//! - Batch checks: nowhere
//!
//! Enum dispatch keeps the per-write path free of vtable calls.

use std::sync::Arc;

use parking_lot::Mutex;

/// Writes diagnostics to stdout.
#[derive(Debug, Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print one diagnostic line.
    pub fn println(&self, line: &str) {
        println!("{line}");
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one diagnostic line.
    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything collected so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drop everything collected so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Diagnostic destination chosen when the environment is built.
#[derive(Debug)]
pub enum PrintHandler {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Collects into a buffer.
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandler {
    /// Emit one diagnostic line.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Clear captured output. No-op for handlers that don't capture.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between an environment and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandler>;

/// Handler writing to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout(StdoutPrintHandler))
}

/// Handler capturing into a buffer.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}

/// Handler discarding all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}
