//! Output sinks for `print`, input prompts and runtime diagnostics.
//!
//! Each handler has two channels: program output (`print`, `println`)
//! and diagnostics (`eprintln`).
//! - Stdout: stdout / stderr (default)
//! - Buffer: two in-memory buffers, for tests and embedding
//!
//! Enum dispatch rather than trait objects; the set of sinks is closed.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Writes program output to stdout and diagnostics to stderr.
///
/// A reader that went away (`mint prog | head -1`) is not an error; any other
/// write failure is logged and the run continues.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        let mut out = io::stdout().lock();
        report_write(writeln!(out, "{msg}"), "stdout");
    }

    /// Print without newline, flushing so prompts appear before a read.
    pub fn print(&self, msg: &str) {
        let mut out = io::stdout().lock();
        report_write(write!(out, "{msg}").and_then(|()| out.flush()), "stdout");
    }

    pub fn eprintln(&self, msg: &str) {
        let mut err = io::stderr().lock();
        report_write(writeln!(err, "{msg}"), "stderr");
    }
}

fn report_write(result: io::Result<()>, stream: &'static str) {
    match result {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => tracing::warn!(stream, error = %err, "write failed"),
    }
}

/// Captures both channels in memory.
pub struct BufferPrintHandler {
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            output: Mutex::new(String::new()),
            errors: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.output.lock().push_str(msg);
    }

    pub fn eprintln(&self, msg: &str) {
        let mut buf = self.errors.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything written to the output channel so far.
    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    /// Everything written to the diagnostic channel so far.
    pub fn get_errors(&self) -> String {
        self.errors.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// stdout / stderr (default).
    Stdout(StdoutPrintHandler),
    /// In-memory capture.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
        }
    }

    /// Write a diagnostic line.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.eprintln(msg),
            Self::Buffer(h) => h.eprintln(msg),
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) => String::new(),
        }
    }

    /// Captured diagnostics; empty for handlers that don't capture.
    pub fn get_errors(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_errors(),
            Self::Stdout(_) => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
