//! Sources for `input` statements.
//!
//! Input bypasses stdin, so a program piped in on stdin still reads its
//! numbers from the keyboard.
//! - Terminal: opens the controlling terminal for each read (default)
//! - Scripted: a queue of canned responses, for tests and embedding
//!
//! Each `open` produces a reader that lives for one Input evaluation only.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use parking_lot::Mutex;

use crate::errors::InputError;

#[cfg(windows)]
const TERMINAL_PATH: &str = "CONIN$";
#[cfg(not(windows))]
const TERMINAL_PATH: &str = "/dev/tty";

/// Reads from the controlling terminal device.
pub struct TerminalInputHandler {
    path: PathBuf,
}

impl TerminalInputHandler {
    pub fn new() -> Self {
        Self::with_path(TERMINAL_PATH)
    }

    /// Read from `path` instead of the platform terminal device.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        TerminalInputHandler { path: path.into() }
    }

    fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        let file = File::open(&self.path).map_err(InputError::Unavailable)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

impl Default for TerminalInputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// One canned response for a scripted Input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptedInput {
    /// The line the user "typed".
    Line(String),
    /// The terminal cannot be opened for this read.
    Unavailable,
}

/// Answers Input statements from a queue, in order.
///
/// Once the queue is empty every read sees end of input.
pub struct ScriptedInputHandler {
    responses: Mutex<VecDeque<ScriptedInput>>,
}

impl ScriptedInputHandler {
    pub fn new(responses: impl IntoIterator<Item = ScriptedInput>) -> Self {
        ScriptedInputHandler {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self.responses.lock().pop_front() {
            Some(ScriptedInput::Line(line)) => Ok(Box::new(io::Cursor::new(line.into_bytes()))),
            Some(ScriptedInput::Unavailable) => Err(InputError::Unavailable(io::Error::new(
                io::ErrorKind::NotFound,
                "no terminal attached",
            ))),
            None => Ok(Box::new(io::empty())),
        }
    }
}

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    /// Controlling terminal (default).
    Terminal(TerminalInputHandler),
    /// Canned responses.
    Scripted(ScriptedInputHandler),
}

impl InputHandlerImpl {
    /// Open a reader for a single Input evaluation.
    ///
    /// The reader (and any device handle behind it) is dropped by the
    /// caller when that evaluation ends.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            Self::Terminal(h) => h.open(),
            Self::Scripted(h) => h.open(),
        }
    }
}

/// Read one line from `reader` and parse its first whitespace-separated
/// word as an integer. The rest of the line is ignored.
pub fn read_integer(reader: &mut dyn BufRead) -> Result<i64, InputError> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(InputError::Read)?;
    if read == 0 {
        return Err(InputError::Closed);
    }
    let word = line.split_whitespace().next().unwrap_or("");
    word.parse::<i64>().map_err(|_| InputError::Malformed {
        text: word.to_string(),
    })
}

/// Shared input handler that can be passed around.
pub type SharedInputHandler = std::sync::Arc<InputHandlerImpl>;

/// Create the default terminal input handler.
pub fn terminal_handler() -> SharedInputHandler {
    std::sync::Arc::new(InputHandlerImpl::Terminal(TerminalInputHandler::new()))
}

/// Create a handler that answers from `responses` in order.
pub fn scripted_handler(responses: impl IntoIterator<Item = ScriptedInput>) -> SharedInputHandler {
    std::sync::Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(
        responses,
    )))
}

/// Create a scripted handler from plain lines.
pub fn lines_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    scripted_handler(lines.into_iter().map(|l| ScriptedInput::Line(l.into())))
}

#[cfg(test)]
mod tests;
