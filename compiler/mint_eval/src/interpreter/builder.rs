//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{stdout_handler, terminal_handler, SharedInputHandler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults to stdout/stderr output and terminal input; tests swap in a
/// buffer and a scripted source.
#[derive(Default)]
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the print handler for output.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the source for Input statements.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(terminal_handler),
        }
    }
}
