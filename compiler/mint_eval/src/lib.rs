#![deny(clippy::arithmetic_side_effects)]
//! Mint Eval - tree-walking evaluator for Mint programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Value`: tagged runtime values (integers and text)
//! - `Symbols`: one flat name-to-value table per run, passed by `&mut`
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `PrintHandler` / `InputHandler`: swappable I/O so tests can capture
//!   output and script input
//!
//! Division or modulo by zero is the only fatal condition; everything else
//! (unbound reads, failed input) degrades to `0`.

pub mod errors;
pub mod exec;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod symbols;
mod value;

pub use errors::{EvalError, EvalResult, InputError};
pub use input_handler::{
    lines_handler, read_integer, scripted_handler, terminal_handler, InputHandlerImpl,
    ScriptedInput, ScriptedInputHandler, SharedInputHandler, TerminalInputHandler,
};
pub use interpreter::{ExitStatus, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use symbols::Symbols;
pub use value::Value;

#[cfg(test)]
mod tests;
