//! Evaluation error types.
//!
//! Two tiers:
//! - [`EvalError`] is fatal. It propagates with `?` to
//!   [`Interpreter::execute`](crate::Interpreter::execute), which stops the
//!   whole run.
//! - [`InputError`] is never propagated. The Input node reports it and
//!   substitutes `0`.

use std::io;

/// Result of evaluating a node.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Fatal runtime fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
}

impl EvalError {
    /// Source symbol of the operator that faulted.
    pub const fn operator(self) -> &'static str {
        match self {
            EvalError::DivisionByZero => "/",
            EvalError::ModuloByZero => "%",
        }
    }
}

/// Why an Input node could not obtain an integer.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot open terminal: {0}")]
    Unavailable(#[source] io::Error),
    #[error("cannot read from terminal: {0}")]
    Read(#[source] io::Error),
    #[error("input closed before a line was read")]
    Closed,
    #[error("`{text}` is not an integer")]
    Malformed { text: String },
}
