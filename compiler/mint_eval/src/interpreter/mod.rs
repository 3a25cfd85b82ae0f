//! Tree-walking interpreter.
//!
//! [`Interpreter::evaluate`] is the per-node recursion; every node yields a
//! [`Value`] or a fatal [`EvalError`]. [`Interpreter::execute`] is the
//! top-level entry that owns the symbol mapping for one run and turns a
//! fatal error into an [`ExitStatus`].

mod builder;

pub use builder::InterpreterBuilder;

use mint_ir::Node;
use mint_stack::ensure_sufficient_stack;

use crate::errors::InputError;
use crate::input_handler::read_integer;
use crate::operators::evaluate_binary;
use crate::{exec, EvalError, EvalResult, SharedInputHandler, SharedPrintHandler, Symbols, Value};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every statement ran.
    Success,
    /// A fatal runtime error stopped the run.
    RuntimeFailure,
}

impl ExitStatus {
    /// Process exit code: `0` or `70` (internal software error).
    pub const fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::RuntimeFailure => 70,
        }
    }
}

/// Evaluates program trees against a print sink and an input source.
///
/// The interpreter holds no program state itself; the symbol mapping is
/// created per run and passed down explicitly.
pub struct Interpreter {
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
}

impl Interpreter {
    /// Interpreter writing to stdout/stderr and reading the terminal.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run `root` once against a fresh symbol mapping.
    ///
    /// A fatal error stops the run: no further statements execute, the
    /// error is reported on the diagnostic channel and the status is
    /// [`ExitStatus::RuntimeFailure`].
    pub fn execute(&self, root: &Node) -> ExitStatus {
        match self.run(root) {
            Ok(symbols) => {
                tracing::debug!(bindings = symbols.len(), "program finished");
                ExitStatus::Success
            }
            Err(err) => {
                tracing::error!(operator = err.operator(), "runtime error: {err}");
                self.print_handler.eprintln(&format!("runtime error: {err}"));
                ExitStatus::RuntimeFailure
            }
        }
    }

    /// Run `root` once and hand back the final bindings.
    pub fn run(&self, root: &Node) -> Result<Symbols, EvalError> {
        let mut symbols = Symbols::new();
        self.evaluate(root, &mut symbols)?;
        Ok(symbols)
    }

    /// Evaluate one node.
    ///
    /// Expressions yield their value, Assignment and Input yield the value
    /// they stored, and the remaining statements yield [`Value::UNIT`].
    pub fn evaluate(&self, node: &Node, symbols: &mut Symbols) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(node, symbols))
    }

    fn evaluate_inner(&self, node: &Node, symbols: &mut Symbols) -> EvalResult {
        tracing::trace!(kind = node.kind_name(), "evaluate");
        match node {
            Node::StatementList(statements) => {
                exec::eval_block(statements, |n| self.evaluate(n, symbols))
            }
            Node::Assignment { name, value } => {
                let value = self.evaluate(value, symbols)?;
                tracing::trace!(name = name.as_str(), %value, "assign");
                symbols.assign(name, value.clone());
                Ok(value)
            }
            Node::Input { name } => {
                let value = self.read_input(name);
                symbols.assign(name, Value::Int(value));
                Ok(Value::Int(value))
            }
            Node::StringLiteral(text) => Ok(Value::string(text.as_str())),
            Node::Print(expr) => {
                let value = self.evaluate(expr, symbols)?;
                self.print_handler.println(&value.to_string());
                Ok(Value::UNIT)
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => exec::eval_if(condition, then_branch, else_branch, |n| {
                self.evaluate(n, symbols)
            }),
            Node::While { condition, body } => {
                let iterations = exec::eval_while(condition, body, |n| self.evaluate(n, symbols))?;
                tracing::trace!(iterations, "loop finished");
                Ok(Value::UNIT)
            }
            Node::Binary { op, left, right } => {
                let left = self.evaluate(left, symbols)?.as_int();
                let right = self.evaluate(right, symbols)?.as_int();
                evaluate_binary(*op, left, right).map(Value::Int)
            }
            Node::NumberLiteral(n) => Ok(Value::Int(*n)),
            Node::Variable(name) => Ok(symbols.lookup(name)),
        }
    }

    /// Obtain an integer for an Input statement.
    ///
    /// Never fails: any problem is reported and the value becomes `0`. The
    /// prompt is only shown once the input source is open, and the source is
    /// dropped before returning.
    fn read_input(&self, name: &str) -> i64 {
        let result = self.input_handler.open().and_then(|mut reader| {
            self.print_handler.print(&format!("Input for {name}: "));
            read_integer(&mut reader)
        });
        match result {
            Ok(value) => {
                tracing::debug!(name, value, "input");
                value
            }
            Err(err) => {
                let message = input_diagnostic(name, &err);
                tracing::warn!(name, error = %err, "input failed, using 0");
                self.print_handler.eprintln(&message);
                0
            }
        }
    }

    /// Everything the print handler captured (empty unless buffered).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Everything the diagnostic channel captured (empty unless buffered).
    pub fn get_error_output(&self) -> String {
        self.print_handler.get_errors()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn input_diagnostic(name: &str, err: &InputError) -> String {
    match err {
        InputError::Unavailable(io) => {
            format!("warning: cannot open terminal for input of {name}: {io}")
        }
        InputError::Read(_) | InputError::Closed | InputError::Malformed { .. } => {
            format!("warning: invalid integer input for {name}: {err}")
        }
    }
}
