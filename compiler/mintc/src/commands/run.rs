//! The `run` command: parse and evaluate a Mint program.

use mint_eval::{ExitStatus, Interpreter};

use super::{load, report};
use crate::{frontend, DriverError, SourceFile};

/// Run a Mint program from `path` (stdin when `None` or `-`).
///
/// Nothing is evaluated unless the whole program parses.
pub fn run_file(path: Option<&str>) -> u8 {
    let source = match load(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    match run_source(&source, &Interpreter::new()) {
        Ok(status) => status.code(),
        Err(err) => report(&err, Some(&source)),
    }
}

/// Parse `source` and execute it on `interpreter`.
pub fn run_source(source: &SourceFile, interpreter: &Interpreter) -> Result<ExitStatus, DriverError> {
    let program = frontend(source)?;
    let status = interpreter.execute(&program);
    tracing::debug!(file = %source.name, ?status, "run finished");
    Ok(status)
}
