//! Command handlers for the Mint CLI.
//!
//! Each handler loads its source, does its work and returns the process
//! exit code. Errors are rendered to stderr here, not by the caller.

mod debug;
mod run;

pub use debug::{format_ast, format_tokens, lex_file, parse_file};
pub use run::{run_file, run_source};

use crate::{DriverError, SourceFile};

/// Load a source file, reporting failure to stderr.
fn load(path: Option<&str>) -> Result<SourceFile, u8> {
    SourceFile::load(path).map_err(|err| report(&err, None))
}

/// Print `err` to stderr and return its exit code.
fn report(err: &DriverError, source: Option<&SourceFile>) -> u8 {
    tracing::debug!(code = err.exit_code(), "driver error: {err}");
    eprintln!("{}", err.render(source));
    err.exit_code()
}
