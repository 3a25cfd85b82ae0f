//! Mint driver library.
//!
//! Everything the `mint` binary does short of argument parsing: reading
//! source, running the lex → parse → evaluate pipeline, rendering errors and
//! choosing exit codes.

pub mod commands;
mod source;

pub use source::{DriverError, SourceFile};

use std::sync::Once;

use mint_ir::Node;

/// Exit code for bad usage or unreadable source.
pub const EXIT_USAGE: u8 = 1;
/// Exit code for source that does not lex or parse.
pub const EXIT_DATA: u8 = 65;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call once at startup. Controlled by the `RUST_LOG` environment variable;
/// nothing is installed when it is unset. Output goes to stderr so it never
/// mixes with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Lex and parse `source` into a program tree.
pub fn frontend(source: &SourceFile) -> Result<Node, DriverError> {
    let tokens = mint_lexer::lex(&source.text)?;
    tracing::debug!(file = %source.name, tokens = tokens.len(), "lexed");
    let program = mint_parse::parse(&tokens)?;
    tracing::debug!(file = %source.name, nodes = program.node_count(), "parsed");
    Ok(program)
}

#[cfg(test)]
mod tests;
