//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;

use super::{load, report};
use crate::{frontend, DriverError, SourceFile};

/// Lex a file and display the token stream.
pub fn lex_file(path: Option<&str>) -> u8 {
    let source = match load(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    match format_tokens(&source) {
        Ok(listing) => {
            print!("{listing}");
            0
        }
        Err(err) => report(&err, Some(&source)),
    }
}

/// Parse a file and display the program tree.
pub fn parse_file(path: Option<&str>) -> u8 {
    let source = match load(path) {
        Ok(source) => source,
        Err(code) => return code,
    };
    match format_ast(&source) {
        Ok(listing) => {
            print!("{listing}");
            0
        }
        Err(err) => report(&err, Some(&source)),
    }
}

/// One line per token: position, kind, span.
pub fn format_tokens(source: &SourceFile) -> Result<String, DriverError> {
    let tokens = mint_lexer::lex(&source.text)?;
    let mut out = String::new();
    let _ = writeln!(out, "Tokens for '{}' ({} tokens):", source.name, tokens.len());
    for token in &tokens {
        let pos = token.span.line_col(&source.text).to_string();
        let _ = writeln!(out, "  {pos:<7} {:?} @ {}", token.kind, token.span);
    }
    Ok(out)
}

/// Node count followed by the tree as an S-expression.
pub fn format_ast(source: &SourceFile) -> Result<String, DriverError> {
    let program = frontend(source)?;
    let mut out = String::new();
    let _ = writeln!(out, "Parse result for '{}':", source.name);
    let _ = writeln!(out, "  Nodes: {}", program.node_count());
    let _ = writeln!(out, "{program}");
    Ok(out)
}
