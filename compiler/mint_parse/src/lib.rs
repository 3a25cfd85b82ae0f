//! Recursive descent parser for Mint.
//!
//! Turns a [`TokenList`] into a single root [`Node::StatementList`]. All
//! syntactic validation happens here; the evaluator trusts the tree it is
//! given.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError};

use mint_ir::{Node, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse a whole program: statements up to end of input.
    pub fn parse_program(mut self) -> Result<Node, ParseError> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            stmts.push(self.parse_statement()?);
        }
        tracing::debug!(statements = stmts.len(), "parsed program");
        Ok(Node::StatementList(stmts))
    }
}

/// Parse `tokens` into the program's root node.
pub fn parse(tokens: &TokenList) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
