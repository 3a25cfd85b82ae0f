//! Mint IR - syntax types shared by the lexer, parser and evaluator.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Token`], [`TokenKind`], [`TokenList`]: lexer output
//! - [`Node`], [`BinaryOp`]: the syntax tree handed from parser to evaluator
//!
//! The tree is an ownership tree: every node owns its children through
//! `Box`/`Vec`, so dropping the root frees the whole program.

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Node};
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind, TokenList};
