//! Token types produced by the lexer.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Mint.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal: `42`
    Int(i64),
    /// String literal with escapes resolved: `"hello"`
    String(String),
    /// Identifier: `count`
    Ident(String),

    // Keywords
    Print,
    Input,
    If,
    Else,
    While,

    // Operators
    /// `=`
    Assign,
    /// `==`
    EqEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    Gt,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,

    Eof,
}

impl TokenKind {
    /// Short human-readable description used in parse errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::String(s) => format!("string {s:?}"),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Eof => "end of file".to_string(),
            other => format!("`{other}`"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "{n}"),
            TokenKind::String(s) => write!(f, "{s:?}"),
            TokenKind::Ident(name) => write!(f, "{name}"),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Input => write!(f, "input"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::While => write!(f, "while"),
            TokenKind::Assign => write!(f, "="),
            TokenKind::EqEq => write!(f, "=="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Percent => write!(f, "%"),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Eof => write!(f, "<eof>"),
        }
    }
}

/// Lexer output: every token in source order, terminated by `Eof`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The last token; `Eof` for any list built by the lexer.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
