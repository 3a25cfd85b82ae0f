//! Raw Token Definition
//!
//! The logos-derived tokenizer output before literal decoding.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("print")]
    Print,
    #[token("input")]
    Input,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,

    #[token("==")]
    EqEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,

    /// Digits only; the value is decoded (and range-checked) in `convert`.
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    /// Opening quote with no closing quote on the same line.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}
