//! Lexer for Mint using logos.
//!
//! [`lex`] turns source text into a [`TokenList`] terminated by
//! `TokenKind::Eof`. Lexing stops at the first invalid token.

mod convert;
mod escape;
mod raw_token;

use logos::Logos;
use mint_ir::{Span, Token, TokenKind, TokenList};

use raw_token::RawToken;

/// Lexical error with the offending source range.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{text}`")]
    UnexpectedCharacter { text: String, span: Span },
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOutOfRange { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::IntegerOutOfRange { span, .. } => *span,
        }
    }
}

/// Tokenize `source`.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        let Ok(raw) = result else {
            return Err(LexError::UnexpectedCharacter {
                text: slice.to_string(),
                span,
            });
        };
        let after_minus = tokens.last().is_some_and(|t| t.kind == TokenKind::Minus);
        if let Some(kind) = convert::convert_token(raw, slice, span, after_minus)? {
            tokens.push(Token::new(kind, span));
        }
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, end));
    Ok(tokens)
}
