//! Raw token → `TokenKind` conversion.

use mint_ir::{Span, TokenKind};

use crate::escape::unescape_string;
use crate::raw_token::RawToken;
use crate::LexError;

/// Decode one raw token. Comments yield `None`.
///
/// `after_minus` is set when the previous token was `-`.
pub(crate) fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    after_minus: bool,
) -> Result<Option<TokenKind>, LexError> {
    let kind = match raw {
        RawToken::Int => {
            let value =
                parse_int(slice, after_minus).ok_or_else(|| LexError::IntegerOutOfRange {
                    text: slice.to_string(),
                    span,
                })?;
            TokenKind::Int(value)
        }
        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            TokenKind::String(unescape_string(body))
        }
        RawToken::UnterminatedString => return Err(LexError::UnterminatedString { span }),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::Print => TokenKind::Print,
        RawToken::Input => TokenKind::Input,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,

        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,

        RawToken::LineComment => return Ok(None),
    };
    Ok(Some(kind))
}

/// Decimal literal as `i64`.
///
/// `9223372036854775808` only fits directly after `-`, where it lexes as
/// `i64::MIN`. Negation and subtraction wrap, so `-9223372036854775808` and
/// `x - 9223372036854775808` both come out exact.
fn parse_int(text: &str, after_minus: bool) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if after_minus && text.parse::<u64>().ok() == Some(i64::MIN.unsigned_abs()) => {
            Some(i64::MIN)
        }
        Err(_) => None,
    }
}
