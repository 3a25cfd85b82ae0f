//! Token cursor for navigating the token stream.

use mint_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Returned once the cursor runs past the end of a list that lacks `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Position in a token list, with lookahead and consumption helpers.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    pub fn current(&self) -> &'a Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same kind as `kind`, ignoring payload.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail naming `expected`.
    pub fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume an identifier, returning its text.
    pub fn expect_ident(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name.clone())
        } else {
            Err(self.unexpected("an identifier"))
        }
    }

    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            expected,
            found: token.kind.describe(),
            span: token.span,
            context: None,
        }
    }
}
