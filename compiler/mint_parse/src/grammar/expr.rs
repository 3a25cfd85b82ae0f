//! Expression productions, lowest precedence first:
//! equality < comparison < additive < multiplicative < unary < primary.
//! All binary levels are left-associative.

use mint_ir::{BinaryOp, Node, TokenKind};
use mint_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Node, ParseError> {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_comparison()?;
        while self.cursor.eat(&TokenKind::EqEq) {
            let right = self.parse_comparison()?;
            left = Node::binary(BinaryOp::Eq, left, right);
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.cursor.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    /// Prefix `-`. A negated literal folds to a negative literal; anything
    /// else becomes `0 - operand`.
    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            if !self.cursor.eat(&TokenKind::Minus) {
                return self.parse_primary();
            }
            let operand = self.parse_unary()?;
            Ok(match operand {
                Node::NumberLiteral(n) => Node::NumberLiteral(n.wrapping_neg()),
                other => Node::binary(BinaryOp::Sub, Node::number(0), other),
            })
        })
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let token = self.cursor.current();
        let node = match &token.kind {
            TokenKind::Int(n) => Node::number(*n),
            TokenKind::String(text) => Node::string(text.clone()),
            TokenKind::Ident(name) => Node::var(name.clone()),
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen, "`)`")?;
                return Ok(inner);
            }
            other => {
                return Err(ParseError::ExpectedExpression {
                    found: other.describe(),
                    span: token.span,
                    context: None,
                })
            }
        };
        self.cursor.advance();
        Ok(node)
    }
}
