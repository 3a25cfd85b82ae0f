//! Statement productions.

use mint_ir::{Node, TokenKind};
use mint_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Ident(_) => self
                .parse_assignment()
                .map_err(|e| e.in_context(ErrorContext::Assignment)),
            TokenKind::Input => self
                .parse_input()
                .map_err(|e| e.in_context(ErrorContext::InputStatement)),
            TokenKind::Print => self
                .parse_print()
                .map_err(|e| e.in_context(ErrorContext::PrintStatement)),
            TokenKind::If => self
                .parse_if()
                .map_err(|e| e.in_context(ErrorContext::IfStatement)),
            TokenKind::While => self
                .parse_while()
                .map_err(|e| e.in_context(ErrorContext::WhileLoop)),
            other => Err(ParseError::ExpectedStatement {
                found: other.describe(),
                span: self.cursor.current_span(),
            }),
        })
    }

    /// `name = expr ;`
    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::Assign, "`=`")?;
        let value = self.parse_expr()?;
        self.cursor.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(Node::assign(name, value))
    }

    /// `input name ;`
    fn parse_input(&mut self) -> Result<Node, ParseError> {
        self.cursor.advance();
        let name = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(Node::input(name))
    }

    /// `print ( expr ) ;`
    fn parse_print(&mut self) -> Result<Node, ParseError> {
        self.cursor.advance();
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let expr = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        self.cursor.expect(&TokenKind::Semicolon, "`;`")?;
        Ok(Node::print(expr))
    }

    /// `if ( cond ) block` with an optional `else block` or `else if ...`.
    fn parse_if(&mut self) -> Result<Node, ParseError> {
        self.cursor.advance();
        let condition = self.parse_condition()?;
        let then_branch = self.parse_block()?;
        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            if self.cursor.check(&TokenKind::If) {
                vec![ensure_sufficient_stack(|| self.parse_if())?]
            } else {
                self.parse_block()?
            }
        } else {
            Vec::new()
        };
        Ok(Node::if_else(condition, then_branch, else_branch))
    }

    /// `while ( cond ) block`
    fn parse_while(&mut self) -> Result<Node, ParseError> {
        self.cursor.advance();
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;
        Ok(Node::while_loop(condition, body))
    }

    /// Parenthesized condition of `if` / `while`.
    fn parse_condition(&mut self) -> Result<Node, ParseError> {
        self.cursor.expect(&TokenKind::LParen, "`(`")?;
        let condition = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen, "`)`")?;
        Ok(condition)
    }

    /// `{ stmt* }`
    fn parse_block(&mut self) -> Result<Vec<Node>, ParseError> {
        self.cursor.expect(&TokenKind::LBrace, "`{`")?;
        let mut stmts = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            stmts.push(self.parse_statement()?);
        }
        self.cursor
            .expect(&TokenKind::RBrace, "`}`")
            .map_err(|e| e.in_context(ErrorContext::Block))?;
        Ok(stmts)
    }
}
