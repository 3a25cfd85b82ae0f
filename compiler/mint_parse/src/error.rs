//! Parse error types.

use mint_ir::Span;

/// What the parser was in the middle of when it failed.
///
/// Rendered as a "while parsing ..." suffix so errors deep inside a block
/// still say which construct they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Assignment,
    InputStatement,
    PrintStatement,
    IfStatement,
    WhileLoop,
    Block,
}

impl ErrorContext {
    pub const fn description(self) -> &'static str {
        match self {
            ErrorContext::Assignment => "an assignment",
            ErrorContext::InputStatement => "an input statement",
            ErrorContext::PrintStatement => "a print statement",
            ErrorContext::IfStatement => "an if statement",
            ErrorContext::WhileLoop => "a while loop",
            ErrorContext::Block => "a block",
        }
    }
}

/// Syntax error with the offending token's span.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}{}", context_suffix(.context))]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
        context: Option<ErrorContext>,
    },
    #[error("expected a statement, found {found}")]
    ExpectedStatement { found: String, span: Span },
    #[error("expected an expression, found {found}{}", context_suffix(.context))]
    ExpectedExpression {
        found: String,
        span: Span,
        context: Option<ErrorContext>,
    },
}

fn context_suffix(context: &Option<ErrorContext>) -> String {
    context.map_or_else(String::new, |ctx| {
        format!(" while parsing {}", ctx.description())
    })
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedStatement { span, .. }
            | ParseError::ExpectedExpression { span, .. } => *span,
        }
    }

    /// Attach `context` unless a more specific one is already set.
    #[must_use]
    pub fn in_context(mut self, ctx: ErrorContext) -> Self {
        match &mut self {
            ParseError::UnexpectedToken { context, .. }
            | ParseError::ExpectedExpression { context, .. } => {
                if context.is_none() {
                    *context = Some(ctx);
                }
            }
            ParseError::ExpectedStatement { .. } => {}
        }
        self
    }
}
