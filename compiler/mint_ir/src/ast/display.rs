//! S-expression rendering of the syntax tree, used by `mint parse`.
//!
//! Statements go one per line, indented two spaces per nesting level;
//! expressions stay on the line of their statement.
//!
//! ```text
//! (block
//!   (= x 10)
//!   (while (< i x)
//!     (print i)))
//! ```

use std::fmt;

use mint_stack::ensure_sufficient_stack;

use super::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    ensure_sufficient_stack(|| write_node_inner(f, node, depth))
}

fn write_node_inner(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    match node {
        Node::StatementList(stmts) => {
            write!(f, "(block")?;
            write_body(f, stmts, depth + 1)?;
            write!(f, ")")
        }
        Node::Assignment { name, value } => {
            write!(f, "(= {name} ")?;
            write_node(f, value, depth)?;
            write!(f, ")")
        }
        Node::Input { name } => write!(f, "(input {name})"),
        Node::StringLiteral(text) => write!(f, "{text:?}"),
        Node::Print(expr) => {
            write!(f, "(print ")?;
            write_node(f, expr, depth)?;
            write!(f, ")")
        }
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => {
            write!(f, "(if ")?;
            write_node(f, condition, depth)?;
            newline(f, depth + 1)?;
            write!(f, "(then")?;
            write_body(f, then_branch, depth + 2)?;
            write!(f, ")")?;
            newline(f, depth + 1)?;
            write!(f, "(else")?;
            write_body(f, else_branch, depth + 2)?;
            write!(f, "))")
        }
        Node::While { condition, body } => {
            write!(f, "(while ")?;
            write_node(f, condition, depth)?;
            write_body(f, body, depth + 1)?;
            write!(f, ")")
        }
        Node::Binary { op, left, right } => {
            write!(f, "({} ", op.as_symbol())?;
            write_node(f, left, depth)?;
            write!(f, " ")?;
            write_node(f, right, depth)?;
            write!(f, ")")
        }
        Node::NumberLiteral(value) => write!(f, "{value}"),
        Node::Variable(name) => write!(f, "{name}"),
    }
}

fn write_body(f: &mut fmt::Formatter<'_>, stmts: &[Node], depth: usize) -> fmt::Result {
    for stmt in stmts {
        newline(f, depth)?;
        write_node(f, stmt, depth)?;
    }
    Ok(())
}

fn newline(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    writeln!(f)?;
    write!(f, "{:width$}", "", width = depth * 2)
}
