//! Syntax tree for Mint programs.
//!
//! The parser produces a single root [`Node::StatementList`]; the evaluator
//! walks it depth-first. Children are owned (`Box`/`Vec`), fixed at
//! construction, and freed when their parent is dropped.

mod display;
mod operators;

pub use operators::BinaryOp;

/// A node in the syntax tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// Statements evaluated in order.
    StatementList(Vec<Node>),
    /// `name = value;`
    Assignment { name: String, value: Box<Node> },
    /// `input name;` reads an integer from the terminal into `name`.
    Input { name: String },
    /// `"text"`
    StringLiteral(String),
    /// `print(expr);`
    Print(Box<Node>),
    /// `if (condition) { .. } else { .. }`
    If {
        condition: Box<Node>,
        then_branch: Vec<Node>,
        else_branch: Vec<Node>,
    },
    /// `while (condition) { .. }`
    While { condition: Box<Node>, body: Vec<Node> },
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `42`
    NumberLiteral(i64),
    /// `name` used as an expression.
    Variable(String),
}

impl Node {
    pub fn assign(name: impl Into<String>, value: Node) -> Self {
        Node::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn input(name: impl Into<String>) -> Self {
        Node::Input { name: name.into() }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Node::StringLiteral(text.into())
    }

    pub fn print(expr: Node) -> Self {
        Node::Print(Box::new(expr))
    }

    pub fn if_else(condition: Node, then_branch: Vec<Node>, else_branch: Vec<Node>) -> Self {
        Node::If {
            condition: Box::new(condition),
            then_branch,
            else_branch,
        }
    }

    pub fn while_loop(condition: Node, body: Vec<Node>) -> Self {
        Node::While {
            condition: Box::new(condition),
            body,
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn number(value: i64) -> Self {
        Node::NumberLiteral(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    /// Variant name as shown in trace events.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Node::StatementList(_) => "StatementList",
            Node::Assignment { .. } => "Assignment",
            Node::Input { .. } => "Input",
            Node::StringLiteral(_) => "StringLiteral",
            Node::Print(_) => "Print",
            Node::If { .. } => "If",
            Node::While { .. } => "While",
            Node::Binary { .. } => "BinaryOp",
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::Variable(_) => "VariableReference",
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    ///
    /// Iterative, so arbitrarily deep trees are fine.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            node.push_children(&mut pending);
        }
        count
    }

    /// Direct children, in evaluation order.
    fn push_children<'a>(&'a self, out: &mut Vec<&'a Node>) {
        match self {
            Node::StatementList(stmts) => out.extend(stmts),
            Node::Assignment { value, .. } => out.push(value),
            Node::Print(expr) => out.push(expr),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(condition);
                out.extend(then_branch);
                out.extend(else_branch);
            }
            Node::While { condition, body } => {
                out.push(condition);
                out.extend(body);
            }
            Node::Binary { left, right, .. } => {
                out.push(left);
                out.push(right);
            }
            Node::Input { .. }
            | Node::StringLiteral(_)
            | Node::NumberLiteral(_)
            | Node::Variable(_) => {}
        }
    }

    /// Move all children out into `out`, leaving `self` childless.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::StatementList(stmts) => out.append(stmts),
            Node::Assignment { value: child, .. } | Node::Print(child) => {
                out.push(take_boxed(child));
            }
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(take_boxed(condition));
                out.append(then_branch);
                out.append(else_branch);
            }
            Node::While { condition, body } => {
                out.push(take_boxed(condition));
                out.append(body);
            }
            Node::Binary { left, right, .. } => {
                out.push(take_boxed(left));
                out.push(take_boxed(right));
            }
            Node::Input { .. }
            | Node::StringLiteral(_)
            | Node::NumberLiteral(_)
            | Node::Variable(_) => {}
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Input { .. } | Node::StringLiteral(_) | Node::NumberLiteral(_) | Node::Variable(_)
        )
    }
}

fn take_boxed(slot: &mut Box<Node>) -> Node {
    std::mem::replace(&mut **slot, Node::NumberLiteral(0))
}

/// Drops subtrees from a heap worklist instead of recursing, so a
/// million-term expression does not exhaust the native stack.
impl Drop for Node {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}
