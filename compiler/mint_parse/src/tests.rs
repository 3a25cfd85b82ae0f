use super::*;
use mint_ir::{BinaryOp, Span};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> Result<Node, ParseError> {
    let tokens = mint_lexer::lex(source).unwrap();
    parse(&tokens)
}

fn program(source: &str) -> Vec<Node> {
    match &mut parse_source(source).unwrap() {
        Node::StatementList(stmts) => std::mem::take(stmts),
        other => panic!("root is not a statement list: {other:?}"),
    }
}

fn single(source: &str) -> Node {
    let mut stmts = program(source);
    assert_eq!(stmts.len(), 1, "expected one statement in {source:?}");
    stmts.remove(0)
}

#[test]
fn empty_program() {
    assert_eq!(parse_source("").unwrap(), Node::StatementList(vec![]));
}

#[test]
fn assignment() {
    assert_eq!(single("x = 10;"), Node::assign("x", Node::number(10)));
}

#[test]
fn input_statement() {
    assert_eq!(single("input age;"), Node::input("age"));
}

#[test]
fn print_string_and_expression() {
    assert_eq!(
        program(r#"print("hello"); print(2 + 3);"#),
        vec![
            Node::print(Node::string("hello")),
            Node::print(Node::binary(BinaryOp::Add, Node::number(2), Node::number(3))),
        ]
    );
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert_eq!(
        single("x = 1 + 2 * 3;"),
        Node::assign(
            "x",
            Node::binary(
                BinaryOp::Add,
                Node::number(1),
                Node::binary(BinaryOp::Mul, Node::number(2), Node::number(3)),
            ),
        )
    );
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(
        single("x = 10 - 4 - 3;"),
        Node::assign(
            "x",
            Node::binary(
                BinaryOp::Sub,
                Node::binary(BinaryOp::Sub, Node::number(10), Node::number(4)),
                Node::number(3),
            ),
        )
    );
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_eq!(
        single("x = a + 1 < b % 2 == 1;"),
        Node::assign(
            "x",
            Node::binary(
                BinaryOp::Eq,
                Node::binary(
                    BinaryOp::Lt,
                    Node::binary(BinaryOp::Add, Node::var("a"), Node::number(1)),
                    Node::binary(BinaryOp::Mod, Node::var("b"), Node::number(2)),
                ),
                Node::number(1),
            ),
        )
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        single("x = (1 + 2) * 3;"),
        Node::assign(
            "x",
            Node::binary(
                BinaryOp::Mul,
                Node::binary(BinaryOp::Add, Node::number(1), Node::number(2)),
                Node::number(3),
            ),
        )
    );
}

#[test]
fn negative_literal_folds() {
    assert_eq!(single("x = -5;"), Node::assign("x", Node::number(-5)));
}

#[test]
fn most_negative_literal_folds() {
    assert_eq!(
        single("x = -9223372036854775808;"),
        Node::assign("x", Node::number(i64::MIN))
    );
}

#[test]
fn negated_expression_subtracts_from_zero() {
    assert_eq!(
        single("x = -y;"),
        Node::assign(
            "x",
            Node::binary(BinaryOp::Sub, Node::number(0), Node::var("y")),
        )
    );
}

#[test]
fn if_without_else_has_empty_else_branch() {
    assert_eq!(
        single("if (x > 1) { print(x); }"),
        Node::if_else(
            Node::binary(BinaryOp::Gt, Node::var("x"), Node::number(1)),
            vec![Node::print(Node::var("x"))],
            vec![],
        )
    );
}

#[test]
fn if_else() {
    assert_eq!(
        single(r#"if (0) { print("a"); } else { print("b"); }"#),
        Node::if_else(
            Node::number(0),
            vec![Node::print(Node::string("a"))],
            vec![Node::print(Node::string("b"))],
        )
    );
}

#[test]
fn else_if_nests_in_else_branch() {
    assert_eq!(
        single("if (a) { x = 1; } else if (b) { x = 2; } else { x = 3; }"),
        Node::if_else(
            Node::var("a"),
            vec![Node::assign("x", Node::number(1))],
            vec![Node::if_else(
                Node::var("b"),
                vec![Node::assign("x", Node::number(2))],
                vec![Node::assign("x", Node::number(3))],
            )],
        )
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        single("while (i < 3) { i = i + 1; }"),
        Node::while_loop(
            Node::binary(BinaryOp::Lt, Node::var("i"), Node::number(3)),
            vec![Node::assign(
                "i",
                Node::binary(BinaryOp::Add, Node::var("i"), Node::number(1)),
            )],
        )
    );
}

#[test]
fn empty_blocks() {
    assert_eq!(
        single("while (0) { }"),
        Node::while_loop(Node::number(0), vec![])
    );
}

#[test]
fn missing_semicolon_reports_context() {
    let err = parse_source("x = 1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected `;`, found end of file while parsing an assignment"
    );
    assert_eq!(err.span(), Span::new(5, 5));
}

#[test]
fn missing_expression_in_print() {
    let err = parse_source("print();").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected an expression, found `)` while parsing a print statement"
    );
}

#[test]
fn innermost_context_wins() {
    let err = parse_source("while (1) { input 5; }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected an identifier, found integer `5` while parsing an input statement"
    );
}

#[test]
fn unclosed_block() {
    let err = parse_source("if (1) { x = 1;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected `}`, found end of file while parsing a block"
    );
}

#[test]
fn stray_token_is_not_a_statement() {
    let err = parse_source("x = 1; ;").unwrap_err();
    assert_eq!(
        err,
        ParseError::ExpectedStatement {
            found: "`;`".to_string(),
            span: Span::new(7, 8),
        }
    );
}

#[test]
fn bare_expression_statement_rejected() {
    let err = parse_source("x;").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { expected: "`=`", .. }));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(single(&source), Node::assign("x", Node::number(1)));
}
