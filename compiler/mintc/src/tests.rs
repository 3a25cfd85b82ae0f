use pretty_assertions::assert_eq;

use super::*;
use crate::commands::{format_ast, format_tokens, run_source};
use mint_eval::{buffer_handler, lines_handler, ExitStatus, Interpreter};

fn buffered() -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .input_handler(lines_handler(Vec::<String>::new()))
        .build()
}

#[test]
fn run_source_executes_program() {
    let interpreter = buffered();
    let source = SourceFile::new("t.mint", "x = 4; print(x * x);");
    let status = run_source(&source, &interpreter).unwrap();
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(interpreter.get_print_output(), "16\n");
}

#[test]
fn run_source_reports_runtime_failure() {
    let interpreter = buffered();
    let source = SourceFile::new("t.mint", "x = 10; y = 0; print(x / y);");
    let status = run_source(&source, &interpreter).unwrap();
    assert_eq!(status.code(), 70);
    assert_eq!(interpreter.get_print_output(), "");
}

#[test]
fn parse_error_runs_nothing() {
    let interpreter = buffered();
    let source = SourceFile::new("t.mint", "print(1);\nx = 1");
    let err = run_source(&source, &interpreter).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_DATA);
    assert_eq!(interpreter.get_print_output(), "");
    assert_eq!(
        err.render(Some(&source)),
        "t.mint:2:6: error: expected `;`, found end of file while parsing an assignment"
    );
}

#[test]
fn lex_error_renders_position() {
    let source = SourceFile::new("t.mint", "x = 1 & 2;");
    let err = frontend(&source).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_DATA);
    assert_eq!(
        err.render(Some(&source)),
        "t.mint:1:7: error: unexpected character `&`"
    );
}

#[test]
fn missing_file_is_a_usage_error() {
    let err = SourceFile::load(Some("/nonexistent/program.mint")).unwrap_err();
    assert_eq!(err.exit_code(), EXIT_USAGE);
    assert!(err
        .render(None)
        .starts_with("error: cannot read `/nonexistent/program.mint`: "));
}

#[test]
fn source_from_reader() {
    let source = SourceFile::from_reader("<stdin>", "print(1);".as_bytes()).unwrap();
    assert_eq!(source, SourceFile::new("<stdin>", "print(1);"));
}

#[test]
fn token_listing() {
    let source = SourceFile::new("t.mint", "x = 1;");
    assert_eq!(
        format_tokens(&source).unwrap(),
        "Tokens for 't.mint' (5 tokens):\n\
         \x20 1:1     Ident(\"x\") @ 0..1\n\
         \x20 1:3     Assign @ 2..3\n\
         \x20 1:5     Int(1) @ 4..5\n\
         \x20 1:6     Semicolon @ 5..6\n\
         \x20 1:7     Eof @ 6..6\n"
    );
}

#[test]
fn ast_listing() {
    let source = SourceFile::new("t.mint", "print(2 + 3);");
    assert_eq!(
        format_ast(&source).unwrap(),
        "Parse result for 't.mint':\n  Nodes: 5\n(block\n  (print (+ 2 3)))\n"
    );
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
