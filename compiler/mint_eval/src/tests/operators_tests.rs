//! Tests for binary operator implementations.

use crate::operators::evaluate_binary;
use crate::EvalError;
use mint_ir::BinaryOp;

#[test]
fn test_int_operations() {
    assert_eq!(evaluate_binary(BinaryOp::Add, 2, 3), Ok(5));
    assert_eq!(evaluate_binary(BinaryOp::Sub, 5, 3), Ok(2));
    assert_eq!(evaluate_binary(BinaryOp::Mul, 2, 3), Ok(6));
    assert_eq!(evaluate_binary(BinaryOp::Div, 7, 2), Ok(3));
    assert_eq!(evaluate_binary(BinaryOp::Mod, 7, 2), Ok(1));
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(evaluate_binary(BinaryOp::Div, -7, 2), Ok(-3));
    assert_eq!(evaluate_binary(BinaryOp::Div, 7, -2), Ok(-3));
    assert_eq!(evaluate_binary(BinaryOp::Div, -7, -2), Ok(3));
}

#[test]
fn test_remainder_takes_sign_of_dividend() {
    assert_eq!(evaluate_binary(BinaryOp::Mod, -7, 2), Ok(-1));
    assert_eq!(evaluate_binary(BinaryOp::Mod, 7, -2), Ok(1));
    assert_eq!(evaluate_binary(BinaryOp::Mod, -7, -2), Ok(-1));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        evaluate_binary(BinaryOp::Div, 1, 0),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary(BinaryOp::Mod, 1, 0),
        Err(EvalError::ModuloByZero)
    );
    assert_eq!(evaluate_binary(BinaryOp::Div, 0, 0), Err(EvalError::DivisionByZero));
}

#[test]
fn test_overflow_wraps() {
    assert_eq!(evaluate_binary(BinaryOp::Add, i64::MAX, 1), Ok(i64::MIN));
    assert_eq!(evaluate_binary(BinaryOp::Sub, i64::MIN, 1), Ok(i64::MAX));
    assert_eq!(evaluate_binary(BinaryOp::Mul, i64::MAX, 2), Ok(-2));
    assert_eq!(evaluate_binary(BinaryOp::Div, i64::MIN, -1), Ok(i64::MIN));
    assert_eq!(evaluate_binary(BinaryOp::Mod, i64::MIN, -1), Ok(0));
}

#[test]
fn test_comparisons() {
    assert_eq!(evaluate_binary(BinaryOp::Lt, 2, 3), Ok(1));
    assert_eq!(evaluate_binary(BinaryOp::Lt, 3, 2), Ok(0));
    assert_eq!(evaluate_binary(BinaryOp::Gt, 3, 2), Ok(1));
    assert_eq!(evaluate_binary(BinaryOp::Gt, 2, 2), Ok(0));
    assert_eq!(evaluate_binary(BinaryOp::Eq, 2, 2), Ok(1));
    assert_eq!(evaluate_binary(BinaryOp::Eq, 2, 3), Ok(0));
}

#[test]
fn test_error_messages() {
    assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(EvalError::ModuloByZero.to_string(), "modulo by zero");
    assert_eq!(EvalError::DivisionByZero.operator(), "/");
    assert_eq!(EvalError::ModuloByZero.operator(), "%");
}
