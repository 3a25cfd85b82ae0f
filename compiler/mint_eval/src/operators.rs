//! Binary operator implementations.
//!
//! Integer semantics:
//! - `+ - *` wrap on overflow; overflow is not a fault.
//! - `/` truncates toward zero, `%` takes the sign of the dividend.
//! - A zero divisor is the only failure.
//! - Comparisons yield `1` or `0`.

use mint_ir::BinaryOp;

use crate::errors::EvalError;

/// Zero-guarded division-like operation.
#[inline]
fn checked_div<F>(divisor: i64, op: F, fault: EvalError) -> Result<i64, EvalError>
where
    F: FnOnce() -> i64,
{
    if divisor == 0 {
        Err(fault)
    } else {
        Ok(op())
    }
}

/// Apply `op` to already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        // wrapping_* only differs from the plain op at i64::MIN / -1.
        BinaryOp::Div => checked_div(right, || left.wrapping_div(right), EvalError::DivisionByZero),
        BinaryOp::Mod => checked_div(right, || left.wrapping_rem(right), EvalError::ModuloByZero),
        BinaryOp::Gt => Ok(i64::from(left > right)),
        BinaryOp::Lt => Ok(i64::from(left < right)),
        BinaryOp::Eq => Ok(i64::from(left == right)),
    }
}
