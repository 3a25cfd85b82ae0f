//! Control flow evaluation (blocks, if/else, while).
//!
//! Each helper takes the recursive evaluator as a closure so it stays
//! independent of how symbols and handlers are threaded through.

use mint_ir::Node;

use crate::{EvalResult, Value};

/// Evaluate statements in order, stopping at the first fault.
pub fn eval_block<F>(statements: &[Node], mut eval_fn: F) -> EvalResult
where
    F: FnMut(&Node) -> EvalResult,
{
    for statement in statements {
        eval_fn(statement)?;
    }
    Ok(Value::UNIT)
}

/// Evaluate an if/else statement.
///
/// Exactly one branch runs. A missing `else` is an empty block.
pub fn eval_if<F>(
    condition: &Node,
    then_branch: &[Node],
    else_branch: &[Node],
    mut eval_fn: F,
) -> EvalResult
where
    F: FnMut(&Node) -> EvalResult,
{
    let cond_val = eval_fn(condition)?;
    if cond_val.is_truthy() {
        eval_block(then_branch, &mut eval_fn)
    } else {
        eval_block(else_branch, &mut eval_fn)
    }
}

/// Evaluate a while loop.
///
/// The condition is re-evaluated before every iteration, so assignments in
/// the body are observed. Returns the number of iterations run.
pub fn eval_while<F>(condition: &Node, body: &[Node], mut eval_fn: F) -> Result<u64, crate::EvalError>
where
    F: FnMut(&Node) -> EvalResult,
{
    let mut iterations: u64 = 0;
    while eval_fn(condition)?.is_truthy() {
        eval_block(body, &mut eval_fn)?;
        iterations = iterations.wrapping_add(1);
    }
    Ok(iterations)
}
