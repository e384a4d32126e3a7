//! Binary operator implementations for the evaluator.
//!
//! All Tally numbers are `f64`, so dispatch is a single match on the operator.
//! Nothing here touches the store.

use tally_ir::BinaryOp;
use tracing::{debug, trace};

/// Evaluate a binary operation.
///
/// Division follows IEEE 754: dividing by zero yields an infinity or NaN
/// rather than an error. The caller decides what such a result means.
#[inline]
pub fn evaluate_binary(lhs: f64, rhs: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / rhs,
    }
}

/// Evaluate a binary operation given its source symbol.
///
/// Unknown symbols evaluate to `0.0`.
pub fn apply(lhs: f64, rhs: f64, symbol: char) -> f64 {
    if let Some(op) = BinaryOp::from_symbol(symbol) {
        trace!(lhs, %op, rhs, "apply binary operator");
        evaluate_binary(lhs, rhs, op)
    } else {
        debug!(%symbol, "unknown binary operator, evaluating to 0");
        0.0
    }
}
