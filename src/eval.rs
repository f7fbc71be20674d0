//! Postfix evaluation.
//!
//! Reduces a postfix token sequence to a single integer with one value
//! stack. All arithmetic is checked `i64`; division truncates toward zero.

use crate::error::CalcError;
use crate::token::{Op, Token};

/// Evaluate a postfix token sequence to its integer result.
///
/// Operands push onto a local value stack. An operator pops the right operand
/// first, then the left, and pushes the applied result. The sequence is well
/// formed exactly when every pop finds an operand and one value remains at
/// the end.
///
/// A pure function: the stack is created and discarded within the call.
///
/// # Errors
///
/// Returns [`CalcError::MalformedExpression`] when a pop underflows or the
/// final stack holds anything other than exactly one value,
/// [`CalcError::DivisionByZero`] for a zero right-hand operand of `/`, and
/// [`CalcError::Overflow`] when an intermediate result falls outside `i64`.
pub fn eval_postfix(tokens: &[Token]) -> Result<i64, CalcError> {
    let mut values: Vec<i64> = Vec::new();
    for &token in tokens {
        match token {
            Token::Operand(value) => values.push(value),
            Token::Operator(op) => {
                let right = values.pop().ok_or(CalcError::MalformedExpression)?;
                let left = values.pop().ok_or(CalcError::MalformedExpression)?;
                values.push(apply_op(left, right, op)?);
            }
        }
    }
    let result = values.pop().ok_or(CalcError::MalformedExpression)?;
    if values.is_empty() {
        Ok(result)
    } else {
        // Leftover operands mean the input had too few operators.
        Err(CalcError::MalformedExpression)
    }
}

/// Apply one binary operator to its operands.
///
/// Division truncates toward zero, matching Rust's native `/`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when `right` is zero for `/`, and
/// [`CalcError::Overflow`] when the result falls outside `i64` (including
/// `i64::MIN / -1`).
pub fn apply_op(left: i64, right: i64, op: Op) -> Result<i64, CalcError> {
    match op {
        Op::Add => left.checked_add(right).ok_or(CalcError::Overflow),
        Op::Sub => left.checked_sub(right).ok_or(CalcError::Overflow),
        Op::Mul => left.checked_mul(right).ok_or(CalcError::Overflow),
        Op::Div => {
            if right == 0 {
                Err(CalcError::DivisionByZero)
            } else {
                left.checked_div(right).ok_or(CalcError::Overflow)
            }
        }
    }
}
