//! Infix-to-postfix conversion.
//!
//! A stack-based shunting algorithm specialised to binary operators; the
//! grammar has no parentheses, so the only stack discipline needed is the
//! precedence comparison.

use crate::token::{Op, Token};

/// Reorder an infix token sequence into postfix (reverse Polish) form.
///
/// Operands stream straight through. An incoming operator first pops every
/// stacked operator of greater or equal precedence to the output, then pushes
/// itself; popping on equal precedence makes `+ - * /` left-associative.
/// Once the input is exhausted the remaining stack drains to the output.
///
/// The output is a permutation of the input. A pure function: no state
/// survives the call, and identical input yields identical output.
///
/// # Examples
///
/// ```rust
/// use padcalc::{Op, Token, to_postfix};
///
/// let infix = [
///     Token::Operand(3),
///     Token::Operator(Op::Add),
///     Token::Operand(4),
///     Token::Operator(Op::Mul),
///     Token::Operand(2),
/// ];
/// let postfix = to_postfix(&infix);
/// assert_eq!(
///     postfix,
///     vec![
///         Token::Operand(3),
///         Token::Operand(4),
///         Token::Operand(2),
///         Token::Operator(Op::Mul),
///         Token::Operator(Op::Add),
///     ],
/// );
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    // An empty stack acts as a precedence-0 floor, so real operators always
    // outrank the stack bottom.
    let mut ops: Vec<Op> = Vec::new();
    for &token in tokens {
        match token {
            Token::Operand(_) => output.push(token),
            Token::Operator(incoming) => {
                while let Some(&top) = ops.last() {
                    if incoming.precedence() > top.precedence() {
                        break;
                    }
                    ops.pop();
                    output.push(Token::Operator(top));
                }
                ops.push(incoming);
            }
        }
    }
    while let Some(op) = ops.pop() {
        output.push(Token::Operator(op));
    }
    output
}
