//! Error type shared by every evaluation stage.

use thiserror::Error;

/// Failure modes of a single calculation.
///
/// Every variant is a deterministic function of the input string; callers may
/// retry with different input but never with the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero right-hand operand.
    #[error("division by zero")]
    DivisionByZero,
    /// The expression did not reduce to exactly one value, e.g. empty input,
    /// a leading or trailing operator, or consecutive operators.
    #[error("malformed expression")]
    MalformedExpression,
    /// A character outside digits, operators and whitespace reached the
    /// tokenizer. The append guard makes this unreachable from the keypad,
    /// but arbitrary caller strings still hit it.
    #[error("unsupported operator: {symbol}")]
    UnsupportedOperator {
        /// The offending character.
        symbol: char,
    },
    /// A literal or intermediate result fell outside `i64`.
    #[error("arithmetic overflow")]
    Overflow,
}
