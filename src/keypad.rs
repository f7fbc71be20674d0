//! The boundary the UI shell calls.
//!
//! The shell accumulates a query string from button presses, gates each press
//! through [`can_append`], and hands the finished string to [`calculate`]
//! when `=` is pressed. Nothing here retains state between calls; concurrent
//! calls with independent inputs need no synchronisation.

use crate::error::CalcError;
use crate::eval::eval_postfix;
use crate::postfix::to_postfix;
use crate::token::Op;
use crate::tokenizer::tokenize;

/// Evaluate an accumulated query string to its decimal result.
///
/// Runs the full pipeline: tokenize, convert to postfix, evaluate, then
/// render the integer. Deterministic for a given input; calling twice with
/// the same string yields the same result.
///
/// # Errors
///
/// Propagates any [`CalcError`] from the pipeline stages; see
/// [`eval_postfix`] and [`tokenize`] for the variants each can raise. The
/// shell is expected to render the error rather than crash.
///
/// # Examples
///
/// ```rust
/// use padcalc::{CalcError, calculate};
///
/// assert_eq!(calculate("2+3*4").as_deref(), Ok("14"));
/// assert_eq!(calculate("5/0"), Err(CalcError::DivisionByZero));
/// ```
pub fn calculate(query: &str) -> Result<String, CalcError> {
    let tokens = tokenize(query)?;
    let postfix = to_postfix(&tokens);
    let result = eval_postfix(&postfix);
    if let Err(error) = result {
        log::debug!("query of {} tokens failed: {error}", tokens.len());
    }
    result.map(|value| value.to_string())
}

/// Decide whether a keypad character may be appended to the current text.
///
/// Digits are always appendable. An operator is appendable only onto
/// non-empty text, which blocks a leading operator at the source. Anything
/// else is rejected.
///
/// # Examples
///
/// ```rust
/// use padcalc::can_append;
///
/// assert!(!can_append("", '+'));
/// assert!(can_append("3", '+'));
/// assert!(can_append("3", '5'));
/// ```
#[must_use]
pub fn can_append(current: &str, candidate: char) -> bool {
    if candidate.is_ascii_digit() {
        return true;
    }
    Op::from_symbol(candidate).is_some() && !current.is_empty()
}
