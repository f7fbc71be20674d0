//! Library crate for padcalc.
//!
//! The expression core behind an on-screen integer calculator: a tokenizer,
//! an infix-to-postfix converter and a postfix evaluator, each a pure
//! function, chained by [`calculate`]. [`can_append`] is the input guard the
//! UI shell consults before growing the display string.

#![forbid(unsafe_code)]

pub mod error;
pub mod eval;
pub mod keypad;
pub mod postfix;
pub mod token;
pub mod tokenizer;

pub use error::CalcError;
pub use eval::{apply_op, eval_postfix};
pub use keypad::{calculate, can_append};
pub use postfix::to_postfix;
pub use token::{Op, Token};
pub use tokenizer::tokenize;
