//! Lexical analysis for keypad expressions.
//!
//! This module exposes [`tokenize`], which converts a raw query string into a
//! sequence of classified [`Token`]s. It uses the `logos` crate to recognise
//! lexemes: each operator character is its own token and every maximal run of
//! decimal digits becomes one operand, so multi-digit numbers fall out of
//! simple keypad concatenation.

use logos::Logos;

use crate::error::CalcError;
use crate::token::{Op, Token};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,
    #[regex(r"[0-9]+")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
}

/// Tokenise a query string into classified tokens.
///
/// ASCII whitespace is skipped as trivia. Classification happens here and
/// nowhere else; later stages consume tagged tokens without reparsing.
///
/// # Errors
///
/// Returns [`CalcError::UnsupportedOperator`] for any character outside
/// digits, `+ - * /` and whitespace, and [`CalcError::Overflow`] when a digit
/// run does not fit in `i64`.
///
/// # Examples
///
/// ```rust
/// use padcalc::{Op, Token, tokenize};
///
/// let tokens = tokenize("12+3");
/// assert_eq!(
///     tokens,
///     Ok(vec![
///         Token::Operand(12),
///         Token::Operator(Op::Add),
///         Token::Operand(3),
///     ]),
/// );
/// ```
pub fn tokenize(src: &str) -> Result<Vec<Token>, CalcError> {
    let mut lexer = RawToken::lexer(src);
    // Keypad input is dense, roughly one token per character.
    let mut out = Vec::with_capacity(src.len());
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        #[expect(clippy::expect_used, reason = "invalid span indicates lexer bug")]
        let text = src.get(span).expect("lexer produced invalid span");
        let Ok(raw) = result else {
            let symbol = text.chars().next().unwrap_or('\u{fffd}');
            return Err(CalcError::UnsupportedOperator { symbol });
        };
        let token = match raw {
            // The skip callback filters whitespace before it reaches us.
            RawToken::Whitespace => continue,
            RawToken::Number => {
                // The regex admits only decimal digits, so the sole parse
                // failure is a value outside i64.
                let value = text.parse::<i64>().map_err(|_| CalcError::Overflow)?;
                Token::Operand(value)
            }
            RawToken::Plus => Token::Operator(Op::Add),
            RawToken::Minus => Token::Operator(Op::Sub),
            RawToken::Star => Token::Operator(Op::Mul),
            RawToken::Slash => Token::Operator(Op::Div),
        };
        out.push(token);
    }
    Ok(out)
}
