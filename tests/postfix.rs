//! Conversion-order tests for the infix-to-postfix stage.

use padcalc::{Op, Token, to_postfix, tokenize};
use rstest::rstest;

/// Tokenize a known-good source string for use as conversion input.
fn tokens(source: &str) -> Vec<Token> {
    tokenize(source).unwrap_or_else(|error| panic!("bad test source {source:?}: {error}"))
}

/// Render a token sequence compactly so case tables stay readable.
fn render(tokens: &[Token]) -> String {
    let parts: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    parts.join(" ")
}

#[rstest]
#[case("3+4*2", "3 4 2 * +")]
#[case("2+3*4", "2 3 4 * +")]
#[case("2*3+4", "2 3 * 4 +")]
#[case("1+2-3", "1 2 + 3 -")]
#[case("10-2-3", "10 2 - 3 -")]
#[case("8/4/2", "8 4 / 2 /")]
#[case("1*2/3*4", "1 2 * 3 / 4 *")]
#[case("1+2*3-4/2", "1 2 3 * + 4 2 / -")]
fn precedence_and_associativity(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(render(&to_postfix(&tokens(source))), expected);
}

#[rstest]
#[case("5")]
#[case("1+2")]
#[case("2+3*4-5/6")]
fn output_is_a_permutation_of_the_input(#[case] source: &str) {
    let infix = tokens(source);
    let mut postfix = to_postfix(&infix);
    assert_eq!(postfix.len(), infix.len());
    let mut sorted_infix = infix;
    sorted_infix.sort_unstable_by_key(|token| format!("{token}"));
    postfix.sort_unstable_by_key(|token| format!("{token}"));
    assert_eq!(postfix, sorted_infix);
}

#[rstest]
fn empty_input_converts_to_empty_output() {
    assert_eq!(to_postfix(&[]), Vec::new());
}

#[rstest]
fn lone_operand_passes_through() {
    assert_eq!(to_postfix(&[Token::Operand(9)]), vec![Token::Operand(9)]);
}

#[rstest]
fn operators_without_operands_drain_in_stack_order() {
    // Malformed input is reordered, not rejected; evaluation rejects it.
    let infix = [Token::Operator(Op::Add), Token::Operator(Op::Mul)];
    assert_eq!(
        to_postfix(&infix),
        vec![Token::Operator(Op::Mul), Token::Operator(Op::Add)],
    );
}

#[rstest]
fn conversion_is_deterministic() {
    let infix = tokens("2+3*4-5");
    assert_eq!(to_postfix(&infix), to_postfix(&infix));
}
