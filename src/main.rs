//! CLI entry point for `padcalc`.
//!
//! Joins its arguments into one expression and prints the result, standing
//! in for the on-screen shell during development.

use std::io::{self, Write};

use padcalc::calculate;

fn main() {
    let query: String = std::env::args().skip(1).collect();
    if query.is_empty() {
        let _ = writeln!(io::stderr(), "usage: padcalc <expression>");
        std::process::exit(2);
    }
    match calculate(&query) {
        Ok(result) => {
            let _ = writeln!(io::stdout(), "{result}");
        }
        Err(error) => {
            let _ = writeln!(io::stderr(), "padcalc: {error}");
            std::process::exit(1);
        }
    }
}
