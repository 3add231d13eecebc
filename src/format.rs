//! Textual presentation of results and errors.
//!
//! All three front-ends print results the same way: the evaluated value
//! wrapped in a single pair of parentheses, so `(+ 1 2)` answers `(3)`.
//! Errors render through their `Display` impl, which always begins with
//! the literal word `Error`.

use crate::Error;
use crate::ast::Expression;

/// Render an evaluation result for output.
pub fn format_value(expr: &Expression) -> String {
    format!("({expr})")
}

/// Render an error for output.
pub fn format_error(error: &Error) -> String {
    format!("{error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::num;

    #[test]
    fn test_results_are_wrapped_in_parens() {
        let test_cases = vec![
            (num(3), "(3)"),
            (num(-4), "(-4)"),
            (num(0), "(0)"),
            (num(0.5), "(0.5)"),
            (num(13), "(13)"),
        ];
        for (expr, expected) in test_cases {
            assert_eq!(format_value(&expr), expected);
        }
    }

    #[test]
    fn test_errors_carry_the_error_prefix() {
        let rendered = format_error(&Error::UnboundSymbol("a".into()));
        assert!(rendered.starts_with("Error"), "got: {rendered}");
    }
}
