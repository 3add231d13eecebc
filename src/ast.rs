//! Abstract syntax tree for plotscript expressions.
//!
//! The single [`Expression`] enum represents both parsed syntax and
//! evaluation results: a number, a symbol, or an ordered list of
//! sub-expressions. Evaluation over the supported grammar only ever
//! produces the `Number` variant, but the type stays open so richer
//! value kinds can be added as variants later and every `match` over it
//! remains compiler-checked for completeness.

/// Type alias for number values in the interpreter.
pub type NumberType = f64;

/// An S-expression: a numeric atom, a symbol atom, or a list.
///
/// Trees are immutable once built and owned by whichever evaluation
/// step holds them; no sharing between expressions is needed.
///
/// Use the helper functions for concise construction in code and tests:
/// `num(3)` for numbers, `sym("a")` for symbols, `list([...])` for lists.
#[derive(Debug, Clone)]
pub enum Expression {
    /// A signed real number.
    Number(NumberType),
    /// An identifier.
    Symbol(String),
    /// An ordered, possibly empty sequence of expressions, used both
    /// for special-form syntax and procedure application.
    List(Vec<Expression>),
}

impl Expression {
    /// Numbers print without a trailing `.0` when they are integral, so
    /// `(+ 1 2)` renders as `3` rather than `3.0`. Non-integral values
    /// use the standard shortest `f64` form.
    fn fmt_number(n: NumberType, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The cast is exact below 2^53; larger integral values keep the
        // float rendering.
        if n.fract() == 0.0 && n.abs() < 9.0e15 {
            write!(f, "{}", n as i64)
        } else {
            write!(f, "{n}")
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Number(n) => Self::fmt_number(*n, f),
            Expression::Symbol(s) => write!(f, "{s}"),
            Expression::List(elements) => {
                write!(f, "(")?;
                for (i, elem) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expression::Number(a), Expression::Number(b)) => a == b,
            (Expression::Symbol(a), Expression::Symbol(b)) => a == b,
            (Expression::List(a), Expression::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<NumberType> for Expression {
    fn from(n: NumberType) -> Self {
        Expression::Number(n)
    }
}

impl From<i64> for Expression {
    fn from(n: i64) -> Self {
        Expression::Number(n as NumberType)
    }
}

/// Helper for creating numeric atoms.
pub fn num<T: Into<Expression>>(value: T) -> Expression {
    value.into()
}

/// Helper for creating symbol atoms.
pub fn sym<S: AsRef<str>>(name: S) -> Expression {
    Expression::Symbol(name.as_ref().to_owned())
}

/// Helper for creating lists from any iterable of expressions.
pub fn list<I: IntoIterator<Item = Expression>>(elements: I) -> Expression {
    Expression::List(elements.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_data_driven() {
        let test_cases = vec![
            (num(3), "3"),
            (num(-4), "-4"),
            (num(0), "0"),
            (num(-0.0), "0"),
            (num(0.5), "0.5"),
            (num(-2.25), "-2.25"),
            (num(13), "13"),
            (sym("a"), "a"),
            (sym("+"), "+"),
            (Expression::List(vec![]), "()"),
            (list([sym("+"), num(1), num(2)]), "(+ 1 2)"),
            (
                list([sym("define"), sym("a"), list([sym("-"), num(4), num(2)])]),
                "(define a (- 4 2))",
            ),
        ];

        for (i, (expr, expected)) in test_cases.iter().enumerate() {
            assert_eq!(
                format!("{expr}"),
                *expected,
                "display test #{} failed",
                i + 1
            );
        }
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(num(3), num(3.0));
        assert_ne!(num(3), num(4));
        assert_ne!(num(3), sym("3"));
        assert_eq!(
            list([sym("+"), num(1)]),
            Expression::List(vec![Expression::Symbol("+".into()), Expression::Number(1.0)])
        );
        assert_ne!(list([num(1)]), Expression::List(vec![]));
    }

    #[test]
    fn test_large_integral_numbers_keep_float_rendering() {
        // Above 2^53 the i64 cast would lose exactness, so the float
        // formatting is used instead.
        let n = num(1.0e16);
        assert_eq!(format!("{n}"), "10000000000000000");
    }
}
