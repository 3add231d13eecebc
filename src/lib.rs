//! Core of the plotscript interpreter: a small S-expression calculator
//! language with numeric atoms, symbol bindings, and a fixed set of
//! arithmetic procedures.
//!
//! The crate is organized around four components:
//!
//! - `parser`: reads textual S-expressions into an [`ast::Expression`] tree
//! - `environment`: the per-session symbol table, seeded with builtin
//!   procedures and protected reserved keywords
//! - `evaluator`: recursive reduction of an expression to a value
//! - `format`: renders results (`(3)`) and errors (`Error ...`) as text
//!
//! The `interpreter` module composes these into the two entry points the
//! front-ends use: [`interpreter::new_environment`] and
//! [`interpreter::parse_and_evaluate`]. The binary in `main.rs` layers the
//! three execution modes (interactive loop, `-e` one-shot, script file) on
//! top of those entry points.
//!
//! ## Language surface
//!
//! ```text
//! plotscript> (+ 1 2)
//! (3)
//! plotscript> (define a 1)
//! (1)
//! plotscript> (- a 4)
//! (-3)
//! ```
//!
//! Values are real numbers only. `define` is the single special form;
//! `begin` and `lambda` are reserved keywords that user code can never
//! rebind but that carry no evaluation semantics here.

use std::fmt;

/// Maximum parsing depth, limiting how deeply lists may nest.
/// Prevents stack overflow on pathologically nested input.
pub const MAX_PARSE_DEPTH: usize = 32;

/// Maximum evaluation depth. Set above the parse depth so every
/// expression that parses can also be evaluated.
pub const MAX_EVAL_DEPTH: usize = 64;

/// Classified failures produced by the reader and the evaluator.
///
/// Errors are values, not panics: every failure is detected where it
/// occurs and returned up through `parse`/`eval` so the interactive
/// front-end can report it and keep its session alive. The `Display`
/// rendering of every variant begins with the literal word `Error`,
/// which is the only error-detection signal the front-ends rely on.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed or incomplete S-expression text.
    Parse(String),
    /// Reference to a name with no value binding.
    UnboundSymbol(String),
    /// Attempt to `define` a reserved keyword or builtin procedure name.
    ReservedName(String),
    /// A special form or procedure invoked with the wrong operand count.
    Arity {
        op: String,
        expected: String,
        got: usize,
    },
    /// The head of an application is not a procedure.
    NotCallable(String),
    /// Attempt to evaluate `()`.
    EmptyApplication,
    /// A procedure applied to an argument of the wrong kind.
    Type { op: String, message: String },
    /// Semantic failure during evaluation (numeric domain errors,
    /// depth exhaustion, unsupported reserved forms).
    Eval(String),
    /// Script file could not be opened or read.
    File(String),
}

impl Error {
    /// Arity failure for a procedure or special form.
    pub(crate) fn arity(op: &str, expected: impl Into<String>, got: usize) -> Self {
        Error::Arity {
            op: op.to_owned(),
            expected: expected.into(),
            got,
        }
    }

    /// Type failure inside a builtin procedure call.
    pub(crate) fn in_call(op: &str, message: impl Into<String>) -> Self {
        Error::Type {
            op: op.to_owned(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "Error: invalid expression, could not parse: {msg}"),
            Error::UnboundSymbol(name) => {
                write!(f, "Error during evaluation: unknown symbol: {name}")
            }
            Error::ReservedName(name) => write!(
                f,
                "Error during evaluation: attempt to redefine reserved name: {name}"
            ),
            Error::Arity { op, expected, got } => write!(
                f,
                "Error during evaluation: invalid number of arguments to {op}: expected {expected}, got {got}"
            ),
            Error::NotCallable(msg) => write!(f, "Error during evaluation: {msg}"),
            Error::EmptyApplication => {
                write!(f, "Error during evaluation: cannot evaluate an empty list")
            }
            Error::Type { op, message } => write!(f, "Error in call to {op}: {message}"),
            Error::Eval(msg) => write!(f, "Error during evaluation: {msg}"),
            Error::File(msg) => write!(f, "Error: {msg}"),
        }
    }
}

pub mod ast;
pub mod builtinops;
pub mod environment;
pub mod evaluator;
pub mod format;
pub mod interpreter;
pub mod parser;

#[cfg(test)]
mod error_display_tests {
    use super::*;

    // Front-ends detect failures by the literal "Error" prefix, so every
    // variant must render with it.
    #[test]
    fn test_every_variant_starts_with_error() {
        let errors = vec![
            Error::Parse("unbalanced parentheses".into()),
            Error::UnboundSymbol("a".into()),
            Error::ReservedName("begin".into()),
            Error::arity("-", "exactly 2", 3),
            Error::NotCallable("symbol does not name a procedure: a".into()),
            Error::EmptyApplication,
            Error::in_call("+", "argument not a number"),
            Error::Eval("square root of a negative number".into()),
            Error::File("could not open file for reading: /no/such/file".into()),
        ];

        for err in errors {
            let rendered = format!("{err}");
            assert!(
                rendered.starts_with("Error"),
                "expected 'Error' prefix, got: {rendered}"
            );
        }
    }

    #[test]
    fn test_arity_message_names_operator_and_counts() {
        let msg = format!("{}", Error::arity("-", "exactly 2", 3));
        assert!(msg.contains('-'));
        assert!(msg.contains("exactly 2"));
        assert!(msg.contains('3'));
    }
}
