//! Per-session symbol table.
//!
//! An [`Environment`] maps names to either value bindings (created by
//! `define` or seeded as builtin constants) or builtin procedures. The
//! reserved-keyword set and the builtin table are data seeded into each
//! fresh instance at construction rather than process-wide globals, so
//! any number of sessions can run independently.
//!
//! One environment lives for exactly one session (a REPL run, a `-e`
//! invocation, or a file execution) and is mutated in place only by
//! `define`.

use std::collections::HashMap;

use crate::Error;
use crate::ast::{Expression, NumberType};
use crate::builtinops::{BUILTIN_OPS, BuiltinOp};

/// Syntax keywords that can never be bound by user code. Only `define`
/// has evaluator semantics; the rest are reserved for the richer
/// language this interpreter is a subset of.
pub(crate) const RESERVED_KEYWORDS: &[&str] = &["define", "begin", "lambda"];

#[derive(Debug, Clone, PartialEq)]
enum Binding {
    /// A value binding, visible to symbol lookup.
    Value(Expression),
    /// A builtin procedure, visible only to application dispatch.
    Procedure(&'static BuiltinOp),
}

/// Mutable, session-scoped mapping from names to values and procedures.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Construct a fresh environment seeded with the builtin procedures
    /// and the builtin constants `pi` and `e`.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        for op in BUILTIN_OPS {
            bindings.insert(op.id.to_owned(), Binding::Procedure(op));
        }

        bindings.insert(
            "pi".to_owned(),
            Binding::Value(Expression::Number(NumberType::from(std::f64::consts::PI))),
        );
        bindings.insert(
            "e".to_owned(),
            Binding::Value(Expression::Number(NumberType::from(std::f64::consts::E))),
        );

        Environment { bindings }
    }

    /// Look up the value bound to `name`.
    ///
    /// Procedure bindings are not values; a bare builtin symbol such as
    /// `+` is an unknown symbol outside application position.
    pub fn lookup(&self, name: &str) -> Result<Expression, Error> {
        match self.bindings.get(name) {
            Some(Binding::Value(expr)) => Ok(expr.clone()),
            _ => Err(Error::UnboundSymbol(name.to_owned())),
        }
    }

    /// Bind `name` to `value`, inserting or overwriting, and return the
    /// bound value so `define` itself has an observable result.
    ///
    /// Fails when `name` is a reserved keyword or names a builtin
    /// procedure; language syntax and builtins cannot be redefined.
    pub fn define(&mut self, name: &str, value: Expression) -> Result<Expression, Error> {
        if Self::is_reserved(name) || self.is_builtin(name) {
            return Err(Error::ReservedName(name.to_owned()));
        }
        self.bindings
            .insert(name.to_owned(), Binding::Value(value.clone()));
        Ok(value)
    }

    /// Whether `name` is a syntax keyword.
    pub fn is_reserved(name: &str) -> bool {
        RESERVED_KEYWORDS.contains(&name)
    }

    /// Whether `name` is bound to a builtin procedure.
    pub fn is_builtin(&self, name: &str) -> bool {
        matches!(self.bindings.get(name), Some(Binding::Procedure(_)))
    }

    /// The builtin procedure bound to `name`, if any. Used by the
    /// evaluator for application dispatch.
    pub(crate) fn get_proc(&self, name: &str) -> Option<&'static BuiltinOp> {
        match self.bindings.get(name) {
            Some(Binding::Procedure(op)) => Some(op),
            _ => None,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
