//! Registry of builtin procedures with arity metadata.
//!
//! Each builtin is an ordinary Rust function over evaluated argument
//! slices. The evaluator validates arity against the registry entry
//! before calling, so the implementations themselves only check
//! argument kinds and numeric domains. The registry is plain static
//! data; it is consulted once per session when an
//! [`crate::environment::Environment`] is constructed, keeping sessions
//! fully independent of each other.

use crate::Error;
use crate::ast::{Expression, NumberType};

/// Signature shared by all builtin procedure implementations.
pub type Procedure = fn(&[Expression]) -> Result<Expression, Error>;

/// Expected operand count for a procedure or special form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arity {
    /// Exactly this many operands.
    Exactly(usize),
    /// This many operands or more.
    AtLeast(usize),
}

impl Arity {
    /// Check an operand count, producing a classified arity error
    /// naming the operation on mismatch.
    pub fn validate(&self, op: &str, got: usize) -> Result<(), Error> {
        let ok = match self {
            Arity::Exactly(n) => got == *n,
            Arity::AtLeast(n) => got >= *n,
        };
        if ok {
            Ok(())
        } else {
            Err(Error::arity(op, self.describe(), got))
        }
    }

    fn describe(&self) -> String {
        match self {
            Arity::Exactly(n) => format!("exactly {n}"),
            Arity::AtLeast(n) => format!("at least {n}"),
        }
    }
}

/// Definition of one builtin procedure.
#[derive(Clone, Copy)]
pub struct BuiltinOp {
    /// The symbol the procedure is bound to.
    pub id: &'static str,
    /// Operand count validated before the call.
    pub arity: Arity,
    /// The implementation.
    pub proc: Procedure,
}

impl std::fmt::Debug for BuiltinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuiltinOp({}, {:?})", self.id, self.arity)
    }
}

impl PartialEq for BuiltinOp {
    fn eq(&self, other: &Self) -> bool {
        // Identified by name; function pointers never compare.
        self.id == other.id
    }
}

/// All builtin procedures, bound into every fresh environment.
pub(crate) static BUILTIN_OPS: &[BuiltinOp] = &[
    BuiltinOp {
        id: "+",
        arity: Arity::AtLeast(1),
        proc: builtin_add,
    },
    BuiltinOp {
        id: "-",
        arity: Arity::Exactly(2),
        proc: builtin_sub,
    },
    BuiltinOp {
        id: "*",
        arity: Arity::AtLeast(1),
        proc: builtin_mul,
    },
    BuiltinOp {
        id: "/",
        arity: Arity::Exactly(2),
        proc: builtin_div,
    },
    BuiltinOp {
        id: "sqrt",
        arity: Arity::Exactly(1),
        proc: builtin_sqrt,
    },
    BuiltinOp {
        id: "^",
        arity: Arity::Exactly(2),
        proc: builtin_pow,
    },
    BuiltinOp {
        id: "ln",
        arity: Arity::Exactly(1),
        proc: builtin_ln,
    },
    BuiltinOp {
        id: "sin",
        arity: Arity::Exactly(1),
        proc: builtin_sin,
    },
    BuiltinOp {
        id: "cos",
        arity: Arity::Exactly(1),
        proc: builtin_cos,
    },
    BuiltinOp {
        id: "tan",
        arity: Arity::Exactly(1),
        proc: builtin_tan,
    },
];

/// Extract a number from an argument, classifying anything else as a
/// type error in the named call.
fn as_number(op: &str, arg: &Expression) -> Result<NumberType, Error> {
    match arg {
        Expression::Number(n) => Ok(*n),
        other => Err(Error::in_call(op, format!("argument not a number: {other}"))),
    }
}

fn builtin_add(args: &[Expression]) -> Result<Expression, Error> {
    let mut sum = 0.0;
    for arg in args {
        sum += as_number("+", arg)?;
    }
    Ok(Expression::Number(sum))
}

fn builtin_sub(args: &[Expression]) -> Result<Expression, Error> {
    let a = as_number("-", &args[0])?;
    let b = as_number("-", &args[1])?;
    Ok(Expression::Number(a - b))
}

fn builtin_mul(args: &[Expression]) -> Result<Expression, Error> {
    let mut product = 1.0;
    for arg in args {
        product *= as_number("*", arg)?;
    }
    Ok(Expression::Number(product))
}

fn builtin_div(args: &[Expression]) -> Result<Expression, Error> {
    let a = as_number("/", &args[0])?;
    let b = as_number("/", &args[1])?;
    let result = a / b;
    if result.is_finite() {
        Ok(Expression::Number(result))
    } else {
        Err(Error::Eval("division produced a non-finite result".into()))
    }
}

fn builtin_sqrt(args: &[Expression]) -> Result<Expression, Error> {
    let a = as_number("sqrt", &args[0])?;
    if a < 0.0 {
        return Err(Error::Eval("square root of a negative number".into()));
    }
    Ok(Expression::Number(a.sqrt()))
}

fn builtin_pow(args: &[Expression]) -> Result<Expression, Error> {
    let a = as_number("^", &args[0])?;
    let b = as_number("^", &args[1])?;
    let result = a.powf(b);
    if result.is_finite() {
        Ok(Expression::Number(result))
    } else {
        Err(Error::Eval(
            "exponentiation produced a non-finite result".into(),
        ))
    }
}

fn builtin_ln(args: &[Expression]) -> Result<Expression, Error> {
    let a = as_number("ln", &args[0])?;
    if a <= 0.0 {
        return Err(Error::Eval("natural log of a non-positive number".into()));
    }
    Ok(Expression::Number(a.ln()))
}

fn builtin_sin(args: &[Expression]) -> Result<Expression, Error> {
    Ok(Expression::Number(as_number("sin", &args[0])?.sin()))
}

fn builtin_cos(args: &[Expression]) -> Result<Expression, Error> {
    Ok(Expression::Number(as_number("cos", &args[0])?.cos()))
}

fn builtin_tan(args: &[Expression]) -> Result<Expression, Error> {
    Ok(Expression::Number(as_number("tan", &args[0])?.tan()))
}
