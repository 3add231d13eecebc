//! Recursive evaluation of expressions against an environment.
//!
//! Dispatch order for a list form: the empty list is an error, a
//! `define` head is the one supported special form, any other reserved
//! keyword is rejected, and everything else is procedure application.
//! Application evaluates operands strictly left to right and stops at
//! the first failure, so no procedure ever sees a partially evaluated
//! argument slice.

use crate::ast::Expression;
use crate::environment::Environment;
use crate::{Error, MAX_EVAL_DEPTH};

/// Evaluate `expr` in `env`, reducing it to a value expression.
///
/// `define` mutates `env`; every other form leaves it untouched. A
/// failed evaluation never leaves a partial binding behind, because the
/// binding in `define` is the last step after its operand evaluates.
pub fn eval(expr: &Expression, env: &mut Environment) -> Result<Expression, Error> {
    eval_at_depth(expr, env, 0)
}

fn eval_at_depth(expr: &Expression, env: &mut Environment, depth: usize) -> Result<Expression, Error> {
    if depth >= MAX_EVAL_DEPTH {
        return Err(Error::Eval(format!(
            "expression too deeply nested to evaluate (max depth: {MAX_EVAL_DEPTH})"
        )));
    }

    match expr {
        Expression::Number(_) => Ok(expr.clone()),
        Expression::Symbol(name) => env.lookup(name),
        Expression::List(elements) => eval_list(elements, env, depth),
    }
}

fn eval_list(
    elements: &[Expression],
    env: &mut Environment,
    depth: usize,
) -> Result<Expression, Error> {
    let Some((head, operands)) = elements.split_first() else {
        return Err(Error::EmptyApplication);
    };

    let Expression::Symbol(name) = head else {
        return Err(Error::NotCallable("procedure name not a symbol".into()));
    };

    if name == "define" {
        return eval_define(operands, env, depth);
    }
    if Environment::is_reserved(name) {
        return Err(Error::Eval(format!("special form {name} is not supported")));
    }

    if let Some(op) = env.get_proc(name) {
        op.arity.validate(op.id, operands.len())?;
        let args = eval_operands(operands, env, depth)?;
        return (op.proc)(&args);
    }

    // A value-bound or unbound head cannot be applied; distinguish the
    // two in the error.
    match env.lookup(name) {
        Ok(_) => Err(Error::NotCallable(format!(
            "symbol does not name a procedure: {name}"
        ))),
        Err(err) => Err(err),
    }
}

/// `(define <symbol> <expression>)`: evaluate the operand, bind the
/// symbol, and yield the bound value.
fn eval_define(
    operands: &[Expression],
    env: &mut Environment,
    depth: usize,
) -> Result<Expression, Error> {
    if operands.len() != 2 {
        return Err(Error::arity("define", "exactly 2", operands.len()));
    }
    let Expression::Symbol(name) = &operands[0] else {
        return Err(Error::Eval(
            "first argument to define not a symbol".into(),
        ));
    };
    // The target name is validated before the operand runs, so a bad
    // name fails fast even when the operand would also fail.
    if Environment::is_reserved(name) || env.is_builtin(name) {
        return Err(Error::ReservedName(name.clone()));
    }

    let value = eval_at_depth(&operands[1], env, depth + 1)?;
    env.define(name, value)
}

fn eval_operands(
    operands: &[Expression],
    env: &mut Environment,
    depth: usize,
) -> Result<Vec<Expression>, Error> {
    operands
        .iter()
        .map(|operand| eval_at_depth(operand, env, depth + 1))
        .collect()
}
