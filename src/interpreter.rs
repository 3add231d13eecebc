//! Session-level entry points shared by the front-ends.
//!
//! A session is one [`Environment`] plus the parse-evaluate-format
//! pipeline. The interactive loop calls [`parse_and_evaluate`] once per
//! line against a long-lived environment; the one-shot and file modes
//! build a fresh environment, run once, and exit. Outputs are already
//! formatted strings, so the front-ends only decide where to print and
//! which exit code to use.

use std::path::Path;

use crate::Error;
use crate::environment::Environment;
use crate::evaluator::eval;
use crate::format::{format_error, format_value};
use crate::parser::{parse, parse_program};

/// Construct the environment for a new session.
pub fn new_environment() -> Environment {
    Environment::new()
}

/// Parse and evaluate one expression, returning the formatted result
/// on success and the formatted error message on failure.
pub fn parse_and_evaluate(source: &str, env: &mut Environment) -> Result<String, String> {
    run(source, env).map_err(|e| format_error(&e))
}

fn run(source: &str, env: &mut Environment) -> Result<String, Error> {
    let expr = parse(source)?;
    let value = eval(&expr, env)?;
    Ok(format_value(&value))
}

/// Evaluate a whole program: every top-level expression in order,
/// sharing one environment. The rendered result is the last
/// expression's value; earlier expressions run for their bindings.
pub fn evaluate_program(source: &str, env: &mut Environment) -> Result<String, String> {
    run_program(source, env).map_err(|e| format_error(&e))
}

fn run_program(source: &str, env: &mut Environment) -> Result<String, Error> {
    let expressions = parse_program(source)?;
    let mut last = None;
    for expr in &expressions {
        last = Some(eval(expr, env)?);
    }
    // parse_program guarantees at least one expression.
    match last {
        Some(value) => Ok(format_value(&value)),
        None => Err(Error::Parse("empty program".into())),
    }
}

/// Evaluate a script file. An unreadable path is reported without any
/// parsing or evaluation taking place.
pub fn evaluate_file(path: &Path, env: &mut Environment) -> Result<String, String> {
    let source = std::fs::read_to_string(path).map_err(|_| {
        format_error(&Error::File(format!(
            "could not open file for reading: {}",
            path.display()
        )))
    })?;
    evaluate_program(&source, env)
}
