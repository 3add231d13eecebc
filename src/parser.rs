//! The reader: parses textual S-expressions into [`Expression`] trees.
//!
//! The grammar is whitespace-delimited tokens inside balanced
//! parentheses. A token made of an optional sign and digits, with an
//! optional decimal point or exponent, is a numeric atom; a token that
//! begins with a digit but is not a valid number is a syntax error; any
//! other token is a symbol. Line comments start with `;` and run to the
//! end of the line. All Unicode whitespace (including `\r`) delimits
//! tokens, so CRLF and LF sources parse identically.
//!
//! Parsing is pure: no side effects, no state beyond the input slice.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::char,
    error::ErrorKind,
};

use crate::ast::Expression;
use crate::{Error, MAX_PARSE_DEPTH};

/// Characters that end an atom token.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || c == ';'
}

/// Consume whitespace and `;` line comments.
fn ignored(input: &str) -> IResult<&str, ()> {
    let mut rest = input;
    loop {
        let trimmed = rest.trim_start();
        if let Some(after) = trimmed.strip_prefix(';') {
            // Chomp to end of line; a comment may also end the input.
            rest = match after.find('\n') {
                Some(pos) => &after[pos + 1..],
                None => "",
            };
        } else {
            return Ok((trimmed, ()));
        }
    }
}

/// Parse one atom token and classify it as a number or a symbol.
fn parse_atom(input: &str) -> IResult<&str, Expression> {
    let (rest, token) = take_while1(|c| !is_delimiter(c)).parse(input)?;

    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok((rest, Expression::Number(n))),
        // A token that leads with a digit must be a complete number;
        // "123abc" is malformed input, not a symbol.
        _ if token.starts_with(|c: char| c.is_ascii_digit()) => Err(nom::Err::Error(
            nom::error::Error::new(input, ErrorKind::Digit),
        )),
        _ => Ok((rest, Expression::Symbol(token.to_owned()))),
    }
}

/// Parse a parenthesized list of expressions.
fn parse_list(input: &str, depth: usize) -> IResult<&str, Expression> {
    let (input, _) = char('(').parse(input)?;

    let mut elements = Vec::new();
    let mut rest = input;
    loop {
        let (after_ws, _) = ignored(rest)?;
        if let Ok((after_close, _)) = char::<_, nom::error::Error<&str>>(')').parse(after_ws) {
            return Ok((after_close, Expression::List(elements)));
        }
        let (after_elem, element) = parse_expression(after_ws, depth + 1)?;
        elements.push(element);
        rest = after_elem;
    }
}

/// Parse a single expression at the given nesting depth.
fn parse_expression(input: &str, depth: usize) -> IResult<&str, Expression> {
    if depth >= MAX_PARSE_DEPTH {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::TooLarge,
        )));
    }
    let (input, _) = ignored(input)?;
    if input.starts_with('(') {
        parse_list(input, depth)
    } else {
        parse_atom(input)
    }
}

/// Convert a nom failure into a user-facing message.
fn parse_error_to_message(input: &str, error: nom::Err<nom::error::Error<&str>>) -> String {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => {
            let position = input.len().saturating_sub(e.input.len());
            match e.code {
                ErrorKind::TooLarge => {
                    format!("expression too deeply nested (max depth: {MAX_PARSE_DEPTH})")
                }
                ErrorKind::Digit => {
                    let token: String = input.chars().skip(position).take(10).collect();
                    format!("invalid numeric literal near '{token}'")
                }
                _ => {
                    if position < input.len() {
                        let near: String = input.chars().skip(position).take(10).collect();
                        format!("unexpected input near '{near}'")
                    } else {
                        "unexpected end of input".into()
                    }
                }
            }
        }
        nom::Err::Incomplete(_) => "incomplete input".into(),
    }
}

/// Parse exactly one complete S-expression from `input`.
///
/// Fails when the input is empty, parentheses are unbalanced, or
/// anything but whitespace and comments follows the expression.
pub fn parse(input: &str) -> Result<Expression, Error> {
    let (rest, expr) =
        parse_expression(input, 0).map_err(|e| Error::Parse(parse_error_to_message(input, e)))?;
    let (rest, _) = ignored(rest).map_err(|e| Error::Parse(parse_error_to_message(input, e)))?;
    if rest.is_empty() {
        Ok(expr)
    } else {
        let near: String = rest.chars().take(10).collect();
        Err(Error::Parse(format!("unexpected trailing input: '{near}'")))
    }
}

/// Parse a whole program: one or more expressions separated by
/// whitespace or comments. Used by the file runner, where each
/// top-level expression evaluates in sequence.
pub fn parse_program(input: &str) -> Result<Vec<Expression>, Error> {
    let mut expressions = Vec::new();
    let mut rest = input;
    loop {
        let (after_ws, _) =
            ignored(rest).map_err(|e| Error::Parse(parse_error_to_message(input, e)))?;
        if after_ws.is_empty() {
            break;
        }
        let (after_expr, expr) = parse_expression(after_ws, 0)
            .map_err(|e| Error::Parse(parse_error_to_message(input, e)))?;
        expressions.push(expr);
        rest = after_expr;
    }

    if expressions.is_empty() {
        return Err(Error::Parse("empty program".into()));
    }
    Ok(expressions)
}
