//! End-to-end tests through the public library API, covering the
//! behaviors every front-end mode relies on.

use plotscript::interpreter::{evaluate_file, new_environment, parse_and_evaluate};

/// Input/output pairs evaluated against one persistent session, the
/// way the interactive loop uses the library. `Err` entries only
/// require the rendered message to carry the `Error` prefix.
fn run_session(test_cases: &[(&str, Result<&str, ()>)]) {
    let mut env = new_environment();
    for (i, (input, expected)) in test_cases.iter().enumerate() {
        let test_id = format!("session step #{} ({input})", i + 1);
        match (parse_and_evaluate(input, &mut env), expected) {
            (Ok(actual), Ok(expected_out)) => {
                assert_eq!(actual, *expected_out, "{test_id}: output mismatch");
            }
            (Err(message), Err(())) => {
                assert!(
                    message.starts_with("Error"),
                    "{test_id}: diagnostic missing 'Error' prefix: {message}"
                );
            }
            (Ok(actual), Err(())) => panic!("{test_id}: expected error, got {actual}"),
            (Err(message), Ok(_)) => panic!("{test_id}: expected success, got {message}"),
        }
    }
}

#[test]
fn test_interactive_session_behavior() {
    run_session(&[
        ("(+ 1 2)", Ok("(3)")),
        ("(+ 1 2 10)", Ok("(13)")),
        ("(- 4 2)", Ok("(2)")),
        ("(define a 1)", Ok("(1)")),
        ("a", Ok("(1)")),
        ("(define b a)", Ok("(1)")),
        ("(+ a b)", Ok("(2)")),
        // Errors leave the session and its bindings intact.
        ("(- 4 2 12)", Err(())),
        ("(define begin True)", Err(())),
        ("nosuch", Err(())),
        ("(+ 1", Err(())),
        ("(+ a b)", Ok("(2)")),
        ("(define a 5)", Ok("(5)")),
        ("(+ a b)", Ok("(6)")),
    ]);
}

#[test]
fn test_one_shot_evaluation() {
    // Each `-e` invocation gets a fresh environment.
    let mut env = new_environment();
    assert_eq!(parse_and_evaluate("(- 4 2)", &mut env), Ok("(2)".to_owned()));

    let mut env = new_environment();
    let message = parse_and_evaluate("(- 4 2 12)", &mut env).unwrap_err();
    assert!(message.starts_with("Error"), "got: {message}");

    let mut env = new_environment();
    assert!(parse_and_evaluate("a", &mut env).is_err());
}

#[test]
fn test_script_file_evaluation() {
    let dir = std::env::temp_dir();
    let pid = std::process::id();

    let unix = dir.join(format!("plotscript-e2e-unix-{pid}.pls"));
    std::fs::write(&unix, "; compute a difference\n(define a 2)\n(- a 6)\n").unwrap();
    let mut env = new_environment();
    assert_eq!(evaluate_file(&unix, &mut env), Ok("(-4)".to_owned()));
    std::fs::remove_file(&unix).unwrap();

    let windows = dir.join(format!("plotscript-e2e-windows-{pid}.pls"));
    std::fs::write(&windows, "; compute a difference\r\n(define a 2)\r\n(- a 6)\r\n").unwrap();
    let mut env = new_environment();
    assert_eq!(evaluate_file(&windows, &mut env), Ok("(-4)".to_owned()));
    std::fs::remove_file(&windows).unwrap();
}

#[test]
fn test_missing_script_file() {
    let mut env = new_environment();
    let missing = std::env::temp_dir().join("plotscript-e2e-no-such-file.pls");
    let message = evaluate_file(&missing, &mut env).unwrap_err();
    assert!(message.starts_with("Error"), "got: {message}");
    assert!(message.contains("could not open file"), "got: {message}");
}
