//! Command-line front-end for the plotscript interpreter.
//!
//! Three execution modes share one library pipeline:
//!
//! - no arguments: interactive read-eval-print loop
//! - `-e "<expr>"`: evaluate one expression and exit
//! - `<file>`: run a script file and print its final result

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use plotscript::interpreter::{evaluate_file, new_environment, parse_and_evaluate};

#[derive(Parser)]
#[command(name = "plotscript", about = "An S-expression calculator language")]
struct Cli {
    /// Evaluate a single expression and exit
    #[arg(short = 'e', value_name = "EXPR", conflicts_with = "file")]
    expression: Option<String>,

    /// Script file to execute
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(source) = cli.expression {
        return run_once(parse_and_evaluate(&source, &mut new_environment()));
    }
    if let Some(path) = cli.file {
        return run_once(evaluate_file(&path, &mut new_environment()));
    }
    repl()
}

/// One-shot modes print the outcome and map it to the exit code.
fn run_once(outcome: Result<String, String>) -> ExitCode {
    match outcome {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// The interactive loop. Errors print to stderr and the session
/// continues with all prior bindings intact; only end-of-input or an
/// interrupt ends the loop.
fn repl() -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Error: could not start interactive session: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut env = new_environment();
    loop {
        match rl.readline("plotscript> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match parse_and_evaluate(&line, &mut env) {
                    Ok(result) => println!("{result}"),
                    Err(message) => eprintln!("{message}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: could not read input: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
