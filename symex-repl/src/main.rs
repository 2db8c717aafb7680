//! The interactive shell: thin glue over the parser and engine.
//!
//! The outer loop reads one expression per line. Once an expression parses, an inner loop offers
//! the named actions `derive`, `substitute`, and `reduce`, each re-rendering the result, until
//! `exit` returns to the expression prompt.

use ariadne::Source;
use rustyline::{error::ReadlineError, DefaultEditor};
use symex_engine::{derivative, reduce, substitute};
use symex_parser::ast::Expr;
use symex_parser::parser::Parser;

/// Parses a full expression from the given line, printing an error report on failure.
fn parse_line(line: &str) -> Option<Expr> {
    match Parser::new(line).parse_full() {
        Ok(expr) => Some(expr),
        Err(err) => {
            err.build_report("input")
                .eprint(("input", Source::from(line)))
                .ok();
            None
        },
    }
}

/// Runs the action loop for one parsed expression until the user types `exit`.
fn expression_menu(rl: &mut DefaultEditor, mut expr: Expr) -> Result<(), ReadlineError> {
    println!("{expr}");

    loop {
        let action = rl.readline("action (derive, substitute, reduce, exit)> ")?;
        match action.trim() {
            "" => continue,
            "exit" => return Ok(()),
            "derive" => {
                let var = rl.readline("differentiate with respect to? ")?;
                expr = reduce(&derivative(&expr, var.trim()));
            },
            "substitute" => {
                let var = rl.readline("which variable? ")?;
                let replacement_line = rl.readline("which expression? ")?;
                let Some(replacement) = parse_line(&replacement_line) else {
                    continue;
                };
                expr = substitute(&expr, var.trim(), &replacement);
            },
            "reduce" => expr = reduce(&expr),
            other => {
                println!("unknown action `{other}`");
                continue;
            },
        }
        println!("{expr}");
    }
}

fn main() {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{err}");
            return;
        },
    };

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let line = rl.readline("expr> ")?;
        if line.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&line)?;

        if let Some(expr) = parse_line(&line) {
            expression_menu(rl, expr)?;
        }
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{err}"),
            }
            break;
        }
    }
}
