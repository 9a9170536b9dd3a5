//! Calc command - evaluate one calculator operation.

use serde::Serialize;

use crate::calculator::{Operation, Outcome};
use crate::io::{Envelope, ExitCode, OutputFormat};

/// JSON payload for a successful evaluation.
#[derive(Debug, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub a: i64,
    pub b: i64,
    pub result: Outcome,
}

/// Run the calc command.
pub fn run(operation: Operation, a: i64, b: i64, format: OutputFormat) -> ExitCode {
    let expression = format!("{a} {} {b}", operation.symbol());
    tracing::debug!(target: "tribble", "calc {expression}");

    match operation.evaluate(a, b) {
        Ok(result) => {
            if format.is_json() {
                let envelope = Envelope::success(Evaluation {
                    operation,
                    a,
                    b,
                    result,
                })
                .with_command("calc")
                .with_query(&expression)
                .with_message(format!("{expression} = {result}"));
                print_json(&envelope)
            } else {
                println!("{expression} = {result}");
                ExitCode::Success
            }
        }
        Err(e) => {
            tracing::debug!(target: "tribble", "calc failed: {e:?}");
            if format.is_json() {
                let envelope: Envelope<()> = Envelope::error(e.result_code(), e.to_string())
                    .with_command("calc")
                    .with_query(&expression);
                print_json(&envelope);
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(&e)
        }
    }
}

/// Print an envelope as pretty JSON, returning its exit code.
pub(super) fn print_json<T: Serialize>(envelope: &Envelope<T>) -> ExitCode {
    match envelope.to_json() {
        Ok(json) => {
            println!("{json}");
            envelope.code.exit_code()
        }
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            ExitCode::GeneralError
        }
    }
}
