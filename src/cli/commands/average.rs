//! Average command - arithmetic mean of command-line numbers.

use serde::Serialize;

use super::calc::print_json;
use crate::functions::calculate_average;
use crate::io::{Envelope, ExitCode, OutputFormat};

#[derive(Debug, Serialize)]
pub struct Average {
    pub count: usize,
    pub average: f64,
}

/// Run the average command. `precision` applies to text output only.
pub fn run(numbers: &[f64], format: OutputFormat, precision: usize) -> ExitCode {
    tracing::debug!(target: "tribble", "average of {} number(s)", numbers.len());

    match calculate_average(numbers) {
        Ok(average) => {
            if format.is_json() {
                let envelope = Envelope::success(Average {
                    count: numbers.len(),
                    average,
                })
                .with_command("average")
                .with_count(numbers.len());
                print_json(&envelope)
            } else {
                println!("Average: {average:.precision$}");
                ExitCode::Success
            }
        }
        Err(e) => {
            tracing::debug!(target: "tribble", "average failed: {e:?}");
            if format.is_json() {
                let envelope: Envelope<()> = Envelope::error(e.result_code(), e.to_string())
                    .with_command("average")
                    .with_count(0);
                print_json(&envelope);
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(&e)
        }
    }
}
