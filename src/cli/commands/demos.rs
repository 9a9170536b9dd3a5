//! Demo commands: hello, containers, functions, calculator, greeting, greet.
//!
//! Each demo writes to a locked stdout. A closed pipe (`tribble containers |
//! head`) is not an error.

use std::io::{self, Write};

use anyhow::Context;

use crate::config::Settings;
use crate::containers::{self, Demo};
use crate::io::ExitCode;
use crate::{calculator, functions, greeting, hello};

fn finish(command: &str, result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let broken_pipe = e
                .downcast_ref::<io::Error>()
                .is_some_and(|err| err.kind() == io::ErrorKind::BrokenPipe);
            if broken_pipe {
                tracing::debug!(target: "tribble", "{command}: stdout closed");
                return ExitCode::Success;
            }
            eprintln!("Error: {e:#}");
            ExitCode::GeneralError
        }
    }
}

/// Run a demo that only needs an output sink.
fn with_stdout(command: &str, demo: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = demo(&mut out).and_then(|()| out.flush());
    finish(command, result.map_err(anyhow::Error::from))
}

fn hello_session(prompt: &str) -> anyhow::Result<()> {
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    hello::run(&mut input, &mut out, prompt).context("interactive greeting failed")?;
    Ok(())
}

pub fn run_hello(settings: &Settings) -> ExitCode {
    finish("hello", hello_session(&settings.hello.prompt))
}

pub fn run_containers(only: Option<Demo>) -> ExitCode {
    with_stdout("containers", |mut out| match only {
        Some(demo) => demo.run(&mut out),
        None => containers::run_all(&mut out),
    })
}

pub fn run_functions(settings: &Settings) -> ExitCode {
    let precision = settings.display.average_precision;
    with_stdout("functions", |mut out| functions::run_demo(&mut out, precision))
}

pub fn run_calculator() -> ExitCode {
    with_stdout("calculator", |mut out| calculator::run_demo(&mut out))
}

pub fn run_greeting() -> ExitCode {
    with_stdout("greeting", |mut out| greeting::run_demo(&mut out))
}

pub fn run_greet(names: &[String]) -> ExitCode {
    with_stdout("greet", |out| {
        for line in greeting::greet_all(names) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    })
}
