//! Starter programs for learning the basics.
//!
//! Each module is one small program: a greeting, container demos, functions,
//! a calculator and greeting helpers. The `tribble` binary exposes every
//! program as a subcommand.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod containers;
pub mod display;
pub mod error;
pub mod functions;
pub mod greeting;
pub mod hello;
pub mod io;
pub mod logging;

pub use config::Settings;
pub use error::{ArithmeticError, ArithmeticResult};
