//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns an
//! [`ExitCode`](crate::io::ExitCode).

pub mod average;
pub mod calc;
pub mod demos;
pub mod init;
