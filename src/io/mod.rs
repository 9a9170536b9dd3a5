//! Output handling for the CLI.
//!
//! This module provides:
//! - Exit codes shared by all commands
//! - Text / JSON output selection
//! - The JSON envelope used by `--json`

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, MessageType, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
