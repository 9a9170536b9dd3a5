//! Process exit codes shared by all commands.

use crate::error::ArithmeticError;

/// Exit status reported by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ArithmeticError = 3,
    ConfigError = 4,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> u8 {
        code as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl From<&ArithmeticError> for ExitCode {
    fn from(err: &ArithmeticError) -> Self {
        err.result_code().exit_code()
    }
}
