//! Error types for the arithmetic helpers.

use thiserror::Error;

/// Errors from calculator and averaging functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot calculate average of empty list")]
    EmptySequence,

    #[error("Integer overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Not a finite number: {value}")]
    NonFinite { value: f64 },
}

pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

impl ArithmeticError {
    /// Machine-readable result code for JSON output.
    pub fn result_code(&self) -> crate::io::ResultCode {
        use crate::io::ResultCode;
        match self {
            Self::DivisionByZero => ResultCode::DivisionByZero,
            Self::EmptySequence => ResultCode::EmptyInput,
            Self::Overflow { .. } => ResultCode::Overflow,
            Self::NonFinite { .. } => ResultCode::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
        assert_eq!(
            ArithmeticError::EmptySequence.to_string(),
            "Cannot calculate average of empty list"
        );
        assert_eq!(
            ArithmeticError::Overflow { operation: "add" }.to_string(),
            "Integer overflow in add"
        );
        assert_eq!(
            ArithmeticError::NonFinite { value: f64::INFINITY }.to_string(),
            "Not a finite number: inf"
        );
    }

    #[test]
    fn test_non_finite_is_invalid_input() {
        use crate::io::{ExitCode, ResultCode};

        let err = ArithmeticError::NonFinite { value: f64::NAN };
        assert_eq!(err.result_code(), ResultCode::InvalidInput);
        assert_eq!(ExitCode::from(&err), ExitCode::InvalidArguments);
        assert_eq!(
            ExitCode::from(&ArithmeticError::EmptySequence),
            ExitCode::ArithmeticError
        );
    }
}
