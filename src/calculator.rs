//! A simple calculator with basic arithmetic operations.
//!
//! The free functions mirror what a beginner writes first. [`Operation`]
//! wraps them for the `calc` command, where operands come from the user and
//! must not panic on overflow.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{ArithmeticError, ArithmeticResult};

/// Add two integers.
///
/// ```
/// assert_eq!(tribble::calculator::add(2, 3), 5);
/// assert_eq!(tribble::calculator::add(-1, 1), 0);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Subtract `b` from `a`.
///
/// ```
/// assert_eq!(tribble::calculator::subtract(10, 20), -10);
/// ```
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Multiply two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
///
/// ```
/// use tribble::calculator::divide;
/// assert_eq!(divide(7.0, 2.0), Ok(3.5));
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> ArithmeticResult<f64> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Calculator operation selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Result of evaluating an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Integer(i64),
    Real(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" on whole numbers
            Self::Real(x) => write!(f, "{x:?}"),
        }
    }
}

impl Operation {
    /// Name used in messages and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Infix symbol for display (`5 + 3`).
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Evaluate on two integer operands.
    ///
    /// Integer operations are checked and report overflow instead of panicking.
    /// Division is carried out in floating point.
    pub fn evaluate(&self, a: i64, b: i64) -> ArithmeticResult<Outcome> {
        let overflow = || ArithmeticError::Overflow {
            operation: self.as_str(),
        };
        match self {
            Self::Add => a.checked_add(b).map(Outcome::Integer).ok_or_else(overflow),
            Self::Subtract => a.checked_sub(b).map(Outcome::Integer).ok_or_else(overflow),
            Self::Multiply => a.checked_mul(b).map(Outcome::Integer).ok_or_else(overflow),
            Self::Divide => divide(a as f64, b as f64).map(Outcome::Real),
        }
    }
}

/// Print the calculator walkthrough.
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Simple Calculator Demo")?;
    writeln!(out, "{}", "=".repeat(40))?;

    writeln!(out, "5 + 3 = {}", add(5, 3))?;
    writeln!(out, "10 - 4 = {}", subtract(10, 4))?;
    writeln!(out, "6 * 7 = {}", multiply(6, 7))?;

    for (a, b) in [(15, 3), (7, 2)] {
        match divide(a as f64, b as f64) {
            Ok(q) => writeln!(out, "{a} / {b} = {}", Outcome::Real(q))?,
            Err(e) => writeln!(out, "{a} / {b}: Error: {e}")?,
        }
    }

    Ok(())
}
