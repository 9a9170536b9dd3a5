//! Defining and calling functions: parameters, return values and errors.

use std::io::{self, Write};

use crate::error::{ArithmeticError, ArithmeticResult};

/// Return a greeting for `name`, interpolated verbatim.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Add two numbers together.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Arithmetic mean of `numbers`.
///
/// Accepts any numeric type that widens losslessly into `f64`, so both
/// `&[85, 92]` and `&[1.5, 2.5]` work.
///
/// # Errors
/// [`ArithmeticError::EmptySequence`] when `numbers` is empty,
/// [`ArithmeticError::NonFinite`] for an infinite or NaN input, and
/// [`ArithmeticError::Overflow`] when the sum leaves the `f64` range.
pub fn calculate_average<T>(numbers: &[T]) -> ArithmeticResult<f64>
where
    T: Copy + Into<f64>,
{
    if numbers.is_empty() {
        return Err(ArithmeticError::EmptySequence);
    }

    let mut sum = 0.0_f64;
    for &n in numbers {
        let value: f64 = n.into();
        if !value.is_finite() {
            return Err(ArithmeticError::NonFinite { value });
        }
        sum += value;
    }

    let average = sum / numbers.len() as f64;
    if !average.is_finite() {
        return Err(ArithmeticError::Overflow {
            operation: "average",
        });
    }
    Ok(average)
}

/// Demonstrate the functions above, including the empty-input error path.
///
/// `precision` is the number of decimals printed for the average.
pub fn run_demo<W: Write>(out: &mut W, precision: usize) -> io::Result<()> {
    writeln!(out, "{}", greet("Alice"))?;

    writeln!(out, "5 + 3 = {}", add(5, 3))?;

    let scores = [85, 92, 78, 90, 88];
    match calculate_average(&scores) {
        Ok(avg) => writeln!(out, "Average score: {avg:.precision$}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }

    let empty: [i32; 0] = [];
    if let Err(e) = calculate_average(&empty) {
        writeln!(out, "Error: {e}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_is_verbatim() {
        assert_eq!(greet("Alice"), "Hello, Alice!");
        assert_eq!(greet(""), "Hello, !");
        assert!(greet("José").contains("José"));
    }

    #[test]
    fn test_add() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(add(-5, 3), -2);
    }

    #[test]
    fn test_calculate_average() {
        assert_eq!(calculate_average(&[85, 92, 78, 90, 88]), Ok(86.6));
        assert_eq!(calculate_average(&[42]), Ok(42.0));
        assert_eq!(calculate_average(&[-2.5_f64]), Ok(-2.5));
        assert_eq!(calculate_average(&[1.0_f64, 2.0]), Ok(1.5));
    }

    #[test]
    fn test_calculate_average_empty() {
        assert_eq!(
            calculate_average::<f64>(&[]),
            Err(ArithmeticError::EmptySequence)
        );
    }

    #[test]
    fn test_calculate_average_rejects_non_finite() {
        assert_eq!(
            calculate_average(&[1.0, f64::INFINITY]),
            Err(ArithmeticError::NonFinite {
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            calculate_average(&[f64::NAN, 2.0]),
            Err(ArithmeticError::NonFinite { value }) if value.is_nan()
        ));
        assert_eq!(
            calculate_average(&[f64::MAX, f64::MAX]),
            Err(ArithmeticError::Overflow {
                operation: "average"
            })
        );
    }

    #[test]
    fn test_run_demo() {
        let mut out = Vec::new();
        run_demo(&mut out, 2).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "Hello, Alice!\n\
             5 + 3 = 8\n\
             Average score: 86.60\n\
             Error: Cannot calculate average of empty list\n"
        );
    }

    #[test]
    fn test_run_demo_precision() {
        let mut out = Vec::new();
        run_demo(&mut out, 0).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Average score: 87\n"));
    }
}
