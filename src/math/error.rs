//! Math utility error types.

use thiserror::Error;

/// Errors that can occur when a math utility rejects its input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    /// Square root of a negative number was requested
    #[error("Cannot calculate square root of negative number: {0}")]
    NegativeSquareRoot(f64),

    /// Factorial of a negative number was requested
    #[error("Factorial is not defined for negative numbers: {0}")]
    NegativeFactorial(i64),

    /// Factorial result does not fit in the result type
    #[error("Factorial of {0} overflows")]
    FactorialOverflow(i64),

    /// A sequence operation was given no values to work with
    #[error("Cannot compute over an empty sequence")]
    EmptySequence,
}
