//! Calculator error types.

use thiserror::Error;

/// Errors that can occur during calculator operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Division with a zero divisor was requested
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}
