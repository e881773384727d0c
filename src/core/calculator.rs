//! The calculator: owned state plus arithmetic operations.
//!
//! A `Calculator` owns its history exclusively. Every successful arithmetic
//! operation appends exactly one entry whose result equals the returned
//! value; a failed operation leaves the history untouched.

use super::error::CalcError;
use super::history::{Calculation, History, Operation};
use chrono::Utc;

/// An arithmetic calculator that records every result it produces.
///
/// Created empty, mutated only through its four arithmetic operations
/// (append) and [`clear_history`](Calculator::clear_history) (reset).
///
/// # Example
///
/// ```rust
/// use tally::core::Calculator;
///
/// let mut calc = Calculator::new();
///
/// let sum = calc.add(15.5, 24.3);
/// let quotient = calc.divide(84.0, 12.0).unwrap();
///
/// assert_eq!(quotient, 7.0);
/// assert_eq!(calc.history_len(), 2);
/// assert_eq!(calc.history().results().last(), Some(&7.0));
///
/// // A zero divisor fails without touching the history.
/// assert!(calc.divide(sum, 0.0).is_err());
/// assert_eq!(calc.history_len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    /// Create a calculator with an empty history.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Add two numbers, recording the result.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record(Operation::Add, a, b, a + b)
    }

    /// Subtract `b` from `a`, recording the result.
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.record(Operation::Subtract, a, b, a - b)
    }

    /// Multiply two numbers, recording the result.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record(Operation::Multiply, a, b, a * b)
    }

    /// Divide `a` by `b`, recording the result on success.
    ///
    /// Fails with [`CalcError::DivisionByZero`] when `b == 0`; in that case
    /// nothing is appended to the history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{CalcError, Calculator};
    ///
    /// let mut calc = Calculator::new();
    ///
    /// assert_eq!(calc.divide(84.0, 12.0), Ok(7.0));
    /// assert_eq!(calc.divide(10.0, 0.0), Err(CalcError::DivisionByZero));
    /// assert_eq!(calc.history_len(), 1);
    /// ```
    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.record(Operation::Divide, a, b, a / b))
    }

    /// Read-only view of the calculation history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of calculations performed since creation or the last clear.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Reset the history to empty.
    ///
    /// Idempotent - clearing an empty history is a no-op.
    pub fn clear_history(&mut self) {
        self.history = History::new();
    }

    fn record(&mut self, operation: Operation, lhs: f64, rhs: f64, result: f64) -> f64 {
        self.history = self.history.record(Calculation {
            operation,
            lhs,
            rhs,
            result,
            timestamp: Utc::now(),
        });
        result
    }
}
