//! Calculation history tracking.
//!
//! Provides ordered, append-only tracking of arithmetic results over the
//! lifetime of a calculator, following functional programming principles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The arithmetic operation that produced a history entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Get the operation's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// The infix symbol used when rendering a calculation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// Record of a single performed calculation.
///
/// Calculations are immutable values capturing the operands, the operation
/// applied, the result produced, and when the operation ran.
///
/// # Example
///
/// ```rust
/// use tally::core::{Calculation, Operation};
/// use chrono::Utc;
///
/// let calculation = Calculation {
///     operation: Operation::Add,
///     lhs: 2.0,
///     rhs: 3.0,
///     result: 5.0,
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(calculation.result, 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The operation performed
    pub operation: Operation,
    /// Left-hand operand
    pub lhs: f64,
    /// Right-hand operand
    pub rhs: f64,
    /// The value produced and returned to the caller
    pub result: f64,
    /// When the operation ran
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of performed calculations.
///
/// History is immutable - the `record` method returns a new history with the
/// calculation appended. Insertion order is chronological order; duplicates
/// are allowed and growth is unbounded until cleared.
///
/// # Example
///
/// ```rust
/// use tally::core::{Calculation, History, Operation};
/// use chrono::Utc;
///
/// let history = History::new();
///
/// let history = history.record(Calculation {
///     operation: Operation::Multiply,
///     lhs: 7.0,
///     rhs: 8.0,
///     result: 56.0,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.results(), vec![56.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a calculation, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the calculation appended as the last entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{Calculation, History, Operation};
    /// use chrono::Utc;
    ///
    /// let history = History::new();
    /// let new_history = history.record(Calculation {
    ///     operation: Operation::Add,
    ///     lhs: 1.0,
    ///     rhs: 2.0,
    ///     result: 3.0,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// assert_eq!(new_history.len(), 1);
    /// ```
    pub fn record(&self, calculation: Calculation) -> Self {
        let mut entries = self.entries.clone();
        entries.push(calculation);
        Self { entries }
    }

    /// Get all recorded calculations in order.
    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    /// Get the bare results in order, oldest first.
    ///
    /// Returns an owned copy so callers cannot mutate the history through it.
    pub fn results(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.result).collect()
    }

    /// The most recent calculation, if any.
    pub fn last(&self) -> Option<&Calculation> {
        self.entries.last()
    }

    /// Number of recorded calculations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the history contains no calculations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for History {
    /// Render the 1-based numbered history listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculation History:")?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "  {}: {}", index + 1, entry.result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculation(operation: Operation, lhs: f64, rhs: f64, result: f64) -> Calculation {
        Calculation {
            operation,
            lhs,
            rhs,
            result,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
        assert!(history.results().is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_appends_entry() {
        let history = History::new();

        let history = history.record(calculation(Operation::Add, 1.0, 2.0, 3.0));

        assert_eq!(history.len(), 1);
        assert_eq!(history.results(), vec![3.0]);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();

        let new_history = history.record(calculation(Operation::Multiply, 2.0, 4.0, 8.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn results_preserve_insertion_order() {
        let history = History::new()
            .record(calculation(Operation::Add, 1.0, 1.0, 2.0))
            .record(calculation(Operation::Subtract, 5.0, 1.0, 4.0))
            .record(calculation(Operation::Add, 1.0, 1.0, 2.0));

        assert_eq!(history.results(), vec![2.0, 4.0, 2.0]);
    }

    #[test]
    fn last_returns_most_recent_entry() {
        let history = History::new()
            .record(calculation(Operation::Add, 1.0, 1.0, 2.0))
            .record(calculation(Operation::Divide, 8.0, 2.0, 4.0));

        let last = history.last().unwrap();
        assert_eq!(last.operation, Operation::Divide);
        assert_eq!(last.result, 4.0);
    }

    #[test]
    fn display_numbers_entries_from_one() {
        let history = History::new()
            .record(calculation(Operation::Add, 1.0, 2.0, 3.0))
            .record(calculation(Operation::Multiply, 2.0, 4.0, 8.0));

        let listing = history.to_string();
        assert!(listing.starts_with("Calculation History:"));
        assert!(listing.contains("  1: 3"));
        assert!(listing.contains("  2: 8"));
    }

    #[test]
    fn operation_names_and_symbols() {
        assert_eq!(Operation::Add.name(), "add");
        assert_eq!(Operation::Divide.symbol(), "/");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(calculation(Operation::Add, 1.5, 2.5, 4.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
