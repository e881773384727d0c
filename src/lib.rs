//! Tally: an arithmetic calculator with an audited history
//!
//! Tally follows a "pure core, imperative shell" structure: the one stateful
//! component is the [`Calculator`], which owns an append-only record of every
//! result it has produced, while the [`math`] module is a collection of pure
//! functions with no side effects.
//!
//! # Core Concepts
//!
//! - **Calculator**: owned mutable state, mutated only by its four arithmetic
//!   operations (append) and `clear_history` (reset)
//! - **History**: immutable record of performed calculations, duplicates
//!   allowed, insertion order = chronological order
//! - **Math utilities**: pure scalar and sequence functions that never touch
//!   calculator state
//!
//! Invalid inputs (a zero divisor, a negative square root or factorial, an
//! empty sequence) are signaled as `Result` errors at the detecting call and
//! never corrupt existing state.
//!
//! # Example
//!
//! ```rust
//! use tally::core::Calculator;
//! use tally::math;
//!
//! let mut calc = Calculator::new();
//!
//! let sum = calc.add(15.5, 24.3);
//! let product = calc.multiply(7.0, 8.0);
//! assert_eq!(product, 56.0);
//!
//! // A failed divide leaves the history untouched.
//! assert!(calc.divide(sum, 0.0).is_err());
//! assert_eq!(calc.history_len(), 2);
//!
//! // Pure utilities, independent of the calculator.
//! assert_eq!(math::power(2.0, 10), 1024.0);
//! assert!(math::is_prime(17));
//! ```

pub mod core;
pub mod math;

// Re-export commonly used types
pub use self::core::{CalcError, Calculation, Calculator, History, Operation};
pub use self::math::MathError;
