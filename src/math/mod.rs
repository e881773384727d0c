//! Stateless math utilities.
//!
//! A collection of pure functions over scalars and finite sequences of
//! numbers. Nothing here observes or mutates calculator state; each call
//! is a pure function of its inputs.

mod error;
mod scalar;
mod sequence;

pub use error::MathError;
pub use scalar::{factorial, is_prime, power, square_root};
pub use sequence::{average, maximum, minimum};
