//! Core calculator types and logic.
//!
//! This module contains the stateful heart of the crate:
//! - The `Calculator` with its owned, append-only history
//! - The `History` record of performed calculations
//! - Calculator error definitions
//!
//! The calculator is the only stateful component; everything it records
//! is an immutable `Calculation` value.

mod calculator;
mod error;
mod history;

pub use calculator::Calculator;
pub use error::CalcError;
pub use history::{Calculation, History, Operation};
