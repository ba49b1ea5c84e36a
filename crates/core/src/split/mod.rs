//! Expense split calculation.
//!
//! This module implements the split calculator:
//! - Strategy types (equal / exact / percentage) matching the REST contract
//! - Largest-remainder allocation over integer minor units
//! - Structured validation and reconciliation errors

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::calculate_split;
pub use error::SplitError;
pub use types::{ExactShare, PercentageShare, SplitKind, SplitShare, SplitStrategy};
