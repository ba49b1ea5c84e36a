//! Balance aggregation and settlement suggestions.
//!
//! Folds a group's expense history into signed net balances and, on top of
//! those, computes a minimal set of transfers that would settle the group.

pub mod aggregator;
pub mod settlement;
pub mod types;

#[cfg(test)]
mod aggregator_props;

pub use aggregator::aggregate_balances;
pub use settlement::suggest_settlements;
pub use types::{GroupBalances, SettlementPlan, Transfer};
