//! Domain types for split calculation.
//!
//! The split strategy is a tagged union keyed by `splitType`, matching the
//! JSON contract of the surrounding REST layer. An unrecognized `splitType`
//! fails deserialization at the boundary before any calculation runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use divvy_shared::types::{MemberId, Money};

/// Closed enumeration of split strategies, as persisted on an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitKind {
    /// Divide the amount evenly across participants.
    Equal,
    /// Caller supplies each participant's amount.
    Exact,
    /// Caller supplies each participant's percentage of the total.
    Percentage,
}

impl std::fmt::Display for SplitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Exact => write!(f, "exact"),
            Self::Percentage => write!(f, "percentage"),
        }
    }
}

/// Calculator input: one strategy with its per-strategy data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "splitType", rename_all = "lowercase")]
pub enum SplitStrategy {
    /// Divide evenly across the listed participants.
    Equal {
        /// Participants in output order.
        participants: Vec<MemberId>,
    },
    /// Caller-supplied amounts, one per participant.
    Exact {
        /// Amount rows in output order.
        splits: Vec<ExactShare>,
    },
    /// Caller-supplied percentages, one per participant.
    Percentage {
        /// Percentage rows in output order.
        splits: Vec<PercentageShare>,
    },
}

impl SplitStrategy {
    /// Returns the strategy tag.
    #[must_use]
    pub const fn kind(&self) -> SplitKind {
        match self {
            Self::Equal { .. } => SplitKind::Equal,
            Self::Exact { .. } => SplitKind::Exact,
            Self::Percentage { .. } => SplitKind::Percentage,
        }
    }
}

/// Caller-supplied exact amount for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactShare {
    /// The owing member.
    pub user_id: MemberId,
    /// This participant's share of the expense amount.
    pub amount: Money,
}

/// Caller-supplied percentage for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageShare {
    /// The owing member.
    pub user_id: MemberId,
    /// Percentage of the total, 0 to 100.
    pub percentage: Decimal,
}

/// One participant's computed share of one expense.
///
/// Rows of one expense sum exactly to the expense amount; percentages carry
/// two decimal places and total 100 within 0.01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitShare {
    /// The owing member.
    pub user_id: MemberId,
    /// This participant's share of the expense amount.
    pub amount: Money,
    /// This participant's percentage of the total.
    pub percentage: Decimal,
}
