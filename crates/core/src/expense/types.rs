//! Expense domain and input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use divvy_shared::types::{ExpenseId, GroupId, MemberId, Money};

use crate::split::{ExactShare, PercentageShare, SplitKind, SplitShare};

/// A single spend event, owning its split rows.
///
/// An expense and its rows are created together and persisted atomically;
/// rows cannot outlive the expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique expense id, assigned at creation, immutable.
    pub id: ExpenseId,
    /// The owning group.
    pub group_id: GroupId,
    /// Short description of the spend, non-empty.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Total amount fronted by the payer.
    pub amount: Money,
    /// The member who fronted the money.
    pub paid_by: MemberId,
    /// Which strategy produced the split rows.
    #[serde(rename = "splitType")]
    pub split_kind: SplitKind,
    /// When the expense occurred.
    pub date: DateTime<Utc>,
    /// One row per participant, in participant order.
    pub splits: Vec<SplitShare>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp; equals `created_at` until mutated.
    pub updated_at: DateTime<Utc>,
}

/// Request to create an expense.
///
/// The split input flattens into the request body, so the wire shape is
/// `{"title": ..., "amount": ..., "paidBy": ..., "splitType": "exact",
/// "splits": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseInput {
    /// The owning group.
    pub group_id: GroupId,
    /// Short description of the spend.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Total amount fronted by the payer.
    pub amount: Money,
    /// The member who fronted the money.
    pub paid_by: MemberId,
    /// How to divide the amount.
    #[serde(flatten)]
    pub split: SplitInput,
    /// When the expense occurred; defaults to now.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Split instructions on an expense request, tagged by `splitType`.
///
/// `Equal` participants are optional: when absent, the whole group membership
/// participates; when present, they override it with an explicit subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "splitType", rename_all = "lowercase")]
pub enum SplitInput {
    /// Divide evenly, over the whole group or an explicit participant list.
    Equal {
        /// Optional explicit participants; `None` means every group member.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        participants: Option<Vec<MemberId>>,
    },
    /// Caller-supplied amounts.
    Exact {
        /// Amount rows in output order.
        splits: Vec<ExactShare>,
    },
    /// Caller-supplied percentages.
    Percentage {
        /// Percentage rows in output order.
        splits: Vec<PercentageShare>,
    },
}

impl SplitInput {
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
