//! Groups, members, and membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use divvy_shared::types::{GroupId, MemberId, Money};

/// A person who can belong to groups and participate in splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique member id.
    pub id: MemberId,
    /// Display name, used for reporting.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// One member's membership in one group.
///
/// Membership is many-to-many: the same member can belong to several groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// The member.
    pub member: Member,
    /// When the member joined the group.
    pub joined_at: DateTime<Utc>,
}

/// A collection of members who share expenses.
///
/// Expenses are not embedded here; they are fetched with their split rows
/// through the persistence port. Membership order is the store's insertion
/// order and drives equal-split participant order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique group id.
    pub id: GroupId,
    /// Group name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Members, unique by id.
    pub members: Vec<GroupMember>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Returns the number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns member ids in membership order.
    #[must_use]
    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|gm| gm.member.id).collect()
    }

    /// Returns true if the member belongs to this group.
    #[must_use]
    pub fn is_member(&self, member_id: MemberId) -> bool {
        self.members.iter().any(|gm| gm.member.id == member_id)
    }
}

/// Read-time summary of a group: membership and spend statistics.
///
/// Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    /// The group id.
    pub id: GroupId,
    /// Group name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Number of members.
    pub member_count: usize,
    /// Number of expenses recorded.
    pub expense_count: usize,
    /// Sum of all expense amounts.
    pub total_expenses: Money,
}
