//! Balance and settlement data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use divvy_shared::types::{MemberId, Money};

/// Net balances for one group, keyed by member.
///
/// A positive balance means the group owes the member; a negative balance
/// means the member owes the group. Balances always sum to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupBalances {
    /// Sum of all expense amounts folded in.
    pub total_amount: Money,
    /// Number of expenses folded in.
    pub expense_count: usize,
    /// Net balance per member, in member-id order.
    pub balances: BTreeMap<MemberId, Money>,
}

impl GroupBalances {
    /// Sums every member balance; zero for any well-formed history.
    #[must_use]
    pub fn net_total(&self) -> Money {
        self.balances.values().copied().sum()
    }
}

/// One suggested repayment from a debtor to a creditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Member paying the transfer.
    pub from: MemberId,
    /// Member receiving the transfer.
    pub to: MemberId,
    /// Transfer amount, always positive.
    pub amount: Money,
}

/// Balances plus the transfers that would clear them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementPlan {
    /// The balances being settled.
    pub balances: GroupBalances,
    /// Suggested repayments, largest debts first.
    pub transfers: Vec<Transfer>,
}
