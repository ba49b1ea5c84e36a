//! Suggested repayments that clear a set of balances.

use std::collections::BTreeMap;

use divvy_shared::types::{MemberId, Money};

use crate::balance::types::Transfer;

/// Suggests transfers that bring every balance to zero.
///
/// Greedy pairing: the largest outstanding debt repays the largest
/// outstanding credit until both sides are exhausted. Equal magnitudes
/// keep member-id order, so the plan is deterministic for a given set
/// of balances. Zero-sum input always clears completely; at most
/// `members - 1` transfers are produced.
#[must_use]
pub fn suggest_settlements(balances: &BTreeMap<MemberId, Money>) -> Vec<Transfer> {
    let mut creditors: Vec<(MemberId, Money)> = balances
        .iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(&id, &amount)| (id, amount))
        .collect();
    let mut debtors: Vec<(MemberId, Money)> = balances
        .iter()
        .filter(|(_, amount)| amount.is_negative())
        .map(|(&id, &amount)| (id, amount.abs()))
        .collect();

    // Stable sort keeps id order between equal magnitudes.
    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::new();
    let mut debtor = 0;
    let mut creditor = 0;
    while debtor < debtors.len() && creditor < creditors.len() {
        let amount = debtors[debtor].1.min(creditors[creditor].1);
        transfers.push(Transfer {
            from: debtors[debtor].0,
            to: creditors[creditor].0,
            amount,
        });
        debtors[debtor].1 -= amount;
        creditors[creditor].1 -= amount;
        if debtors[debtor].1.is_zero() {
            debtor += 1;
        }
        if creditors[creditor].1.is_zero() {
            creditor += 1;
        }
    }

    transfers
}
