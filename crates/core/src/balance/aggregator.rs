//! Folds expense history into net balances.

use std::collections::BTreeMap;

use divvy_shared::types::Money;

use crate::balance::types::GroupBalances;
use crate::expense::types::Expense;

/// Folds a group's expenses into per-member net balances.
///
/// Each expense credits its payer with the full amount and debits every
/// split row with its share. A payer who also participates nets out to
/// `amount - own share` from that expense. Members appear in the result
/// even when their credits and debits cancel to zero.
///
/// Because split rows reconcile exactly to their expense amount, the
/// resulting balances always sum to zero.
///
/// # Examples
///
/// ```
/// use divvy_core::balance::aggregate_balances;
///
/// let balances = aggregate_balances(&[]);
/// assert_eq!(balances.expense_count, 0);
/// assert!(balances.balances.is_empty());
/// ```
#[must_use]
pub fn aggregate_balances(expenses: &[Expense]) -> GroupBalances {
    let mut balances: BTreeMap<_, Money> = BTreeMap::new();
    let mut total_amount = Money::ZERO;

    for expense in expenses {
        total_amount += expense.amount;
        *balances.entry(expense.paid_by).or_default() += expense.amount;
        for split in &expense.splits {
            *balances.entry(split.user_id).or_default() -= split.amount;
        }
    }

    GroupBalances {
        total_amount,
        expense_count: expenses.len(),
        balances,
    }
}
