//! Property-based tests for balance aggregation and settlement.

use chrono::Utc;
use proptest::prelude::*;

use divvy_shared::types::{ExpenseId, GroupId, MemberId, Money};

use super::aggregator::aggregate_balances;
use super::settlement::suggest_settlements;
use crate::expense::types::Expense;
use crate::split::{calculate_split, SplitKind, SplitStrategy};

/// Strategy to generate a pool of distinct members.
fn members(max: usize) -> impl Strategy<Value = Vec<MemberId>> {
    (1..=max).prop_map(|count| (0..count).map(|_| MemberId::new()).collect())
}

/// Strategy to generate an expense amount from 0.01 to 10,000,000.00.
fn amount() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(Money::from_minor_units)
}

/// Strategy to generate an expense history over a shared member pool.
///
/// Each expense picks a payer and a participant prefix from the pool and
/// splits its amount equally, so every history reconciles row-for-row.
fn history() -> impl Strategy<Value = Vec<Expense>> {
    members(8).prop_flat_map(|pool| {
        let size = pool.len();
        prop::collection::vec((amount(), 0..size, 1..=size), 0..12).prop_map(
            move |specs| {
                specs
                    .into_iter()
                    .map(|(amount, payer, participant_count)| {
                        make_equal_expense(
                            amount,
                            pool[payer],
                            &pool[..participant_count],
                        )
                    })
                    .collect()
            },
        )
    })
}

/// Helper to build an equal-split expense over the given participants.
fn make_equal_expense(amount: Money, paid_by: MemberId, participants: &[MemberId]) -> Expense {
    let strategy = SplitStrategy::Equal {
        participants: participants.to_vec(),
    };
    let splits = calculate_split(amount, &strategy)
        .unwrap_or_else(|e| panic!("generated expense must split cleanly: {e}"));
    let now = Utc::now();
    Expense {
        id: ExpenseId::new(),
        group_id: GroupId::new(),
        title: "Generated expense".to_string(),
        description: None,
        amount,
        paid_by,
        split_kind: SplitKind::Equal,
        date: now,
        splits,
        created_at: now,
        updated_at: now,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balances over any reconciling history sum to exactly zero.
    #[test]
    fn prop_balances_sum_to_zero(history in history()) {
        let balances = aggregate_balances(&history);
        prop_assert_eq!(balances.net_total(), Money::ZERO);
    }

    /// The aggregate total matches the sum of the expense amounts.
    #[test]
    fn prop_total_matches_expense_amounts(history in history()) {
        let balances = aggregate_balances(&history);
        let expected: Money = history.iter().map(|e| e.amount).sum();
        prop_assert_eq!(balances.total_amount, expected);
        prop_assert_eq!(balances.expense_count, history.len());
    }

    /// Folding is order-independent: any permutation yields the same balances.
    #[test]
    fn prop_aggregation_ignores_history_order(history in history()) {
        let forward = aggregate_balances(&history);
        let mut reversed = history;
        reversed.reverse();
        let backward = aggregate_balances(&reversed);
        prop_assert_eq!(forward.balances, backward.balances);
        prop_assert_eq!(forward.total_amount, backward.total_amount);
    }

    /// Suggested transfers clear every balance to zero.
    #[test]
    fn prop_settlement_clears_all_balances(history in history()) {
        let balances = aggregate_balances(&history);
        let transfers = suggest_settlements(&balances.balances);

        let mut remaining = balances.balances.clone();
        for transfer in &transfers {
            prop_assert!(transfer.amount.is_positive());
            *remaining.entry(transfer.from).or_default() += transfer.amount;
            *remaining.entry(transfer.to).or_default() -= transfer.amount;
        }
        prop_assert!(remaining.values().all(|b| b.is_zero()));
    }

    /// A settlement plan never needs more transfers than members minus one.
    #[test]
    fn prop_settlement_uses_at_most_members_minus_one(history in history()) {
        let balances = aggregate_balances(&history);
        let transfers = suggest_settlements(&balances.balances);
        prop_assert!(
            balances.balances.is_empty() || transfers.len() < balances.balances.len(),
            "{} transfers for {} members",
            transfers.len(),
            balances.balances.len()
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: one payer outside the participant list.
    #[test]
    fn test_external_payer_history_sums_to_zero() {
        let payer = MemberId::new();
        let participants = vec![MemberId::new(), MemberId::new()];
        let history = vec![make_equal_expense(
            Money::from_minor_units(999),
            payer,
            &participants,
        )];

        let balances = aggregate_balances(&history);
        assert_eq!(balances.net_total(), Money::ZERO);
        assert_eq!(balances.balances.len(), 3);
    }

    /// Specific example: self-paid expense settles without transfers.
    #[test]
    fn test_self_paid_expense_needs_no_transfers() {
        let solo = MemberId::new();
        let history = vec![make_equal_expense(
            Money::from_minor_units(5000),
            solo,
            &[solo],
        )];

        let balances = aggregate_balances(&history);
        assert_eq!(balances.balances[&solo], Money::ZERO);
        assert!(suggest_settlements(&balances.balances).is_empty());
    }
}
