//! Property-based tests for split calculation.
//!
//! The central claim of this module is exact reconciliation: however an
//! amount is divided, the resulting rows sum back to the amount bit-exactly.

use proptest::prelude::*;
use rust_decimal::Decimal;

use divvy_shared::types::{MemberId, Money};

use super::calculator::{PERCENT_TOTAL_UNITS, allocate_units, calculate_split};
use super::error::SplitError;
use super::types::{ExactShare, PercentageShare, SplitShare, SplitStrategy};

/// Strategy to generate a positive amount from 0.01 to 10,000,000.00.
fn positive_amount() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(Money::from_minor_units)
}

/// Strategy to generate between 1 and 12 distinct participants.
fn participants() -> impl Strategy<Value = Vec<MemberId>> {
    (1usize..=12).prop_map(|n| (0..n).map(|_| MemberId::new()).collect())
}

/// Strategy to generate non-negative allocation weights, at least one positive.
fn weights() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1_000_000, 1..=16)
        .prop_filter("at least one positive weight", |w| w.iter().any(|&x| x > 0))
}

fn row_total(rows: &[SplitShare]) -> Money {
    rows.iter().map(|row| row.amount).sum()
}

fn percentage_total(rows: &[SplitShare]) -> Decimal {
    rows.iter().map(|row| row.percentage).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Exact reconciliation
    // =========================================================================

    /// For any positive amount and any participant count, equal split rows
    /// sum back to the amount exactly and no two rows differ by more than
    /// one minor unit.
    #[test]
    fn prop_equal_reconciles_exactly(
        amount in positive_amount(),
        members in participants(),
    ) {
        let rows = calculate_split(
            amount,
            &SplitStrategy::Equal { participants: members.clone() },
        )
        .unwrap();

        prop_assert_eq!(rows.len(), members.len());
        prop_assert_eq!(row_total(&rows), amount);

        let min = rows.iter().map(|r| r.amount).min().unwrap();
        let max = rows.iter().map(|r| r.amount).max().unwrap();
        prop_assert!((max - min).minor_units() <= 1, "shares differ by more than one cent");
    }

    /// Equal split rows come back in participant input order.
    #[test]
    fn prop_equal_preserves_order(
        amount in positive_amount(),
        members in participants(),
    ) {
        let rows = calculate_split(
            amount,
            &SplitStrategy::Equal { participants: members.clone() },
        )
        .unwrap();

        let row_ids: Vec<MemberId> = rows.iter().map(|r| r.user_id).collect();
        prop_assert_eq!(row_ids, members);
    }

    /// Derived percentages total exactly 100.00 for equal splits, whatever
    /// the participant count.
    #[test]
    fn prop_equal_percentages_total_one_hundred(
        amount in positive_amount(),
        members in participants(),
    ) {
        let rows = calculate_split(
            amount,
            &SplitStrategy::Equal { participants: members },
        )
        .unwrap();

        prop_assert_eq!(percentage_total(&rows), Decimal::new(PERCENT_TOTAL_UNITS, 2));
    }

    /// Any way of carving an amount into non-negative exact rows is accepted
    /// and echoed back unchanged, with derived percentages totalling 100.00.
    #[test]
    fn prop_exact_accepts_any_partition(
        amount in positive_amount(),
        members in participants(),
    ) {
        // Carve the amount with the allocator itself; the partition is then
        // guaranteed to reconcile
        let ones = vec![1i64; members.len()];
        let parts = allocate_units(amount.minor_units(), &ones);
        let splits: Vec<ExactShare> = members
            .iter()
            .zip(&parts)
            .map(|(&user_id, &units)| ExactShare {
                user_id,
                amount: Money::from_minor_units(units),
            })
            .collect();

        let rows = calculate_split(amount, &SplitStrategy::Exact { splits }).unwrap();

        prop_assert_eq!(row_total(&rows), amount);
        for (row, &units) in rows.iter().zip(&parts) {
            prop_assert_eq!(row.amount, Money::from_minor_units(units));
        }
        prop_assert_eq!(percentage_total(&rows), Decimal::new(PERCENT_TOTAL_UNITS, 2));
    }

    /// Exact rows that miss the amount by any non-zero delta are rejected
    /// with a reconciliation error naming both totals.
    #[test]
    fn prop_exact_rejects_any_shortfall(
        amount in positive_amount(),
        members in participants(),
        delta in prop_oneof![(-10_000i64..0), (1i64..=10_000)],
    ) {
        let mut parts = allocate_units(amount.minor_units(), &vec![1i64; members.len()]);
        // Skew one row; shortfalls below zero are rejected as negative shares
        parts[0] += delta;
        prop_assume!(parts[0] >= 0);

        let splits: Vec<ExactShare> = members
            .iter()
            .zip(&parts)
            .map(|(&user_id, &units)| ExactShare {
                user_id,
                amount: Money::from_minor_units(units),
            })
            .collect();

        let err = calculate_split(amount, &SplitStrategy::Exact { splits }).unwrap_err();
        prop_assert_eq!(
            err,
            SplitError::AmountMismatch {
                expected: amount,
                actual: Money::from_minor_units(amount.minor_units() + delta),
            }
        );
    }

    /// Percentage rows built to total exactly 100.00 are always accepted and
    /// their derived amounts reconcile exactly.
    #[test]
    fn prop_percentage_reconciles_exactly(
        amount in positive_amount(),
        members in participants(),
        raw_weights in weights(),
    ) {
        // Normalize arbitrary weights into percentages totalling 100.00
        let count = members.len();
        let mut w = raw_weights;
        w.resize(count, 1);
        let pct_units = allocate_units(PERCENT_TOTAL_UNITS, &w);

        let splits: Vec<PercentageShare> = members
            .iter()
            .zip(&pct_units)
            .map(|(&user_id, &units)| PercentageShare {
                user_id,
                percentage: Decimal::new(units, 2),
            })
            .collect();

        let rows = calculate_split(amount, &SplitStrategy::Percentage { splits }).unwrap();
        prop_assert_eq!(row_total(&rows), amount);
    }

    // =========================================================================
    // Allocator invariants
    // =========================================================================

    /// The allocator hands out exactly `total`, never a unit more or less,
    /// for any non-negative weight vector.
    #[test]
    fn prop_allocate_units_sums_to_total(
        total in 0i64..1_000_000_000,
        w in weights(),
    ) {
        let shares = allocate_units(total, &w);
        prop_assert_eq!(shares.len(), w.len());
        prop_assert_eq!(shares.iter().sum::<i64>(), total);
    }

    /// Zero-weight rows never receive leftover units.
    #[test]
    fn prop_allocate_units_zero_weight_gets_zero(
        total in 1i64..1_000_000_000,
        w in weights(),
    ) {
        let shares = allocate_units(total, &w);
        for (&weight, &share) in w.iter().zip(&shares) {
            if weight == 0 {
                prop_assert_eq!(share, 0);
            }
        }
    }

    /// Allocation is monotone: a row with a larger weight never receives a
    /// smaller share than a row with a smaller weight... except by at most
    /// the one leftover unit the smaller row may have absorbed.
    #[test]
    fn prop_allocate_units_roughly_monotone(
        total in 0i64..1_000_000_000,
        w in weights(),
    ) {
        let shares = allocate_units(total, &w);
        for i in 0..w.len() {
            for j in 0..w.len() {
                if w[i] > w[j] {
                    prop_assert!(shares[i] + 1 >= shares[j]);
                }
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: a one-cent amount still reconciles.
    #[test]
    fn test_one_cent_over_three() {
        let members: Vec<MemberId> = (0..3).map(|_| MemberId::new()).collect();
        let rows = calculate_split(
            Money::from_minor_units(1),
            &SplitStrategy::Equal {
                participants: members,
            },
        )
        .unwrap();

        let amounts: Vec<i64> = rows.iter().map(|r| r.amount.minor_units()).collect();
        assert_eq!(amounts, vec![0, 0, 1]);
    }

    /// Specific example: weights dwarfing the total do not overflow.
    #[test]
    fn test_large_weights_no_overflow() {
        let shares = allocate_units(i64::MAX / 2, &[i64::MAX / 3, i64::MAX / 3]);
        assert_eq!(shares.iter().sum::<i64>(), i64::MAX / 2);
    }
}
