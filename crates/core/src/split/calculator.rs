//! Split calculation using the Largest Remainder Method.
//!
//! All arithmetic runs on integer minor units, so every strategy produces
//! rows that sum EXACTLY to the expense amount (no cents lost or invented).
//!
//! The Largest Remainder Method works by:
//! 1. Give each participant the floor of their proportional share
//! 2. Count the minor units left over (always fewer than the participants)
//! 3. Hand one leftover unit each to the rows with the largest fractional
//!    parts, later rows first on ties
//!
//! With equal weights every fractional part ties, so the leftover cents land
//! on the LAST participants: `100.00 / 3 -> 33.33, 33.33, 33.34`.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use divvy_shared::types::{MemberId, Money};

use super::error::SplitError;
use super::types::{ExactShare, PercentageShare, SplitShare, SplitStrategy};

/// One hundred percent, in hundredths of a percent.
pub(crate) const PERCENT_TOTAL_UNITS: i64 = 10_000;

/// Accepted deviation of a supplied percentage total, in hundredths of a
/// percent. `33.33 + 33.33 + 33.33` totals 99.99 and is accepted.
const PERCENT_SUM_TOLERANCE_UNITS: i64 = 1;

/// Splits `amount` across participants according to `strategy`.
///
/// Rows preserve participant input order, and their amounts sum exactly to
/// `amount` for every accepted input. Percentages carry two decimal places
/// and total 100 within 0.01.
///
/// # Errors
///
/// Returns a [`SplitError`] when the amount is not positive, the participant
/// list is empty or contains duplicates, or supplied exact/percentage rows
/// fail to reconcile.
///
/// # Example
///
/// ```
/// use divvy_core::split::{SplitStrategy, calculate_split};
/// use divvy_shared::types::{MemberId, Money};
///
/// let participants = vec![MemberId::new(), MemberId::new(), MemberId::new()];
/// let rows = calculate_split(
///     Money::from_minor_units(10_000),
///     &SplitStrategy::Equal { participants },
/// )
/// .unwrap();
///
/// let total: Money = rows.iter().map(|row| row.amount).sum();
/// assert_eq!(total, Money::from_minor_units(10_000));
/// ```
pub fn calculate_split(
    amount: Money,
    strategy: &SplitStrategy,
) -> Result<Vec<SplitShare>, SplitError> {
    if !amount.is_positive() {
        return Err(SplitError::NonPositiveAmount { amount });
    }

    match strategy {
        SplitStrategy::Equal { participants } => split_equal(amount, participants),
        SplitStrategy::Exact { splits } => split_exact(amount, splits),
        SplitStrategy::Percentage { splits } => split_percentage(amount, splits),
    }
}

/// Divides the amount evenly; the last `amount mod n` participants absorb one
/// extra minor unit each. Percentages get the same treatment against 100.00.
fn split_equal(amount: Money, participants: &[MemberId]) -> Result<Vec<SplitShare>, SplitError> {
    ensure_distinct_participants(participants.iter().copied())?;

    let ones = vec![1i64; participants.len()];
    let amounts = allocate_units(amount.minor_units(), &ones);
    let percentages = allocate_units(PERCENT_TOTAL_UNITS, &ones);

    Ok(build_rows(
        participants.iter().copied(),
        &amounts,
        &percentages,
    ))
}

/// Echoes caller-supplied amounts after verifying they total the expense
/// amount; percentages are derived from each share's weight.
fn split_exact(amount: Money, splits: &[ExactShare]) -> Result<Vec<SplitShare>, SplitError> {
    ensure_distinct_participants(splits.iter().map(|s| s.user_id))?;

    for share in splits {
        if share.amount.is_negative() {
            return Err(SplitError::NegativeShare {
                user_id: share.user_id,
                amount: share.amount,
            });
        }
    }

    let actual: Money = splits.iter().map(|s| s.amount).sum();
    if actual != amount {
        return Err(SplitError::AmountMismatch {
            expected: amount,
            actual,
        });
    }

    let weights: Vec<i64> = splits.iter().map(|s| s.amount.minor_units()).collect();
    let percentages = allocate_units(PERCENT_TOTAL_UNITS, &weights);

    Ok(build_rows(
        splits.iter().map(|s| s.user_id),
        &weights,
        &percentages,
    ))
}

/// Derives amounts from caller-supplied percentages after quantizing them to
/// hundredths of a percent and verifying they total 100 within tolerance.
/// Amounts reconcile exactly even when the percentages total 99.99 or 100.01.
fn split_percentage(
    amount: Money,
    splits: &[PercentageShare],
) -> Result<Vec<SplitShare>, SplitError> {
    ensure_distinct_participants(splits.iter().map(|s| s.user_id))?;

    let mut weights = Vec::with_capacity(splits.len());
    for share in splits {
        let units = percent_units(share.percentage).ok_or(SplitError::PercentageOutOfRange {
            user_id: share.user_id,
            percentage: share.percentage,
        })?;
        weights.push(units);
    }

    let actual_units: i64 = weights.iter().sum();
    if (actual_units - PERCENT_TOTAL_UNITS).abs() > PERCENT_SUM_TOLERANCE_UNITS {
        return Err(SplitError::PercentageSumMismatch {
            expected: Decimal::ONE_HUNDRED,
            actual: Decimal::new(actual_units, 2),
        });
    }

    let amounts = allocate_units(amount.minor_units(), &weights);

    Ok(build_rows(
        splits.iter().map(|s| s.user_id),
        &amounts,
        &weights,
    ))
}

/// Distributes `total` units proportionally to `weights`, returning one share
/// per weight that together sum EXACTLY to `total`.
///
/// Each share starts at the floor of its proportional part; leftover units go
/// to the largest fractional remainders, later indices first on ties. An
/// all-zero weight vector distributes equally. `total` and every weight must
/// be non-negative.
pub(crate) fn allocate_units(total: i64, weights: &[i64]) -> Vec<i64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weight_sum: i128 = weights.iter().map(|&w| i128::from(w)).sum();
    if weight_sum == 0 {
        let ones = vec![1i64; weights.len()];
        return allocate_units(total, &ones);
    }

    let total_wide = i128::from(total);
    let mut shares = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    let mut allocated: i128 = 0;

    for (index, &weight) in weights.iter().enumerate() {
        let numerator = total_wide * i128::from(weight);
        let base = numerator / weight_sum;
        allocated += base;
        shares.push(base);
        remainders.push((index, numerator % weight_sum));
    }

    // Fewer leftover units than weights, by construction
    let mut leftover = total_wide - allocated;

    // Largest fractional remainder first; ties go to later participants
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    for (index, _) in remainders {
        if leftover == 0 {
            break;
        }
        shares[index] += 1;
        leftover -= 1;
    }

    shares
        .into_iter()
        .map(|share| i64::try_from(share).unwrap_or(i64::MAX))
        .collect()
}

/// Quantizes a boundary percentage to hundredths of a percent using banker's
/// rounding. Returns `None` outside 0..=100.
fn percent_units(percentage: Decimal) -> Option<i64> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return None;
    }
    (percentage * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
}

fn ensure_distinct_participants<I>(ids: I) -> Result<(), SplitError>
where
    I: IntoIterator<Item = MemberId>,
{
    let mut seen = HashSet::new();
    let mut empty = true;
    for id in ids {
        empty = false;
        if !seen.insert(id) {
            return Err(SplitError::DuplicateParticipant { user_id: id });
        }
    }
    if empty {
        return Err(SplitError::NoParticipants);
    }
    Ok(())
}

fn build_rows<I>(ids: I, amounts: &[i64], percentage_units: &[i64]) -> Vec<SplitShare>
where
    I: IntoIterator<Item = MemberId>,
{
    ids.into_iter()
        .zip(amounts.iter().zip(percentage_units))
        .map(|(user_id, (&units, &pct_units))| SplitShare {
            user_id,
            amount: Money::from_minor_units(units),
            percentage: Decimal::new(pct_units, 2),
        })
        .collect()
}
