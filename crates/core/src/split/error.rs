//! Split calculation error types.
//!
//! This module defines all errors that can occur while validating split input
//! and computing split rows, including reconciliation failures where supplied
//! totals diverge from the expected sum.

use rust_decimal::Decimal;
use thiserror::Error;

use divvy_shared::error::AppError;
use divvy_shared::types::{MemberId, Money};

/// Errors that can occur during split calculation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    // ========== Validation Errors ==========
    /// Expense amount must be strictly positive.
    #[error("Expense amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: Money,
    },

    /// At least one participant is required.
    #[error("At least one participant is required")]
    NoParticipants,

    /// The same participant appears more than once.
    #[error("Duplicate participant: {user_id}")]
    DuplicateParticipant {
        /// The repeated member.
        user_id: MemberId,
    },

    /// An exact share amount is negative.
    #[error("Share amount for {user_id} cannot be negative, got {amount}")]
    NegativeShare {
        /// The member with the negative share.
        user_id: MemberId,
        /// The rejected amount.
        amount: Money,
    },

    /// A percentage is outside 0..=100.
    #[error("Percentage for {user_id} must be between 0 and 100, got {percentage}")]
    PercentageOutOfRange {
        /// The member with the out-of-range percentage.
        user_id: MemberId,
        /// The rejected percentage.
        percentage: Decimal,
    },

    // ========== Reconciliation Errors ==========
    /// Exact shares do not sum to the expense amount.
    #[error("Split amounts must sum to the expense amount. Expected: {expected}, actual: {actual}")]
    AmountMismatch {
        /// The expense amount the shares must total.
        expected: Money,
        /// What the supplied shares actually total.
        actual: Money,
    },

    /// Percentages do not sum to 100.
    #[error("Split percentages must sum to 100. Expected: {expected}, actual: {actual}")]
    PercentageSumMismatch {
        /// The required total (100).
        expected: Decimal,
        /// What the supplied percentages actually total.
        actual: Decimal,
    },
}

impl SplitError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount { .. } => "NON_POSITIVE_AMOUNT",
            Self::NoParticipants => "NO_PARTICIPANTS",
            Self::DuplicateParticipant { .. } => "DUPLICATE_PARTICIPANT",
            Self::NegativeShare { .. } => "NEGATIVE_SHARE",
            Self::PercentageOutOfRange { .. } => "PERCENTAGE_OUT_OF_RANGE",
            Self::AmountMismatch { .. } => "AMOUNT_MISMATCH",
            Self::PercentageSumMismatch { .. } => "PERCENTAGE_SUM_MISMATCH",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Every split failure is caused by caller input, so everything maps
    /// to 400 Bad Request.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        400
    }

    /// Returns true if this error is a reconciliation failure, i.e. supplied
    /// totals diverge from the expected sum.
    #[must_use]
    pub const fn is_reconciliation(&self) -> bool {
        matches!(
            self,
            Self::AmountMismatch { .. } | Self::PercentageSumMismatch { .. }
        )
    }
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        if err.is_reconciliation() {
            Self::Reconciliation(err.to_string())
        } else {
            Self::Validation(err.to_string())
        }
    }
}
