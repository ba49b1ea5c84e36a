//! Expense service error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

use divvy_shared::error::AppError;
use divvy_shared::types::GroupId;

use crate::split::SplitError;

/// Errors that can occur while creating or querying expenses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    // ========== Validation Errors ==========
    /// The title is empty or whitespace-only.
    #[error("Expense title cannot be empty")]
    EmptyTitle,

    /// The title exceeds the configured length limit.
    #[error("Expense title cannot exceed {max} characters, got {length}")]
    TitleTooLong {
        /// Length of the rejected title, in characters.
        length: usize,
        /// The configured maximum.
        max: usize,
    },

    /// The expense date lies in the future.
    #[error("Expense date cannot be in the future: {date}")]
    DateInFuture {
        /// The rejected date.
        date: DateTime<Utc>,
    },

    /// The expense date is further back than the configured window.
    #[error("Expense date cannot be more than {max_days} days in the past: {date}")]
    DateTooOld {
        /// The rejected date.
        date: DateTime<Utc>,
        /// The configured backdating window, in days.
        max_days: i64,
    },

    // ========== Not Found Errors ==========
    /// The referenced group does not exist.
    #[error("Group not found: {group_id}")]
    GroupNotFound {
        /// The missing group.
        group_id: GroupId,
    },

    // ========== Split Errors ==========
    /// Split validation or reconciliation failed.
    #[error(transparent)]
    Split(#[from] SplitError),

    // ========== Infrastructure Errors ==========
    /// The backing store failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl ExpenseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "EMPTY_TITLE",
            Self::TitleTooLong { .. } => "TITLE_TOO_LONG",
            Self::DateInFuture { .. } => "DATE_IN_FUTURE",
            Self::DateTooOld { .. } => "DATE_TOO_OLD",
            Self::GroupNotFound { .. } => "GROUP_NOT_FOUND",
            Self::Split(err) => err.error_code(),
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::GroupNotFound { .. } => 404,
            Self::Database(_) => 500,
            Self::Split(err) => err.http_status_code(),
            _ => 400,
        }
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::GroupNotFound { .. } => Self::NotFound(err.to_string()),
            ExpenseError::Database(msg) => Self::Database(msg),
            ExpenseError::Split(inner) => inner.into(),
            _ => Self::Validation(err.to_string()),
        }
    }
}
