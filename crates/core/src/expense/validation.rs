//! Request validation for expense creation.

use chrono::{DateTime, Duration, Utc};

use divvy_shared::config::LimitsConfig;

use crate::expense::error::ExpenseError;
use crate::expense::types::CreateExpenseInput;

/// Validation limits for expense requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseLimits {
    /// Maximum title length, in characters.
    pub max_title_chars: usize,
    /// How far an expense date may lie in the past, in days.
    pub max_backdate_days: i64,
}

impl Default for ExpenseLimits {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_backdate_days: 365,
        }
    }
}

impl From<&LimitsConfig> for ExpenseLimits {
    fn from(config: &LimitsConfig) -> Self {
        Self {
            max_title_chars: config.max_title_length,
            max_backdate_days: config.max_backdate_days,
        }
    }
}

/// Validates an expense request against the given limits.
///
/// Checks the title and the date. The amount and the split rows are
/// validated by the split calculator, which sees them together.
///
/// The date window is inclusive at both ends: a date equal to `now` and a
/// date exactly `max_backdate_days` old both pass.
pub fn validate_new_expense(
    input: &CreateExpenseInput,
    now: DateTime<Utc>,
    limits: &ExpenseLimits,
) -> Result<(), ExpenseError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ExpenseError::EmptyTitle);
    }
    let length = title.chars().count();
    if length > limits.max_title_chars {
        return Err(ExpenseError::TitleTooLong {
            length,
            max: limits.max_title_chars,
        });
    }

    if let Some(date) = input.date {
        if date > now {
            return Err(ExpenseError::DateInFuture { date });
        }
        if now - date > Duration::days(limits.max_backdate_days) {
            return Err(ExpenseError::DateTooOld {
                date,
                max_days: limits.max_backdate_days,
            });
        }
    }

    Ok(())
}
