//! Expense service implementation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use divvy_shared::types::{ExpenseId, GroupId, Money};

use super::error::ExpenseError;
use super::types::{CreateExpenseInput, Expense, SplitInput};
use super::validation::{validate_new_expense, ExpenseLimits};
use crate::balance::{aggregate_balances, suggest_settlements, GroupBalances, SettlementPlan};
use crate::group::{Group, GroupSummary, Member};
use crate::split::{calculate_split, SplitShare, SplitStrategy};

/// Persistence port for groups and expenses.
///
/// This trait is implemented by the surrounding storage layer to provide
/// actual database operations.
pub trait GroupStore: Send + Sync {
    /// Fetch a group with its membership.
    fn fetch_group(
        &self,
        group_id: GroupId,
    ) -> impl std::future::Future<Output = Result<Option<Group>, ExpenseError>> + Send;

    /// Fetch a group's members in membership order.
    ///
    /// Implementations return [`ExpenseError::GroupNotFound`] when the group
    /// does not exist.
    fn fetch_group_members(
        &self,
        group_id: GroupId,
    ) -> impl std::future::Future<Output = Result<Vec<Member>, ExpenseError>> + Send;

    /// Fetch every expense of a group, each with its split rows.
    fn fetch_group_expenses_with_splits(
        &self,
        group_id: GroupId,
    ) -> impl std::future::Future<Output = Result<Vec<Expense>, ExpenseError>> + Send;

    /// Persist an expense together with its split rows.
    ///
    /// The write must be atomic: either the expense and all of its rows are
    /// stored, or nothing is. Partial writes must not be observable.
    fn persist_expense_and_splits(
        &self,
        expense: &Expense,
    ) -> impl std::future::Future<Output = Result<(), ExpenseError>> + Send;
}

/// Expense service for creating expenses and reading group balances.
pub struct ExpenseService<S: GroupStore> {
    store: Arc<S>,
    limits: ExpenseLimits,
}

impl<S: GroupStore> ExpenseService<S> {
    /// Create a new expense service with default limits.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_limits(store, ExpenseLimits::default())
    }

    /// Create a new expense service with explicit limits.
    #[must_use]
    pub fn with_limits(store: Arc<S>, limits: ExpenseLimits) -> Self {
        Self { store, limits }
    }

    /// Create an expense and persist it with its split rows.
    ///
    /// Equal splits without an explicit participant list cover the whole
    /// group membership. The stored title is trimmed. A missing date
    /// defaults to the creation instant.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Group does not exist
    /// - Title or date validation fails
    /// - Split validation or reconciliation fails
    /// - The store fails to persist
    pub async fn create_expense(&self, input: CreateExpenseInput) -> Result<Expense, ExpenseError> {
        let group = self
            .store
            .fetch_group(input.group_id)
            .await?
            .ok_or(ExpenseError::GroupNotFound {
                group_id: input.group_id,
            })?;

        let now = Utc::now();
        validate_new_expense(&input, now, &self.limits)?;

        let strategy = match &input.split {
            SplitInput::Equal { participants } => SplitStrategy::Equal {
                participants: participants
                    .clone()
                    .unwrap_or_else(|| group.member_ids()),
            },
            SplitInput::Exact { splits } => SplitStrategy::Exact {
                splits: splits.clone(),
            },
            SplitInput::Percentage { splits } => SplitStrategy::Percentage {
                splits: splits.clone(),
            },
        };
        let splits = calculate_split(input.amount, &strategy)?;

        let expense = Expense {
            id: ExpenseId::new(),
            group_id: input.group_id,
            title: input.title.trim().to_string(),
            description: input.description,
            amount: input.amount,
            paid_by: input.paid_by,
            split_kind: input.split.kind(),
            date: input.date.unwrap_or(now),
            splits,
            created_at: now,
            updated_at: now,
        };

        if let Err(err) = self.store.persist_expense_and_splits(&expense).await {
            error!(error = %err, group_id = %expense.group_id, "Failed to persist expense");
            return Err(err);
        }

        info!(
            expense_id = %expense.id,
            group_id = %expense.group_id,
            amount = %expense.amount,
            split_type = %expense.split_kind,
            "Expense created"
        );

        Ok(expense)
    }

    /// Preview an equal split of `amount` over the group's full membership.
    ///
    /// Nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist, the group has no
    /// members, or the amount is not positive.
    pub async fn preview_equal_split(
        &self,
        group_id: GroupId,
        amount: Money,
    ) -> Result<Vec<SplitShare>, ExpenseError> {
        let members = self.store.fetch_group_members(group_id).await?;
        let strategy = SplitStrategy::Equal {
            participants: members.into_iter().map(|m| m.id).collect(),
        };
        Ok(calculate_split(amount, &strategy)?)
    }

    /// Compute net balances over the group's full expense history.
    ///
    /// A group with no expenses yields empty balances, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist or the store fails.
    pub async fn group_balances(&self, group_id: GroupId) -> Result<GroupBalances, ExpenseError> {
        if self.store.fetch_group(group_id).await?.is_none() {
            return Err(ExpenseError::GroupNotFound { group_id });
        }
        let expenses = self.store.fetch_group_expenses_with_splits(group_id).await?;
        Ok(aggregate_balances(&expenses))
    }

    /// Compute balances plus the transfers that would settle the group.
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist or the store fails.
    pub async fn settle_up(&self, group_id: GroupId) -> Result<SettlementPlan, ExpenseError> {
        let balances = self.group_balances(group_id).await?;
        let transfers = suggest_settlements(&balances.balances);
        Ok(SettlementPlan {
            balances,
            transfers,
        })
    }

    /// Summarize a group: membership size, expense count, and total spend.
    ///
    /// Derived on read; nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist or the store fails.
    pub async fn group_summary(&self, group_id: GroupId) -> Result<GroupSummary, ExpenseError> {
        let group = self
            .store
            .fetch_group(group_id)
            .await?
            .ok_or(ExpenseError::GroupNotFound { group_id })?;
        let expenses = self.store.fetch_group_expenses_with_splits(group_id).await?;
        let member_count = group.member_count();

        Ok(GroupSummary {
            id: group.id,
            name: group.name,
            description: group.description,
            member_count,
            expense_count: expenses.len(),
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
        })
    }
}
