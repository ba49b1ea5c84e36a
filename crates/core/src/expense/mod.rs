//! Expense creation, validation, and the persistence port.
//!
//! [`ExpenseService`] is the write path: it validates a request, resolves
//! equal-split participants from the group membership, runs the split
//! calculator, and persists the expense with its rows through [`GroupStore`].
//! The read paths fold persisted history into balances and summaries.

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

pub use error::ExpenseError;
pub use service::{ExpenseService, GroupStore};
pub use types::{CreateExpenseInput, Expense, SplitInput};
pub use validation::{validate_new_expense, ExpenseLimits};
