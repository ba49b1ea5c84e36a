//! Core business logic for Divvy.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `split` - Split calculation (equal / exact / percentage strategies)
//! - `balance` - Balance aggregation and settlement suggestions
//! - `group` - Groups, members, and membership
//! - `expense` - Expense validation, creation, and the persistence port

pub mod balance;
pub mod expense;
pub mod group;
pub mod split;
