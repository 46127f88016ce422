//! Budget Tracker - Terminal-based weekly budget and expense tracker
//!
//! This library provides the core functionality for the `budget` command:
//! set a spending limit, record a fixed number of expenses, get warned when
//! spending passes the limit, and finish with a summary of the session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings
//! - `error`: Custom error types
//! - `clock`: Injectable time sources for transaction timestamps
//! - `models`: Core data models (money, budget, transactions, transaction log)
//! - `session`: The interactive budget-then-expenses flow
//! - `display`: Terminal formatting helpers
//! - `reports`: End-of-session summary
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{Budget, Money, TransactionLog};
//!
//! let mut budget = Budget::new(Money::from_cents(10_000))?;
//! let mut log = TransactionLog::new();
//!
//! log.add_transaction("coffee", Money::from_cents(500))?;
//! budget.record_expense(Money::from_cents(500))?;
//!
//! assert_eq!(budget.remaining(), Money::from_cents(9_500));
//! assert_eq!(log.total(), budget.total_spent());
//! # Ok::<(), budget_tracker::TrackerError>(())
//! ```

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod session;

pub use error::{TrackerError, TrackerResult};
