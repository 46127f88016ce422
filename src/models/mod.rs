//! Core data models for the budget tracker
//!
//! This module contains the data structures of a budgeting session: the
//! budget itself, individual transactions, and the log that holds them.

pub mod budget;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod transaction_log;

pub use budget::{Budget, BudgetStatus};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
pub use transaction_log::TransactionLog;
