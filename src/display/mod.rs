//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, headings and transaction rows
//! for terminal display.

pub mod report;
pub mod transaction;

pub use report::{banner, budget_exceeded_warning, format_amount, section};
pub use transaction::format_transaction_row;
