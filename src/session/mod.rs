//! Interactive budgeting session
//!
//! Pairs a [`FinanceManager`] with a [`Prompter`] to run the budget-then-
//! expenses flow over any input and output streams.

pub mod manager;
pub mod prompt;

pub use manager::{FinanceManager, SessionState};
pub use prompt::Prompter;
