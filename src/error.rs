//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Budget limit is negative
    #[error("Budget cannot be negative: {0}")]
    InvalidBudget(String),

    /// Expense amount is negative or cannot be added to the running total
    #[error("Expense amount {0}")]
    InvalidAmount(String),

    /// Text where a number was expected
    #[error("{0}")]
    InvalidNumericInput(String),

    /// An expense was recorded before a budget was set
    #[error("No budget has been set for this session")]
    BudgetNotSet,

    /// A second budget was set in the same session
    #[error("A budget has already been set for this session")]
    BudgetAlreadySet,

    /// An expense was recorded after the summary was produced
    #[error("The session has already been summarized")]
    SessionComplete,

    /// Standard input reached end-of-file while a prompt was waiting
    #[error("Input closed before the session was complete")]
    InputClosed,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TrackerError {
    /// Create an error for a negative expense amount
    pub fn negative_amount(amount: Money) -> Self {
        Self::InvalidAmount(format!("cannot be negative: {}", amount.format_plain()))
    }

    /// Check if the interactive loop should re-prompt instead of aborting
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidBudget(_) | Self::InvalidAmount(_) | Self::InvalidNumericInput(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
