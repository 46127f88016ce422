//! Session settings for the budget tracker
//!
//! Holds the presentation and session-length preferences. Values come from
//! command-line flags or their environment variables; anything not given
//! falls back to the defaults below.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Settings for one budgeting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency code printed before amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// How many expenses are collected before the summary
    #[serde(default = "default_transaction_count")]
    pub transaction_count: usize,

    /// Time-of-entry format (strftime format)
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Print the final summary as JSON instead of the text report
    #[serde(default)]
    pub json_summary: bool,
}

fn default_currency() -> String {
    "UGX".to_string()
}

fn default_transaction_count() -> usize {
    5
}

fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_code: default_currency(),
            transaction_count: default_transaction_count(),
            time_format: default_time_format(),
            json_summary: false,
        }
    }
}

impl Settings {
    /// Check the settings before a session starts
    pub fn validate(&self) -> TrackerResult<()> {
        if self.transaction_count == 0 {
            return Err(TrackerError::Config(
                "transaction count must be at least 1".into(),
            ));
        }
        if self.currency_code.trim().is_empty() {
            return Err(TrackerError::Config("currency code cannot be empty".into()));
        }
        if self.time_format.trim().is_empty() {
            return Err(TrackerError::Config("time format cannot be empty".into()));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::Config(format!(
                "invalid time format: {}",
                self.time_format
            )));
        }
        Ok(())
    }
}
