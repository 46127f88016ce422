//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the session prompts and the final
//! summary.

use crate::config::Settings;
use crate::models::Money;

/// Format an amount with the configured currency code
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    amount.format_with_code(&settings.currency_code)
}

/// Format a banner line, e.g. `========== TITLE ==========`
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(10);
    format!("{} {} {}", rule, title, rule)
}

/// Format a section heading, e.g. `--- TITLE ---`
pub fn section(title: &str) -> String {
    format!("--- {} ---", title)
}

/// Warning shown after an expense pushes spending past the budget
pub fn budget_exceeded_warning() -> &'static str {
    "WARNING: You have exceeded your budget!"
}
