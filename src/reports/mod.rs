//! Reports module for the budget tracker
//!
//! Provides the end-of-session financial summary.

pub mod session_summary;

pub use session_summary::{SessionSummary, SummaryEntry};
