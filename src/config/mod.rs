//! Configuration module for the budget tracker
//!
//! Session preferences: currency code, number of expenses to collect,
//! timestamp format and summary output style.

pub mod settings;

pub use settings::Settings;
