//! Transaction model
//!
//! A single recorded expense. Transactions are immutable once created: all
//! fields are private and only exposed through read-only accessors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Unique identifier
    id: TransactionId,

    /// What the money was spent on
    description: String,

    /// Amount spent (never negative)
    amount: Money,

    /// When the expense was recorded
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Fails with [`TrackerError::InvalidAmount`] if `amount` is negative.
    /// The description is stored as given.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        created_at: DateTime<Utc>,
    ) -> TrackerResult<Self> {
        if amount.is_negative() {
            return Err(TrackerError::negative_amount(amount));
        }

        Ok(Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            created_at,
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new("coffee", Money::from_cents(500), test_time()).unwrap();
        assert_eq!(txn.description(), "coffee");
        assert_eq!(txn.amount(), Money::from_cents(500));
        assert_eq!(txn.created_at(), test_time());
    }

    #[test]
    fn test_zero_amount_allowed() {
        let txn = Transaction::new("freebie", Money::zero(), test_time()).unwrap();
        assert!(txn.amount().is_zero());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Transaction::new("refund", Money::from_cents(-100), test_time());
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
    }

    #[test]
    fn test_empty_description_is_kept() {
        let txn = Transaction::new("", Money::from_cents(100), test_time()).unwrap();
        assert_eq!(txn.description(), "");
    }

    #[test]
    fn test_each_transaction_gets_its_own_id() {
        let a = Transaction::new("a", Money::from_cents(1), test_time()).unwrap();
        let b = Transaction::new("a", Money::from_cents(1), test_time()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new("lunch", Money::from_cents(1500), test_time()).unwrap();
        assert_eq!(txn.to_string(), "lunch $15.00");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new("lunch", Money::from_cents(1500), test_time()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["description"], "lunch");
        assert_eq!(json["amount"], 1500);
        assert_eq!(json["created_at"], "2025-01-15T12:00:00Z");
    }
}
