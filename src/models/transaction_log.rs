//! Transaction log
//!
//! The append-only history of a session's expenses. Entries keep their
//! insertion order and are never removed or reordered.

use std::fmt;
use std::slice;

use super::money::Money;
use super::transaction::Transaction;
use crate::clock::{Clock, SystemClock};
use crate::error::{TrackerError, TrackerResult};

/// Ordered, append-only collection of transactions
pub struct TransactionLog {
    transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
}

impl TransactionLog {
    /// Create an empty log stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty log stamped by `clock`
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            transactions: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Record a new transaction and return it
    ///
    /// Fails without recording anything if the amount is negative or would
    /// push the log's total past what `Money` can hold.
    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: Money,
    ) -> TrackerResult<&Transaction> {
        let transaction = Transaction::new(description, amount, self.clock.now())?;
        if self.total().checked_add(amount).is_none() {
            return Err(TrackerError::InvalidAmount(format!(
                "{} would overflow the log total",
                amount.format_plain()
            )));
        }

        self.transactions.push(transaction);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Number of recorded transactions
    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all transaction amounts
    ///
    /// Cannot overflow: [`TransactionLog::add_transaction`] refuses any entry
    /// that would push the sum past `Money`'s range.
    pub fn total(&self) -> Money {
        self.transactions
            .iter()
            .fold(Money::zero(), |acc, txn| acc + txn.amount())
    }

    /// Read-only view of the entries in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }
}

impl Default for TransactionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransactionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionLog")
            .field("transactions", &self.transactions)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a Transaction;
    type IntoIter = slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
