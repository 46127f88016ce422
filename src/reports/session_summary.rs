//! Session Summary
//!
//! The end-of-session report: budget, spending, remaining balance or
//! deficit, and every transaction in the order it was entered.

use serde::Serialize;

use crate::config::Settings;
use crate::display::{banner, format_amount, format_transaction_row, section};
use crate::error::TrackerResult;
use crate::models::{Budget, BudgetStatus, Money, Transaction, TransactionLog};

/// One numbered row of the summary
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    /// 1-based position in entry order
    pub number: usize,
    #[serde(flatten)]
    pub transaction: Transaction,
}

/// Final report for a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// The budget limit
    pub total_budget: Money,
    /// Sum of all expenses
    pub total_spent: Money,
    /// Remaining balance or deficit
    pub status: BudgetStatus,
    /// Number of transactions
    pub transaction_count: usize,
    /// Transactions in entry order
    pub transactions: Vec<SummaryEntry>,
}

impl SessionSummary {
    /// Generate the summary from a budget and its transaction log
    pub fn generate(budget: &Budget, log: &TransactionLog) -> Self {
        let transactions = log
            .iter()
            .enumerate()
            .map(|(i, txn)| SummaryEntry {
                number: i + 1,
                transaction: txn.clone(),
            })
            .collect();

        Self {
            total_budget: budget.total_budget(),
            total_spent: budget.total_spent(),
            status: budget.status(),
            transaction_count: log.count(),
            transactions,
        }
    }

    /// Format the summary for terminal output
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&banner("FINAL FINANCIAL SUMMARY"));
        output.push('\n');
        output.push_str(&format!(
            "Initial Budget: {}\n",
            format_amount(self.total_budget, settings)
        ));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            format_amount(self.total_spent, settings)
        ));
        match self.status {
            BudgetStatus::Deficit(deficit) => {
                output.push_str(&format!("Deficit: {}\n", format_amount(deficit, settings)));
            }
            BudgetStatus::Remaining(remaining) => {
                output.push_str(&format!(
                    "Remaining Balance: {}\n",
                    format_amount(remaining, settings)
                ));
            }
        }

        output.push('\n');
        output.push_str(&section("TRANSACTION LOG"));
        output.push('\n');

        if self.transactions.is_empty() {
            output.push_str("No transactions recorded.\n");
        }
        for entry in &self.transactions {
            output.push_str(&format_transaction_row(entry.number, &entry.transaction, settings));
            output.push('\n');
        }

        output
    }

    /// Format the summary as pretty-printed JSON
    pub fn to_json(&self) -> TrackerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
