//! Finance manager
//!
//! Owns the session's budget and transaction log and drives the interactive
//! flow: set a budget, collect expenses, print the summary.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::prompt::Prompter;
use crate::clock::Clock;
use crate::config::Settings;
use crate::display::budget_exceeded_warning;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Money, Transaction, TransactionLog};
use crate::reports::SessionSummary;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No budget yet
    Uninitialized,
    /// Budget set, expenses being collected
    BudgetSet,
    /// Summary produced; nothing more to record
    Summarized,
}

/// Coordinates a budget with its transaction log
#[derive(Debug, Default)]
pub struct FinanceManager {
    budget: Option<Budget>,
    log: TransactionLog,
    summarized: bool,
}

impl FinanceManager {
    /// Create a manager whose transactions are stamped by the system clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose transactions are stamped by `clock`
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            budget: None,
            log: TransactionLog::with_clock(clock),
            summarized: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.budget, self.summarized) {
            (None, _) => SessionState::Uninitialized,
            (Some(_), false) => SessionState::BudgetSet,
            (Some(_), true) => SessionState::Summarized,
        }
    }

    /// Set the session budget
    pub fn set_budget(&mut self, limit: Money) -> TrackerResult<&Budget> {
        if self.budget.is_some() {
            return Err(TrackerError::BudgetAlreadySet);
        }
        let budget = Budget::new(limit)?;
        info!(limit = %limit, "budget set");
        Ok(&*self.budget.insert(budget))
    }

    /// Record an expense in both the log and the budget
    ///
    /// Nothing is recorded unless both accept the amount.
    pub fn record_expense(
        &mut self,
        description: impl Into<String>,
        amount: Money,
    ) -> TrackerResult<&Transaction> {
        if self.summarized {
            return Err(TrackerError::SessionComplete);
        }
        let budget = self.budget.as_mut().ok_or(TrackerError::BudgetNotSet)?;
        budget.check_expense(amount)?;

        let transaction = self.log.add_transaction(description, amount)?;
        budget.record_expense(amount)?;

        debug!(
            id = %transaction.id(),
            amount = %amount,
            spent = %budget.total_spent(),
            "expense recorded"
        );
        Ok(transaction)
    }

    pub fn budget(&self) -> Option<&Budget> {
        self.budget.as_ref()
    }

    pub fn transaction_log(&self) -> &TransactionLog {
        &self.log
    }

    /// Whether spending has passed the budget (false before a budget is set)
    pub fn is_exceeded(&self) -> bool {
        self.budget.as_ref().is_some_and(Budget::is_exceeded)
    }

    /// Build the final report
    pub fn summary(&self) -> TrackerResult<SessionSummary> {
        let budget = self.budget.as_ref().ok_or(TrackerError::BudgetNotSet)?;
        Ok(SessionSummary::generate(budget, &self.log))
    }

    /// Run the interactive session
    ///
    /// Prints the text summary unless `settings.json_summary` is set, in which
    /// case rendering the returned summary is left to the caller.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        settings: &Settings,
    ) -> TrackerResult<SessionSummary> {
        prompter.say("Welcome to the Personal Finance Manager")?;
        prompter.say("")?;

        prompter.retry_money("Enter your weekly budget: ", |limit| {
            self.set_budget(limit).map(|_| ())
        })?;

        prompter.say("")?;
        prompter.say(format!("Enter {} transactions.", settings.transaction_count))?;

        for number in 1..=settings.transaction_count {
            self.collect_expense(prompter, number)?;
        }

        let summary = self.summary()?;
        self.summarized = true;
        info!(
            count = summary.transaction_count,
            spent = %summary.total_spent,
            "session complete"
        );

        if !settings.json_summary {
            prompter.say("")?;
            prompter.say(summary.format_terminal(settings).trim_end())?;
        }

        Ok(summary)
    }

    /// Prompt for one expense, then warn if the budget is now exceeded
    fn collect_expense<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        number: usize,
    ) -> TrackerResult<()> {
        prompter.say("")?;
        prompter.say(format!("Transaction {}", number))?;

        let description = prompter.prompt_line("Enter expense description: ")?;
        prompter.retry_money("Enter expense amount: ", |amount| {
            self.record_expense(description.as_str(), amount).map(|_| ())
        })?;

        if self.is_exceeded() {
            info!(number, "budget exceeded");
            prompter.say(budget_exceeded_warning())?;
        }
        Ok(())
    }
}
