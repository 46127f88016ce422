//! Budget model
//!
//! A fixed spending limit plus the running total of recorded expenses.
//! Spending past the limit is allowed; callers check [`Budget::is_exceeded`]
//! and warn.

use serde::Serialize;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// A single-session budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    /// The spending limit, fixed at construction
    limit: Money,

    /// Sum of all recorded expenses
    spent: Money,
}

impl Budget {
    /// Create a budget with the given limit
    pub fn new(limit: Money) -> TrackerResult<Self> {
        if limit.is_negative() {
            return Err(TrackerError::InvalidBudget(limit.format_plain()));
        }

        Ok(Self {
            limit,
            spent: Money::zero(),
        })
    }

    /// Add an expense to the running total
    ///
    /// Leaves the total unchanged on error.
    pub fn record_expense(&mut self, amount: Money) -> TrackerResult<()> {
        self.check_expense(amount)?;
        self.spent += amount;
        Ok(())
    }

    /// Check that `amount` would be accepted by [`Budget::record_expense`]
    pub fn check_expense(&self, amount: Money) -> TrackerResult<()> {
        if amount.is_negative() {
            return Err(TrackerError::negative_amount(amount));
        }
        if self.spent.checked_add(amount).is_none() {
            return Err(TrackerError::InvalidAmount(format!(
                "{} would overflow the spending total",
                amount.format_plain()
            )));
        }
        Ok(())
    }

    pub fn total_budget(&self) -> Money {
        self.limit
    }

    pub fn total_spent(&self) -> Money {
        self.spent
    }

    /// Limit minus spent; negative once the budget is exceeded
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn is_exceeded(&self) -> bool {
        self.spent > self.limit
    }

    /// How far spending is over the limit, or zero
    pub fn deficit(&self) -> Money {
        if self.is_exceeded() {
            self.spent - self.limit
        } else {
            Money::zero()
        }
    }

    /// Remaining balance or deficit, whichever applies
    pub fn status(&self) -> BudgetStatus {
        if self.is_exceeded() {
            BudgetStatus::Deficit(self.deficit())
        } else {
            BudgetStatus::Remaining(self.remaining())
        }
    }
}

/// Where a budget stands: under (or at) the limit, or over it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "amount")]
pub enum BudgetStatus {
    Remaining(Money),
    Deficit(Money),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(units: i64) -> Money {
        Money::from_units_cents(units, 0)
    }

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(money(100)).unwrap();
        assert_eq!(budget.total_budget(), money(100));
        assert_eq!(budget.total_spent(), Money::zero());
        assert_eq!(budget.remaining(), money(100));
        assert!(!budget.is_exceeded());
        assert_eq!(budget.deficit(), Money::zero());
    }

    #[test]
    fn test_remaining_equals_limit_after_construction() {
        for cents in [0, 1, 999, 10_000, 123_456_789] {
            let limit = Money::from_cents(cents);
            assert_eq!(Budget::new(limit).unwrap().remaining(), limit);
        }
    }

    #[test]
    fn test_negative_budget_rejected() {
        let result = Budget::new(money(-10));
        assert!(matches!(result, Err(TrackerError::InvalidBudget(_))));
    }

    #[test]
    fn test_zero_budget() {
        let mut budget = Budget::new(Money::zero()).unwrap();
        assert!(!budget.is_exceeded());
        budget.record_expense(Money::from_cents(1)).unwrap();
        assert!(budget.is_exceeded());
        assert_eq!(budget.deficit(), Money::from_cents(1));
    }

    #[test]
    fn test_over_budget() {
        let mut budget = Budget::new(money(100)).unwrap();
        for amount in [30, 40, 50] {
            budget.record_expense(money(amount)).unwrap();
        }

        assert_eq!(budget.total_spent(), money(120));
        assert!(budget.is_exceeded());
        assert_eq!(budget.deficit(), money(20));
        assert_eq!(budget.remaining(), money(-20));
        assert_eq!(budget.status(), BudgetStatus::Deficit(money(20)));
    }

    #[test]
    fn test_under_budget() {
        let mut budget = Budget::new(money(100)).unwrap();
        budget.record_expense(money(30)).unwrap();
        budget.record_expense(money(40)).unwrap();

        assert_eq!(budget.total_spent(), money(70));
        assert!(!budget.is_exceeded());
        assert_eq!(budget.remaining(), money(30));
        assert_eq!(budget.status(), BudgetStatus::Remaining(money(30)));
    }

    #[test]
    fn test_spending_exactly_the_limit_is_not_exceeded() {
        let mut budget = Budget::new(money(50)).unwrap();
        budget.record_expense(money(50)).unwrap();
        assert!(!budget.is_exceeded());
        assert_eq!(budget.deficit(), Money::zero());
        assert_eq!(budget.status(), BudgetStatus::Remaining(Money::zero()));
    }

    #[test]
    fn test_negative_expense_leaves_spent_unchanged() {
        let mut budget = Budget::new(money(100)).unwrap();
        budget.record_expense(money(25)).unwrap();

        let result = budget.record_expense(money(-5));
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
        assert_eq!(budget.total_spent(), money(25));
    }

    #[test]
    fn test_overflowing_expense_rejected() {
        let mut budget = Budget::new(money(100)).unwrap();
        budget.record_expense(Money::from_cents(i64::MAX)).unwrap();

        let result = budget.record_expense(Money::from_cents(1));
        assert!(matches!(result, Err(TrackerError::InvalidAmount(_))));
        assert_eq!(budget.total_spent(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_totals_match_sum_of_expenses() {
        let amounts: Vec<Money> = [1, 250, 0, 9_999, 42]
            .into_iter()
            .map(Money::from_cents)
            .collect();
        let limit = Money::from_cents(5_000);
        let mut budget = Budget::new(limit).unwrap();
        for amount in &amounts {
            budget.record_expense(*amount).unwrap();
        }

        let sum = amounts
            .iter()
            .fold(Money::zero(), |acc, amount| acc + *amount);
        assert_eq!(budget.total_spent(), sum);
        assert_eq!(budget.is_exceeded(), sum > limit);
        assert_eq!(budget.deficit(), (sum - limit).max(Money::zero()));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BudgetStatus::Deficit(money(20))).unwrap();
        assert_eq!(json, r#"{"kind":"deficit","amount":2000}"#);
    }
}
