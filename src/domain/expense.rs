use chrono::NaiveDate;

use super::{Category, Cents};

/// Identifier assigned by the ledger, starting at 1.
pub type ExpenseId = u64;

/// A single recorded expense.
/// Expenses are immutable once stored; there is no edit or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
    /// Free text, may be empty
    pub description: String,
    pub category: Category,
    /// Calendar day the expense happened on
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount_cents: Cents,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount_cents,
            description: description.into(),
            category,
            date,
        }
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Inclusive on both ends.
    pub fn is_between(&self, from: NaiveDate, to: NaiveDate) -> bool {
        from <= self.date && self.date <= to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_create_expense() {
        let expense = Expense::new(4250, "Lunch", Category::Groceries, day(15));

        assert_eq!(expense.amount_cents, 4250);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.category, Category::Groceries);
        assert_eq!(expense.date, day(15));
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        let expense = Expense::new(0, "", Category::Other, day(1));
        assert_eq!(expense.amount_cents, 0);
        assert!(expense.description.is_empty());
    }

    #[test]
    fn test_date_matching() {
        let expense = Expense::new(100, "Bus", Category::Travel, day(10));

        assert!(expense.is_on(day(10)));
        assert!(!expense.is_on(day(11)));

        assert!(expense.is_between(day(10), day(10)));
        assert!(expense.is_between(day(1), day(10)));
        assert!(expense.is_between(day(10), day(20)));
        assert!(!expense.is_between(day(11), day(20)));
        assert!(!expense.is_between(day(1), day(9)));
    }
}
