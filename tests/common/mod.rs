// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use expense_tracker::application::{ExpenseService, NewExpense};
use expense_tracker::domain::{Category, Cents, ExpenseId};

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to record one expense
pub fn record(
    service: &mut ExpenseService,
    amount_cents: Cents,
    description: &str,
    category: Category,
    date: &str,
) -> Result<ExpenseId> {
    let id = service.record_expense(NewExpense {
        amount_cents,
        description: description.to_string(),
        category,
        date: parse_date(date),
    })?;
    Ok(id)
}

/// Test fixture: a month of spending across several categories
pub struct StandardExpenses;

impl StandardExpenses {
    /// Ids 1..=6, dated 2024-03-01 through 2024-03-20
    pub fn create(service: &mut ExpenseService) -> Result<()> {
        record(service, 4250, "Lunch", Category::Groceries, "2024-03-01")?;
        record(service, 35000, "Train to Milan", Category::Travel, "2024-03-05")?;
        record(service, 1299, "Socks", Category::Clothing, "2024-03-05")?;
        record(service, 8730, "Weekly shop", Category::Groceries, "2024-03-10")?;
        record(service, 1500, "Cinema", Category::Entertainment, "2024-03-15")?;
        record(service, 2000, "", Category::Other, "2024-03-20")?;
        Ok(())
    }

    pub fn total() -> Cents {
        4250 + 35000 + 1299 + 8730 + 1500 + 2000
    }
}

/// Write a scripted session, one line per entry
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
