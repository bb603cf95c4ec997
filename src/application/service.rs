use chrono::NaiveDate;
use log::debug;

use crate::domain::{
    Category, Cents, Expense, ExpenseId, Ledger, ParseAmountError, SearchQuery,
};

use super::{AppError, CategoryReport, CategorySummary};

/// Application service providing high-level operations on the expense ledger.
/// This is the interface the REPL talks to; it owns all session state.
#[derive(Debug, Default)]
pub struct ExpenseService {
    ledger: Ledger,
}

/// Validated fields for a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount_cents: Cents,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseService {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Record a new expense and return its id.
    pub fn record_expense(&mut self, new: NewExpense) -> Result<ExpenseId, AppError> {
        if new.amount_cents < 0 {
            return Err(ParseAmountError::Negative.into());
        }

        let expense = Expense::new(new.amount_cents, new.description, new.category, new.date);
        let id = self.ledger.add(expense)?;

        debug!(
            "recorded expense #{} ({} cents, {:?})",
            id, new.amount_cents, new.category
        );
        Ok(id)
    }

    /// All expenses in id order.
    pub fn list_expenses(&self) -> Vec<(ExpenseId, &Expense)> {
        self.ledger.iter().collect()
    }

    pub fn category_report(&self) -> CategoryReport {
        let categories = self
            .ledger
            .category_totals()
            .into_iter()
            .map(|(category, total)| CategorySummary { category, total })
            .collect();

        CategoryReport {
            categories,
            total: self.ledger.total(),
        }
    }

    /// Fails with `NoExpenses` when there is nothing to search.
    pub fn ensure_searchable(&self) -> Result<(), AppError> {
        if self.ledger.is_empty() {
            return Err(AppError::NoExpenses);
        }
        Ok(())
    }

    /// Callers check `ensure_searchable` first; an empty ledger simply yields no rows here.
    pub fn search(&self, query: &SearchQuery) -> Vec<(ExpenseId, &Expense)> {
        let results = self.ledger.search(query);
        debug!("search {:?} matched {} expense(s)", query, results.len());
        results
    }
}
