use std::collections::BTreeMap;

use thiserror::Error;

use super::{Category, Cents, Expense, ExpenseId, SearchQuery};

/// In-memory store of all recorded expenses.
///
/// Ids start at 1, grow by one per stored expense and are never reused.
/// `total` always equals the sum of all stored amounts.
#[derive(Debug, Clone)]
pub struct Ledger {
    expenses: BTreeMap<ExpenseId, Expense>,
    next_id: ExpenseId,
    total: Cents,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            expenses: BTreeMap::new(),
            next_id: 1,
            total: 0,
        }
    }

    /// Store an expense and return its id.
    /// The ledger is left untouched if the running total would overflow.
    pub fn add(&mut self, expense: Expense) -> Result<ExpenseId, LedgerError> {
        let total = self
            .total
            .checked_add(expense.amount_cents)
            .ok_or(LedgerError::TotalOverflow)?;

        let id = self.next_id;
        self.expenses.insert(id, expense);
        self.next_id += 1;
        self.total = total;
        Ok(id)
    }

    /// All expenses in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseId, &Expense)> {
        self.expenses.iter().map(|(id, expense)| (*id, expense))
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn total(&self) -> Cents {
        self.total
    }

    /// Sum of amounts per category, for categories with at least one expense.
    /// Iteration order follows `Category`'s declaration order.
    pub fn category_totals(&self) -> BTreeMap<Category, Cents> {
        let mut totals: BTreeMap<Category, Cents> = BTreeMap::new();

        for expense in self.expenses.values() {
            *totals.entry(expense.category).or_insert(0) += expense.amount_cents;
        }

        totals
    }

    /// Linear scan keeping id order.
    pub fn search(&self, query: &SearchQuery) -> Vec<(ExpenseId, &Expense)> {
        self.iter()
            .filter(|(_, expense)| query.matches(expense))
            .collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger total would exceed the representable range")]
    TotalOverflow,
}
