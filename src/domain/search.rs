use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use super::{Category, Expense};

/// How the user wants to search the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Category,
    Date,
    DateRange,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Category, SearchMode::Date, SearchMode::DateRange];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Category => "CATEGORY",
            SearchMode::Date => "DATE",
            SearchMode::DateRange => "DATE_RANGE",
        }
    }
}

impl FromStr for SearchMode {
    type Err = ParseSearchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_uppercase();
        SearchMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .ok_or_else(|| ParseSearchModeError(s.trim().to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search type '{0}'")]
pub struct ParseSearchModeError(pub String);

/// A fully specified search, ready to run against the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQuery {
    Category(Category),
    Date(NaiveDate),
    DateRange { from: NaiveDate, to: NaiveDate },
}

impl SearchQuery {
    /// Build an inclusive date range query. `from` must not be after `to`.
    pub fn date_range(from: NaiveDate, to: NaiveDate) -> Result<Self, InvalidDateRange> {
        if from > to {
            return Err(InvalidDateRange { from, to });
        }
        Ok(SearchQuery::DateRange { from, to })
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        match *self {
            SearchQuery::Category(category) => expense.category == category,
            SearchQuery::Date(date) => expense.is_on(date),
            SearchQuery::DateRange { from, to } => expense.is_between(from, to),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("from date {from} should not be later than to date {to}")]
pub struct InvalidDateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}
