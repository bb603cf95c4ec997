use thiserror::Error;

use crate::domain::{
    InvalidDateRange, LedgerError, ParseAmountError, ParseCategoryError, ParseDateError,
    ParseSearchModeError,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error("Invalid value: {0}. Valid categories: GROCERIES, TRAVEL, CLOTHING, ENTERTAINMENT, OTHER")]
    InvalidCategory(#[from] ParseCategoryError),

    #[error("Invalid value: {0}. Valid search types: CATEGORY, DATE, DATE_RANGE")]
    InvalidSearchMode(#[from] ParseSearchModeError),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] ParseDateError),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(#[from] InvalidDateRange),

    #[error("Unknown command {0}. Use help for a list of commands")]
    UnknownCommand(String),

    #[error("No expenses")]
    NoExpenses,

    #[error("Cannot record expense: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Errors that are reported to the user without ending the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::EndOfInput | AppError::Io(_))
    }
}
