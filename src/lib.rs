pub mod application;
pub mod cli;
pub mod domain;

pub use application::ExpenseService;
pub use domain::*;
