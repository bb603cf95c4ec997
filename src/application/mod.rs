// Application layer - use cases on top of the in-memory ledger.
// The REPL talks only to `ExpenseService`; domain types stay free of I/O.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
