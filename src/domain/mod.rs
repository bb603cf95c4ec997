mod category;
mod date;
mod expense;
mod ledger;
mod money;
mod search;

pub use category::*;
pub use date::*;
pub use expense::*;
pub use ledger::*;
pub use money::*;
pub use search::*;
