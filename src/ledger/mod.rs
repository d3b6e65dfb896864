//! Expense ledger and its derived aggregates.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod totals;

pub use ledger::Ledger;
pub use record::ExpenseRecord;
pub use totals::Totals;
