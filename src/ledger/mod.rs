//! Expense records, categories, and the aggregation over them.

pub mod category;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use category::{
    CategoryMatch, CategorySet, DEFAULT_FALLBACK_CATEGORY, PREDEFINED_CATEGORIES,
};
pub use expense::{parse_amount, parse_date, Expense, ExpenseField, DATE_FORMAT};
pub use ledger::Ledger;
pub use summary::{CategorySummary, RankedExpense, Summary};
