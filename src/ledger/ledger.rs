use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::{
    category::{CategoryMatch, CategorySet},
    expense::{Expense, ExpenseField},
    summary::Summary,
};
use crate::errors::{LedgerError, LedgerResult};

/// The expenses recorded during one session, plus the categories they can use.
///
/// Records are kept in insertion order; a record's index is its identity
/// until an earlier record is deleted, at which point later indices shift
/// down by one.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    categories: CategorySet,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and appends a new record, returning its index.
    ///
    /// A blank `date` records the expense without a date.
    pub fn add_expense(
        &mut self,
        amount: &str,
        description: &str,
        category: &str,
        date: &str,
    ) -> LedgerResult<usize> {
        let expense = Expense::parse(amount, description, category, date)?;
        Ok(self.push(expense))
    }

    /// Appends an already-validated record, returning its index.
    pub fn push(&mut self, expense: Expense) -> usize {
        info!(
            amount = %expense.amount,
            category = %expense.category,
            "expense recorded"
        );
        self.expenses.push(expense);
        self.expenses.len() - 1
    }

    /// Appends a record built from typed values, returning its index.
    pub fn record(
        &mut self,
        amount: Decimal,
        description: &str,
        category: &str,
        date: Option<NaiveDate>,
    ) -> LedgerResult<usize> {
        let expense = Expense::new(amount, description, category, date)?;
        Ok(self.push(expense))
    }

    pub fn edit_field(&mut self, index: usize, field: &str, value: &str) -> LedgerResult<()> {
        let len = self.expenses.len();
        let expense = self
            .expenses
            .get_mut(index)
            .ok_or(LedgerError::ExpenseNotFound { index, len })?;
        let field: ExpenseField = field.parse()?;
        expense.set_field(field, value)?;
        debug!(index, field = field.label(), "expense updated");
        Ok(())
    }

    pub fn delete_expense(&mut self, index: usize) -> LedgerResult<Expense> {
        let len = self.expenses.len();
        if index >= len {
            return Err(LedgerError::ExpenseNotFound { index, len });
        }
        let removed = self.expenses.remove(index);
        info!(index, "expense removed");
        Ok(removed)
    }

    pub fn expense(&self, index: usize) -> LedgerResult<&Expense> {
        self.expenses.get(index).ok_or(LedgerError::ExpenseNotFound {
            index,
            len: self.expenses.len(),
        })
    }

    pub fn list_expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn summarize(&self) -> LedgerResult<Summary> {
        Summary::from_expenses(&self.expenses)
    }

    pub fn add_category(&mut self, name: &str) -> LedgerResult<String> {
        let label = self.categories.add_custom(name)?;
        info!(category = %label, "custom category added");
        Ok(label)
    }

    pub fn remove_category(&mut self, name: &str) -> LedgerResult<String> {
        let label = self.categories.remove_custom(name)?;
        info!(category = %label, "custom category removed");
        Ok(label)
    }

    pub fn resolve_category(&self, name: &str) -> CategoryMatch {
        self.categories.resolve(name)
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_expense("50", "Market", "Groceries", "").unwrap();
        ledger.add_expense("30", "Bakery", "Groceries", "").unwrap();
        ledger
            .add_expense("20", "Cinema", "Entertainment", "2024-05-01")
            .unwrap();
        ledger
    }

    #[test]
    fn add_appends_and_returns_index() {
        let mut ledger = sample_ledger();
        let index = ledger
            .add_expense("4.20", "Coffee", "Other", "2024-05-02")
            .unwrap();
        assert_eq!(index, 3);
        let last = ledger.list_expenses().last().unwrap();
        assert_eq!(last.description, "Coffee");
        assert_eq!(last.amount, dec!(4.20));
    }

    #[test]
    fn summary_matches_reference_example() {
        let summary = sample_ledger().summarize().unwrap();
        assert_eq!(summary.total, dec!(100));
        assert_eq!(summary.category_total("Groceries"), Some(dec!(80)));
        assert_eq!(summary.category_total("Entertainment"), Some(dec!(20)));
        assert_eq!(summary.highest_category, "Groceries");
        assert_eq!(summary.lowest_category, "Entertainment");
    }

    #[test]
    fn delete_shifts_later_indices() {
        let mut ledger = sample_ledger();
        let removed = ledger.delete_expense(0).unwrap();
        assert_eq!(removed.description, "Market");
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.expense(0).unwrap().description, "Bakery");
        assert_eq!(
            ledger.delete_expense(2),
            Err(LedgerError::ExpenseNotFound { index: 2, len: 2 })
        );
    }

    #[test]
    fn edit_checks_index_before_field() {
        let mut ledger = sample_ledger();
        assert!(matches!(
            ledger.edit_field(9, "colour", "red"),
            Err(LedgerError::ExpenseNotFound { index: 9, .. })
        ));
        assert!(matches!(
            ledger.edit_field(0, "colour", "red"),
            Err(LedgerError::Validation(_))
        ));
        ledger.edit_field(0, "amount", "55.5").unwrap();
        assert_eq!(ledger.summarize().unwrap().total, dec!(105.5));
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut ledger = sample_ledger();
        ledger.edit_field(1, "Amount", "12.25").unwrap();
        ledger.delete_expense(2).unwrap();
        ledger.add_expense("0.75", "Gum", "Other", "").unwrap();
        let expected: Decimal = ledger.list_expenses().iter().map(|e| e.amount).sum();
        assert_eq!(ledger.summarize().unwrap().total, expected);
        assert_eq!(expected, dec!(63));
    }

    #[test]
    fn summarize_empty_ledger_fails() {
        assert_eq!(Ledger::new().summarize(), Err(LedgerError::EmptyLedger));
    }

    #[test]
    fn category_lifecycle() {
        let mut ledger = Ledger::new();
        ledger.add_category("Gifts").unwrap();
        assert_eq!(
            ledger.add_category("Gifts"),
            Err(LedgerError::DuplicateCategory("Gifts".into()))
        );
        assert_eq!(
            ledger.remove_category("Groceries"),
            Err(LedgerError::CategoryNotFound("Groceries".into()))
        );
        assert_eq!(
            ledger.resolve_category("gifts"),
            CategoryMatch::Known("Gifts".into())
        );
        ledger.remove_category("Gifts").unwrap();
        assert!(!ledger.categories().contains("Gifts"));
    }
}
