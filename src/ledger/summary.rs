//! Category-wise aggregation over the ledger.

use rust_decimal::Decimal;
use serde::Serialize;

use super::expense::Expense;
use crate::errors::{LedgerError, LedgerResult};

/// Totals for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub total: Decimal,
    pub average: Decimal,
}

/// A ledger record picked out by the summary, with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedExpense {
    pub index: usize,
    pub expense: Expense,
}

/// Aggregated view over a non-empty ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: Decimal,
    /// One row per category, in order of first appearance in the ledger.
    pub categories: Vec<CategorySummary>,
    pub highest_category: String,
    pub lowest_category: String,
    pub highest_expense: RankedExpense,
    pub lowest_expense: RankedExpense,
}

impl Summary {
    /// Aggregates `expenses`.
    ///
    /// Ties on category totals and on single amounts resolve to whichever
    /// came first.
    pub fn from_expenses(expenses: &[Expense]) -> LedgerResult<Self> {
        let first = expenses.first().ok_or(LedgerError::EmptyLedger)?;

        let mut total = Decimal::ZERO;
        let mut rows: Vec<CategorySummary> = Vec::new();
        let mut highest = (0, first);
        let mut lowest = (0, first);

        for (index, expense) in expenses.iter().enumerate() {
            total = checked_sum(total, expense.amount)?;
            match rows.iter_mut().find(|row| row.category == expense.category) {
                Some(row) => {
                    row.count += 1;
                    row.total = checked_sum(row.total, expense.amount)?;
                }
                None => rows.push(CategorySummary {
                    category: expense.category.clone(),
                    count: 1,
                    total: expense.amount,
                    average: Decimal::ZERO,
                }),
            }
            if expense.amount > highest.1.amount {
                highest = (index, expense);
            }
            if expense.amount < lowest.1.amount {
                lowest = (index, expense);
            }
        }

        for row in &mut rows {
            row.average = row.total / Decimal::from(row.count);
        }

        let mut highest_row = &rows[0];
        let mut lowest_row = &rows[0];
        for row in &rows[1..] {
            if row.total > highest_row.total {
                highest_row = row;
            }
            if row.total < lowest_row.total {
                lowest_row = row;
            }
        }
        let highest_category = highest_row.category.clone();
        let lowest_category = lowest_row.category.clone();

        Ok(Self {
            total,
            highest_category,
            lowest_category,
            highest_expense: RankedExpense {
                index: highest.0,
                expense: highest.1.clone(),
            },
            lowest_expense: RankedExpense {
                index: lowest.0,
                expense: lowest.1.clone(),
            },
            categories: rows,
        })
    }

    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|row| row.category == name)
    }

    pub fn category_total(&self, name: &str) -> Option<Decimal> {
        self.category(name).map(|row| row.total)
    }

    pub fn category_average(&self, name: &str) -> Option<Decimal> {
        self.category(name).map(|row| row.average)
    }

    /// Percentage of the overall total spent in `row`'s category.
    pub fn share(&self, row: &CategorySummary) -> Decimal {
        if self.total.is_zero() {
            return Decimal::ZERO;
        }
        row.total / self.total * Decimal::ONE_HUNDRED
    }
}

fn checked_sum(acc: Decimal, amount: Decimal) -> LedgerResult<Decimal> {
    acc.checked_add(amount)
        .ok_or_else(|| LedgerError::invalid("total is too large to compute"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn expense(amount: Decimal, description: &str, category: &str) -> Expense {
        Expense::new(amount, description, category, None).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Summary::from_expenses(&[]), Err(LedgerError::EmptyLedger));
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let expenses = vec![
            expense(dec!(50), "Market", "Groceries"),
            expense(dec!(20), "Cinema", "Entertainment"),
            expense(dec!(30), "Bakery", "Groceries"),
        ];
        let summary = Summary::from_expenses(&expenses).unwrap();
        let order: Vec<&str> = summary
            .categories
            .iter()
            .map(|row| row.category.as_str())
            .collect();
        assert_eq!(order, ["Groceries", "Entertainment"]);
        assert_eq!(summary.category_average("Groceries"), Some(dec!(40)));
        assert_eq!(summary.highest_expense.index, 0);
        assert_eq!(summary.lowest_expense.expense.description, "Cinema");
    }

    #[test]
    fn ties_resolve_to_first_encountered() {
        let expenses = vec![
            expense(dec!(10), "First", "Bills"),
            expense(dec!(10), "Second", "Utilities"),
        ];
        let summary = Summary::from_expenses(&expenses).unwrap();
        assert_eq!(summary.highest_category, "Bills");
        assert_eq!(summary.lowest_category, "Bills");
        assert_eq!(summary.highest_expense.expense.description, "First");
        assert_eq!(summary.lowest_expense.expense.description, "First");
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let expenses = vec![
            expense(dec!(75), "Rent share", "Bills"),
            expense(dec!(25), "Bus", "Transportation"),
        ];
        let summary = Summary::from_expenses(&expenses).unwrap();
        let shares: Vec<Decimal> = summary
            .categories
            .iter()
            .map(|row| summary.share(row))
            .collect();
        assert_eq!(shares, vec![dec!(75), dec!(25)]);
    }

    #[test]
    fn oversized_totals_are_an_error() {
        // Built directly, bypassing the amount cap applied when parsing.
        let huge = |description: &str| Expense {
            amount: dec!(50000000000000000000000000000),
            description: description.into(),
            category: "Other".into(),
            date: None,
        };
        let err = Summary::from_expenses(&[huge("a"), huge("b")]).unwrap_err();
        assert!(matches!(err, LedgerError::Validation(ref msg) if msg.contains("too large")));
    }

    #[test]
    fn share_of_a_huge_single_amount() {
        let expenses = vec![Expense {
            amount: dec!(1000000000000000000000000000),
            description: "Estate".into(),
            category: "Bills".into(),
            date: None,
        }];
        let summary = Summary::from_expenses(&expenses).unwrap();
        assert_eq!(summary.share(&summary.categories[0]), dec!(100));
    }
}
