//! Spreadsheet export of the ledger.

use std::{fs::File, io::Write, path::Path};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::errors::{ExportError, LedgerError};
use crate::ledger::{Expense, Ledger};

/// Default file name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// One exported spreadsheet row.
#[derive(Serialize, Debug)]
struct ExportRow<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: Decimal,
    #[serde(rename = "Category")]
    category: &'a str,
}

impl<'a> From<&'a Expense> for ExportRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date_label(),
            description: &expense.description,
            amount: expense.amount,
            category: &expense.category,
        }
    }
}

/// Writes every record of `ledger` as CSV and returns the number of rows.
///
/// Output has a header row followed by records in ledger order:
/// ```csv
/// Date,Description,Amount,Category
/// 2024-03-01,Bus ticket,12.50,Transportation
/// ,Market,50,Groceries
/// ```
pub fn write_csv<W: Write>(writer: W, ledger: &Ledger) -> Result<usize, ExportError> {
    if ledger.is_empty() {
        return Err(LedgerError::EmptyLedger.into());
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    for expense in ledger.list_expenses() {
        csv_writer.serialize(ExportRow::from(expense))?;
    }
    csv_writer.flush()?;
    Ok(ledger.len())
}

/// Exports `ledger` into a CSV file at `path`, replacing any existing file.
pub fn export_to_path(path: &Path, ledger: &Ledger) -> Result<usize, ExportError> {
    if ledger.is_empty() {
        return Err(LedgerError::EmptyLedger.into());
    }
    let file = File::create(path)?;
    let rows = write_csv(file, ledger)?;
    info!(rows, path = %path.display(), "expenses exported");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_is_not_exported() {
        let mut output = Vec::new();
        let err = write_csv(&mut output, &Ledger::new()).unwrap_err();
        assert!(matches!(err, ExportError::Ledger(LedgerError::EmptyLedger)));
        assert!(output.is_empty());
    }

    #[test]
    fn rows_follow_ledger_order() {
        let mut ledger = Ledger::new();
        ledger
            .add_expense("12.50", "Bus ticket", "Transportation", "2024-03-01")
            .unwrap();
        ledger
            .add_expense("50", "Market, weekly", "Groceries", "")
            .unwrap();

        let mut output = Vec::new();
        let rows = write_csv(&mut output, &ledger).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Date,Description,Amount,Category",
                "2024-03-01,Bus ticket,12.50,Transportation",
                ",\"Market, weekly\",50,Groceries",
            ]
        );
    }
}
