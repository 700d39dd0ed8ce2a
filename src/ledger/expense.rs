//! Expense records and the parsing rules for their fields.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, LedgerResult};

/// Textual date format accepted for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount. Sums and percentages over any ledger built from
/// amounts up to this stay well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A single recorded expense.
///
/// Records carry no identifier of their own: their position in the
/// [`Ledger`](super::Ledger) is their identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Expense {
    /// Builds a record from already-typed values, enforcing a positive amount
    /// and a non-blank category.
    pub fn new(
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Self> {
        let category = category.into();
        Ok(Self {
            amount: ensure_positive(amount)?,
            description: description.into().trim().to_string(),
            category: parse_category(&category)?,
            date,
        })
    }

    /// Builds a record from raw text as typed at the console.
    ///
    /// A blank `date` means the expense is undated.
    pub fn parse(amount: &str, description: &str, category: &str, date: &str) -> LedgerResult<Self> {
        let date = if date.trim().is_empty() {
            None
        } else {
            Some(parse_date(date)?)
        };
        Self::new(parse_amount(amount)?, description, category, date)
    }

    /// Applies a textual update to one field, leaving the record untouched on
    /// failure.
    pub fn set_field(&mut self, field: ExpenseField, value: &str) -> LedgerResult<()> {
        match field {
            ExpenseField::Amount => self.amount = parse_amount(value)?,
            ExpenseField::Description => self.description = value.trim().to_string(),
            ExpenseField::Category => self.category = parse_category(value)?,
            ExpenseField::Date => self.date = Some(parse_date(value)?),
        }
        Ok(())
    }

    /// Date rendered as `YYYY-MM-DD`, or an empty string when undated.
    pub fn date_label(&self) -> String {
        self.date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.amount, self.description, self.category)?;
        if let Some(date) = self.date {
            write!(f, " on {}", date.format(DATE_FORMAT))?;
        }
        Ok(())
    }
}

/// Editable fields of an [`Expense`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Date,
    Description,
    Amount,
    Category,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 4] = [
        ExpenseField::Date,
        ExpenseField::Description,
        ExpenseField::Amount,
        ExpenseField::Category,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseField::Date => "Date",
            ExpenseField::Description => "Description",
            ExpenseField::Amount => "Amount",
            ExpenseField::Category => "Category",
        }
    }

    /// Current value of this field on `expense`, as editable text.
    pub fn current_value(self, expense: &Expense) -> String {
        match self {
            ExpenseField::Date => expense.date_label(),
            ExpenseField::Description => expense.description.clone(),
            ExpenseField::Amount => expense.amount.to_string(),
            ExpenseField::Category => expense.category.clone(),
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseField {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        ExpenseField::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                LedgerError::invalid(format!(
                    "unknown field `{}` (use Date/Description/Amount/Category)",
                    needle
                ))
            })
    }
}

/// Parses a strictly positive decimal amount.
pub fn parse_amount(input: &str) -> LedgerResult<Decimal> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| LedgerError::invalid(format!("amount `{}` is not a number", trimmed)))?;
    ensure_positive(amount)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| LedgerError::invalid(format!("invalid date `{}` (use YYYY-MM-DD)", trimmed)))
}

fn parse_category(input: &str) -> LedgerResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid("category must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn ensure_positive(amount: Decimal) -> LedgerResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(LedgerError::invalid(format!(
            "amount must not exceed {}",
            MAX_AMOUNT
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_accepts_blank_date() {
        let expense = Expense::parse("12.50", " Bus ticket ", "Transportation", "  ").unwrap();
        assert_eq!(expense.amount, dec!(12.50));
        assert_eq!(expense.description, "Bus ticket");
        assert_eq!(expense.date, None);
    }

    #[test]
    fn parse_rejects_non_positive_amounts() {
        for raw in ["0", "-3", "abc", ""] {
            let err = Expense::parse(raw, "x", "Other", "").expect_err(raw);
            assert!(matches!(err, LedgerError::Validation(_)), "{raw}: {err:?}");
        }
    }

    #[test]
    fn amounts_are_capped() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000000));
        assert!(Expense::parse("1000000000000000", "Yacht", "Other", "").is_ok());
        for raw in ["1000000000000000.01", "50000000000000000000000000000"] {
            let err = Expense::parse(raw, "Yacht", "Other", "").expect_err(raw);
            assert!(matches!(err, LedgerError::Validation(ref msg) if msg.contains("exceed")));
        }

        let mut expense = Expense::parse("5", "Coffee", "Other", "").unwrap();
        assert!(expense
            .set_field(ExpenseField::Amount, "79228162514264337593543950335")
            .is_err());
        assert_eq!(expense.amount, dec!(5));
    }

    #[test]
    fn parse_rejects_malformed_date() {
        let err = Expense::parse("5", "x", "Other", "2024-13-01").unwrap_err();
        assert!(matches!(err, LedgerError::Validation(ref msg) if msg.contains("YYYY-MM-DD")));
    }

    #[test]
    fn field_names_are_case_insensitive() {
        assert_eq!("amount".parse::<ExpenseField>(), Ok(ExpenseField::Amount));
        assert_eq!(" DATE ".parse::<ExpenseField>(), Ok(ExpenseField::Date));
        assert!("colour".parse::<ExpenseField>().is_err());
    }

    #[test]
    fn failed_update_keeps_previous_value() {
        let mut expense = Expense::parse("5", "Coffee", "Other", "2024-01-02").unwrap();
        assert!(expense.set_field(ExpenseField::Amount, "free").is_err());
        assert_eq!(expense.amount, dec!(5));
        expense
            .set_field(ExpenseField::Date, "2024-02-29")
            .expect("leap day is valid");
        assert_eq!(expense.date_label(), "2024-02-29");
    }
}
