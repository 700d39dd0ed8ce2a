use thiserror::Error;

/// Failures raised by ledger and category operations.
///
/// Every variant is recoverable: the shell reports it and keeps the session
/// running.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No expense #{} (ledger holds {len})", .index + 1)]
    ExpenseNotFound { index: usize, len: usize },
    #[error("Category `{0}` is not a custom category")]
    CategoryNotFound(String),
    #[error("Invalid or duplicate category `{0}`")]
    DuplicateCategory(String),
    #[error("No expenses recorded yet")]
    EmptyLedger,
}

impl LedgerError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        LedgerError::Validation(message.into())
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failures raised while writing a ledger snapshot to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures raised while loading or saving user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("No configuration directory available on this system")]
    NoConfigDir,
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}

/// Fatal shell failure surfaced to the binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Terminal error: {0}")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_not_found_reports_one_based_position() {
        let err = LedgerError::ExpenseNotFound { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No expense #5 (ledger holds 2)");
    }

    #[test]
    fn export_error_wraps_empty_ledger() {
        let err = ExportError::from(LedgerError::EmptyLedger);
        assert!(matches!(err, ExportError::Ledger(LedgerError::EmptyLedger)));
        assert_eq!(err.to_string(), "No expenses recorded yet");
    }
}
