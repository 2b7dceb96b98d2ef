//! Error types for the group settler
//!
//! This module defines all error conditions the tool can report.
//! Every error is fatal: the run is a single deterministic pass, so the
//! first failure aborts processing with no partial output.
//!
//! # Error Categories
//!
//! - **Input format errors**: header mismatch, unparsable amount, malformed CSV
//! - **Conservation violations**: credits and debits do not balance after matching
//! - **I/O errors**: input file missing, output destination not writable

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the settlement tool
///
/// Each variant carries enough context to diagnose the failure from the
/// CLI error message alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettleError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading the input or writing the output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The input header is not literally `account,transaction`
    ///
    /// Detected before any row is ingested; nothing is processed.
    #[error("Invalid input header: expected 'account,transaction', found '{found}'")]
    InvalidHeader {
        /// The header row that was actually present
        found: String,
    },

    /// A transaction field could not be parsed as a decimal number
    #[error("Invalid transaction amount '{amount}' for account '{account}' at line {line}")]
    InvalidAmount {
        /// The account label on the offending row
        account: String,
        /// The unparsable amount text
        amount: String,
        /// 1-based file line number (header is line 1)
        line: u64,
    },

    /// Structurally malformed CSV (wrong field count, bad quoting, etc.)
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The matching loop finished with one side still outstanding
    ///
    /// Total credits did not equal total debits beyond the zero tolerance.
    /// The leftover accounts are reported rather than silently dropped.
    #[error(
        "Conservation violation: unmatched {side} of {total} across {} account(s): {}",
        accounts.len(),
        accounts.join(", ")
    )]
    ConservationViolation {
        /// Which side is outstanding
        side: ImbalanceSide,
        /// Total outstanding magnitude
        total: Decimal,
        /// Labels of the accounts left with a non-zero balance
        accounts: Vec<String>,
    },
}

/// Which side of the ledger was left outstanding after matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImbalanceSide {
    Credit,
    Debt,
}

impl std::fmt::Display for ImbalanceSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImbalanceSide::Credit => write!(f, "credit"),
            ImbalanceSide::Debt => write!(f, "debt"),
        }
    }
}

impl From<std::io::Error> for SettleError {
    fn from(error: std::io::Error) -> Self {
        SettleError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SettleError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettleError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

impl SettleError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        SettleError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create an InvalidHeader error
    pub fn invalid_header(found: &str) -> Self {
        SettleError::InvalidHeader {
            found: found.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(account: &str, amount: &str, line: u64) -> Self {
        SettleError::InvalidAmount {
            account: account.to_string(),
            amount: amount.to_string(),
            line,
        }
    }

    /// Create a ConservationViolation error
    pub fn conservation_violation(
        side: ImbalanceSide,
        total: Decimal,
        accounts: Vec<String>,
    ) -> Self {
        SettleError::ConservationViolation {
            side,
            total,
            accounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::file_not_found(
        SettleError::FileNotFound { path: "missing.csv".to_string() },
        "File not found: missing.csv"
    )]
    #[case::io_error(
        SettleError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::invalid_header(
        SettleError::invalid_header("acct,amt"),
        "Invalid input header: expected 'account,transaction', found 'acct,amt'"
    )]
    #[case::invalid_amount(
        SettleError::invalid_amount("Alice", "ten", 3),
        "Invalid transaction amount 'ten' for account 'Alice' at line 3"
    )]
    #[case::csv_with_line(
        SettleError::Csv { line: Some(7), message: "wrong field count".to_string() },
        "CSV parse error at line 7: wrong field count"
    )]
    #[case::csv_without_line(
        SettleError::Csv { line: None, message: "wrong field count".to_string() },
        "CSV parse error: wrong field count"
    )]
    #[case::conservation_credit(
        SettleError::conservation_violation(
            ImbalanceSide::Credit,
            dec!(12.5),
            vec!["Alice".to_string(), "Bob".to_string()],
        ),
        "Conservation violation: unmatched credit of 12.5 across 2 account(s): Alice, Bob"
    )]
    #[case::conservation_debt(
        SettleError::conservation_violation(ImbalanceSide::Debt, dec!(3), vec!["Carol".to_string()]),
        "Conservation violation: unmatched debt of 3 across 1 account(s): Carol"
    )]
    fn test_error_display(#[case] error: SettleError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: SettleError = io_error.into();
        assert!(matches!(error, SettleError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
