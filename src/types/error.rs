//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while operating on
//! accounts, running transfers, or replaying an operation file.
//!
//! # Error Categories
//!
//! - **Funds Errors**: Insufficient funds on debit
//! - **Account Errors**: Unset balance, unknown account handle or holder
//! - **Record Errors**: Missing amount or counterparty, malformed amount
//! - **File I/O Errors**: File not found, permission denied, malformed CSV
//! - **Arithmetic Errors**: Decimal overflow or rounding in balance calculations

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every fallible operation in the crate returns this type. The
/// `InsufficientFunds` variant keeps a fixed message so callers can match on
/// the text as well as on the variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A debit would leave the balance below zero
    ///
    /// Recoverable: the balance is left untouched.
    #[error("Insufficient funds")]
    InsufficientFunds {
        /// Balance at the time of the rejected debit
        balance: Decimal,
        /// Amount the caller tried to debit
        requested: Decimal,
    },

    /// Debit or credit on an account that was never given a balance
    #[error("Account {holder} has no balance")]
    BalanceNotSet {
        /// Holder of the incomplete account (or `<unnamed>`)
        holder: String,
    },

    /// Decimal arithmetic would overflow
    ///
    /// Recoverable: the operation is rejected and balances are unchanged.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Decimal arithmetic would have to round away digits
    ///
    /// Recoverable: the operation is rejected and balances are unchanged.
    #[error("Result of {operation} cannot be represented exactly")]
    PrecisionLoss {
        /// Operation whose result would be rounded
        operation: String,
    },

    /// Account handle does not point into the bank's account sequence
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Positional handle that was looked up
        account: usize,
    },

    /// No registered account is held by the given holder
    #[error("No account held by '{holder}'")]
    UnknownHolder {
        /// Holder that was looked up
        holder: String,
    },

    /// Amount field is missing for an operation that requires it
    #[error("{op_type} operation for '{holder}' requires an amount")]
    MissingAmount {
        /// Operation type
        op_type: String,
        /// Holder named on the record
        holder: String,
    },

    /// Transfer record without a destination holder
    #[error("transfer from '{holder}' requires a counterparty")]
    MissingCounterparty {
        /// Source holder named on the record
        holder: String,
    },

    /// Amount value could not be parsed as a decimal
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The raw amount text
        amount: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds { balance, requested }
    }

    /// Create a BalanceNotSet error
    pub fn balance_not_set(holder: Option<&str>) -> Self {
        LedgerError::BalanceNotSet {
            holder: holder.unwrap_or("<unnamed>").to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a PrecisionLoss error
    pub fn precision_loss(operation: &str) -> Self {
        LedgerError::PrecisionLoss {
            operation: operation.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: usize) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an UnknownHolder error
    pub fn unknown_holder(holder: &str) -> Self {
        LedgerError::UnknownHolder {
            holder: holder.to_string(),
        }
    }

    /// Create a MissingAmount error
    pub fn missing_amount(op_type: &str, holder: &str) -> Self {
        LedgerError::MissingAmount {
            op_type: op_type.to_string(),
            holder: holder.to_string(),
        }
    }

    /// Create a MissingCounterparty error
    pub fn missing_counterparty(holder: &str) -> Self {
        LedgerError::MissingCounterparty {
            holder: holder.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Whether this is the funds-guard rejection raised by a debit
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, LedgerError::InsufficientFunds { .. })
    }
}
