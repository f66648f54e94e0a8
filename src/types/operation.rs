//! Operation types for replaying a ledger from a file
//!
//! This module defines the operation record the engine consumes. Each record
//! names a holder, an optional counterparty for transfers, and an amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operations the ledger engine can replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Register a new account for the holder with an opening balance
    Open,

    /// Add funds to the holder's account, no validation
    Credit,

    /// Withdraw funds from the holder's account, guarded by the funds check
    Debit,

    /// Debit the holder and credit the counterparty
    Transfer,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Open => "open",
            OperationType::Credit => "credit",
            OperationType::Debit => "debit",
            OperationType::Transfer => "transfer",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger operation as read from the input CSV
///
/// `amount` and `counterparty` are optional at this level so the engine can
/// report which field a record is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// The kind of operation
    pub op_type: OperationType,

    /// Holder whose account the operation applies to (transfer source)
    pub holder: String,

    /// Destination holder, only meaningful for transfers
    pub counterparty: Option<String>,

    /// Amount, exact to the precision given in the input
    pub amount: Option<Decimal>,
}
