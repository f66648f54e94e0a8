//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account entity and its debit/credit rules
//! - `ids`: Bank and account identifiers
//! - `operation`: Replayable ledger operations
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;
pub mod ids;
pub mod operation;

pub use account::Account;
pub use error::LedgerError;
pub use ids::{AccountId, BankId};
pub use operation::{OperationRecord, OperationType};
