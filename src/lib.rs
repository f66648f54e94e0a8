//! Bank Ledger Library
//! # Overview
//!
//! A minimal ledger: accounts holding an exact decimal balance, and a bank
//! that owns them and moves funds between them.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, ids, operations, errors)
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Account registration and transfers
//!   - [`core::engine`] - Replay of operation records against a bank
//! - [`io`] - CSV reading and balance output
//! - [`cli`] - CLI arguments parsing
//! - [`pipeline`] - Read, replay, write orchestration used by the binary
//! - [`logging`] - Tracing subscriber setup
//!
//! # Funds Rules
//!
//! - **Debit**: subtracts from the balance, rejected with `Insufficient funds`
//!   if the result would be negative
//! - **Credit**: adds to the balance, unconditionally
//! - **Transfer**: debit the source, then credit the destination
//!
//! ```
//! use bank_ledger::{Account, Bank};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let mut bank = Bank::new();
//! bank.set_name("Banco del Estado");
//! let jhon = bank.add_account(Account::new("Jhon Doe", Decimal::from(2500)));
//! let andres = bank.add_account(Account::new("Andres", Decimal::from_str("1500.8989").unwrap()));
//!
//! bank.transfer_between(andres, jhon, Decimal::from(500)).unwrap();
//!
//! assert_eq!(bank.account(andres).unwrap().balance().unwrap().to_string(), "1000.8989");
//! assert_eq!(bank.account(jhon).unwrap().balance().unwrap().to_string(), "3000");
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use core::{Bank, LedgerEngine};
pub use io::write_accounts_csv;
pub use pipeline::ReplaySummary;
pub use types::{Account, AccountId, BankId, LedgerError, OperationRecord, OperationType};
