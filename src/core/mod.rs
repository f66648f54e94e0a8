//! Core business logic module
//!
//! This module contains the ledger components:
//! - `bank` - Account ownership, registration and transfers
//! - `engine` - Replay of operation records against a bank

pub mod bank;
pub mod engine;

pub use bank::Bank;
pub use engine::LedgerEngine;
