//! Ledger replay engine
//!
//! This module provides the `LedgerEngine` that replays operation records
//! against a single `Bank`. Holders named in records are resolved to the
//! first registered account with that holder, in insertion order.
//!
//! The engine enforces record-level rules:
//! - Every operation carries an amount
//! - Transfers carry a counterparty
//! - Credit, debit and transfer only address holders that were opened

use crate::core::bank::Bank;
use crate::types::{Account, AccountId, LedgerError, OperationRecord, OperationType};
use rust_decimal::Decimal;

/// Operation replay engine
///
/// Owns the bank the operations are applied to.
#[derive(Debug, Default)]
pub struct LedgerEngine {
    bank: Bank,
}

impl LedgerEngine {
    /// Create an engine around a fresh, unnamed bank
    pub fn new() -> Self {
        LedgerEngine { bank: Bank::new() }
    }

    /// Create an engine around an existing bank
    pub fn with_bank(bank: Bank) -> Self {
        LedgerEngine { bank }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Consume the engine, handing back the bank
    pub fn into_bank(self) -> Bank {
        self.bank
    }

    /// Final account states in registration order
    pub fn accounts(&self) -> &[Account] {
        self.bank.accounts()
    }

    /// Process a single operation record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount (or a transfer's counterparty) is missing
    /// - A named holder has no account
    /// - The account operation fails (insufficient funds, overflow, etc.)
    pub fn process(&mut self, record: OperationRecord) -> Result<(), LedgerError> {
        let amount = record
            .amount
            .ok_or_else(|| LedgerError::missing_amount(record.op_type.as_str(), &record.holder))?;

        match record.op_type {
            OperationType::Open => self.process_open(record.holder, amount),
            OperationType::Credit => self.process_credit(&record.holder, amount),
            OperationType::Debit => self.process_debit(&record.holder, amount),
            OperationType::Transfer => {
                let counterparty = record
                    .counterparty
                    .ok_or_else(|| LedgerError::missing_counterparty(&record.holder))?;
                self.process_transfer(&record.holder, &counterparty, amount)
            }
        }
    }

    /// Register a new account; duplicates of an existing holder are allowed
    fn process_open(&mut self, holder: String, amount: Decimal) -> Result<(), LedgerError> {
        self.bank.add_account(Account::new(holder, amount));
        Ok(())
    }

    fn process_credit(&mut self, holder: &str, amount: Decimal) -> Result<(), LedgerError> {
        let id = self.resolve(holder)?;
        self.account_mut(id)?.credit(amount)
    }

    fn process_debit(&mut self, holder: &str, amount: Decimal) -> Result<(), LedgerError> {
        let id = self.resolve(holder)?;
        self.account_mut(id)?.debit(amount)
    }

    fn process_transfer(
        &mut self,
        holder: &str,
        counterparty: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let source = self.resolve(holder)?;
        let destination = self.resolve(counterparty)?;
        self.bank.transfer_between(source, destination, amount)
    }

    /// First account registered for `holder`
    fn resolve(&self, holder: &str) -> Result<AccountId, LedgerError> {
        self.bank
            .find_by_holder(holder)
            .next()
            .map(|(id, _)| id)
            .ok_or_else(|| LedgerError::unknown_holder(holder))
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, LedgerError> {
        self.bank
            .account_mut(id)
            .ok_or_else(|| LedgerError::account_not_found(id.index()))
    }
}
