//! Account type for the bank ledger
//!
//! An account is a holder name paired with a decimal balance. Funds leave the
//! account through [`Account::debit`], which refuses to take the balance below
//! zero, and enter through [`Account::credit`], which performs no validation.

use super::error::LedgerError;
use super::ids::BankId;
use rust_decimal::Decimal;
use std::fmt;

/// A holder/balance pair, optionally registered with a bank
///
/// Both fields may be unset on an account built with [`Account::default`];
/// such an account is incomplete until its fields are assigned.
///
/// # Equality
///
/// Two accounts are equal when both holders are set and identical and both
/// balances are set and numerically equal (`1000.10 == 1000.1000`). An account
/// with an unset field is not equal to anything, itself included, so `Eq` is
/// deliberately not implemented.
#[derive(Debug, Clone, Default)]
pub struct Account {
    holder: Option<String>,
    balance: Option<Decimal>,
    /// Lookup link to the owning bank, set on registration
    bank: Option<BankId>,
}

impl Account {
    /// Create a complete account with a holder and an opening balance
    ///
    /// The account is not registered with any bank.
    pub fn new(holder: impl Into<String>, balance: Decimal) -> Self {
        Account {
            holder: Some(holder.into()),
            balance: Some(balance),
            bank: None,
        }
    }

    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    pub fn set_holder(&mut self, holder: impl Into<String>) {
        self.holder = Some(holder.into());
    }

    pub fn balance(&self) -> Option<Decimal> {
        self.balance
    }

    /// Overwrite the balance directly
    ///
    /// No validation: the balance may be set negative this way. The funds
    /// guard only applies at debit time.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = Some(balance);
    }

    /// Id of the bank this account was registered with, if any
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn attach_to(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Withdraw `amount` from the balance
    ///
    /// The new balance is computed first and only committed when it is not
    /// negative, so the account is untouched on every error path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The resulting balance would be below zero (`InsufficientFunds`)
    /// - The balance was never set
    /// - The subtraction overflows the decimal range or would round
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let balance = self
            .balance
            .ok_or_else(|| LedgerError::balance_not_set(self.holder()))?;

        let new_balance = exact_sum(balance, -amount, "debit")?;

        if new_balance < Decimal::ZERO {
            return Err(LedgerError::insufficient_funds(balance, amount));
        }

        self.balance = Some(new_balance);
        Ok(())
    }

    /// Add `amount` to the balance
    ///
    /// Unlike [`Account::debit`] there is no funds guard: a negative amount is
    /// applied as-is and lowers the balance, possibly below zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance was never set or the addition
    /// overflows the decimal range or would round.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let balance = self
            .balance
            .ok_or_else(|| LedgerError::balance_not_set(self.holder()))?;

        let new_balance = exact_sum(balance, amount, "credit")?;

        self.balance = Some(new_balance);
        Ok(())
    }
}

/// `balance + delta`, rejected unless the sum is exact
///
/// `checked_add` rounds fractional digits away once the 96-bit mantissa is
/// full. An exact sum gives back each operand when the other is subtracted.
fn exact_sum(balance: Decimal, delta: Decimal, operation: &str) -> Result<Decimal, LedgerError> {
    let sum = balance
        .checked_add(delta)
        .ok_or_else(|| LedgerError::arithmetic_overflow(operation))?;

    if sum.checked_sub(delta) != Some(balance) || sum.checked_sub(balance) != Some(delta) {
        return Err(LedgerError::precision_loss(operation));
    }

    Ok(sum)
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        match (&self.holder, self.balance, &other.holder, other.balance) {
            (Some(holder), Some(balance), Some(other_holder), Some(other_balance)) => {
                holder == other_holder && balance == other_balance
            }
            _ => false,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let holder = self.holder().unwrap_or("<unnamed>");
        match self.balance {
            Some(balance) => write!(f, "{}: {}", holder, balance),
            None => write!(f, "{}: <no balance>", holder),
        }
    }
}
