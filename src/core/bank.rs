//! Bank module
//!
//! This module provides the `Bank` struct, the sole owner of an ordered
//! sequence of accounts. The bank is responsible for:
//! - Registering accounts and stamping them with its `BankId`
//! - Resolving an account's bank link back to the bank's name
//! - Moving funds between two accounts (debit source, then credit destination)

use crate::types::{Account, AccountId, BankId, LedgerError};
use rust_decimal::Decimal;
use tracing::debug;

/// A named, insertion-ordered collection of accounts
///
/// Accounts are owned by the bank once registered and are addressed by the
/// [`AccountId`] returned from [`Bank::add_account`]. Each registered account
/// carries the bank's [`BankId`] as a lookup link.
#[derive(Debug, Default)]
pub struct Bank {
    id: BankId,
    name: Option<String>,
    accounts: Vec<Account>,
}

/// A copy is a distinct bank: it gets a fresh id, and the copied accounts this
/// bank owned are linked to the copy instead.
impl Clone for Bank {
    fn clone(&self) -> Self {
        let id = BankId::new();
        let accounts = self
            .accounts
            .iter()
            .map(|account| {
                let mut copy = account.clone();
                if self.owns(account) {
                    copy.attach_to(id);
                }
                copy
            })
            .collect();

        Bank {
            id,
            name: self.name.clone(),
            accounts,
        }
    }
}

impl Bank {
    /// Create an empty, unnamed bank with a fresh id
    pub fn new() -> Self {
        Bank {
            id: BankId::new(),
            name: None,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Registered accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Mutable access to the underlying account sequence
    ///
    /// Accounts pushed through this reference are not stamped with the bank's
    /// id, and removals shift the positions existing [`AccountId`]s refer to.
    /// Use [`Bank::add_account`] to register accounts.
    pub fn accounts_mut(&mut self) -> &mut Vec<Account> {
        &mut self.accounts
    }

    /// Replace the whole account sequence as-is, without stamping bank ids
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Append an account and link it to this bank
    ///
    /// Always succeeds. No duplicate check is made: registering the same
    /// holder twice yields two independent accounts.
    pub fn add_account(&mut self, mut account: Account) -> AccountId {
        account.attach_to(self.id);
        self.accounts.push(account);
        AccountId(self.accounts.len() - 1)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id.index())
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(id.index())
    }

    /// Linear search for accounts held by `holder`, in insertion order
    pub fn find_by_holder<'a>(
        &'a self,
        holder: &'a str,
    ) -> impl Iterator<Item = (AccountId, &'a Account)> + 'a {
        self.accounts
            .iter()
            .enumerate()
            .filter(move |(_, account)| account.holder() == Some(holder))
            .map(|(index, account)| (AccountId(index), account))
    }

    /// Whether `account` carries this bank's link
    pub fn owns(&self, account: &Account) -> bool {
        account.bank() == Some(self.id)
    }

    /// Resolve an account's bank link to this bank's current name
    ///
    /// Returns `None` when the account is linked to another bank (or none),
    /// or when this bank has not been named yet.
    pub fn bank_name_of(&self, account: &Account) -> Option<&str> {
        if self.owns(account) {
            self.name()
        } else {
            None
        }
    }

    /// Move `amount` from `source` to `destination`
    ///
    /// Debits the source first; the destination is only credited when the
    /// debit succeeds. The accounts do not need to be registered with this
    /// bank.
    ///
    /// # Errors
    ///
    /// - `InsufficientFunds` from the debit, with both accounts untouched
    /// - Any credit failure (unset balance, overflow); the source is restored
    ///   to its balance before the debit
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        apply_transfer(source, destination, amount)?;

        debug!(
            bank = self.name().unwrap_or_default(),
            source = source.holder().unwrap_or_default(),
            destination = destination.holder().unwrap_or_default(),
            %amount,
            "transfer completed"
        );

        Ok(())
    }

    /// Move `amount` between two accounts owned by this bank
    ///
    /// Same semantics as [`Bank::transfer`]. When `source == destination` the
    /// account is debited then credited, which is a no-op on success but still
    /// subject to the funds check.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if either handle is out of range, otherwise
    /// the errors of [`Bank::transfer`].
    pub fn transfer_between(
        &mut self,
        source: AccountId,
        destination: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if source == destination {
            let account = self
                .account_mut(source)
                .ok_or_else(|| LedgerError::account_not_found(source.index()))?;
            let snapshot = account.balance();
            account.debit(amount)?;
            if let Err(e) = account.credit(amount) {
                restore(account, snapshot);
                return Err(e);
            }
        } else {
            let (from, to) = self.pair_mut(source, destination)?;
            apply_transfer(from, to, amount)?;
        }

        debug!(
            bank = self.name().unwrap_or_default(),
            %source,
            %destination,
            %amount,
            "transfer completed"
        );

        Ok(())
    }

    /// Borrow two distinct accounts mutably at once
    fn pair_mut(
        &mut self,
        a: AccountId,
        b: AccountId,
    ) -> Result<(&mut Account, &mut Account), LedgerError> {
        let len = self.accounts.len();
        for id in [a, b] {
            if id.index() >= len {
                return Err(LedgerError::account_not_found(id.index()));
            }
        }

        let (low, high) = (a.index().min(b.index()), a.index().max(b.index()));
        let (head, tail) = self.accounts.split_at_mut(high);
        let (first, second) = (&mut head[low], &mut tail[0]);

        if a.index() < b.index() {
            Ok((first, second))
        } else {
            Ok((second, first))
        }
    }
}

fn apply_transfer(
    source: &mut Account,
    destination: &mut Account,
    amount: Decimal,
) -> Result<(), LedgerError> {
    let snapshot = source.balance();
    source.debit(amount)?;

    if let Err(e) = destination.credit(amount) {
        restore(source, snapshot);
        return Err(e);
    }

    Ok(())
}

fn restore(account: &mut Account, snapshot: Option<Decimal>) {
    if let Some(balance) = snapshot {
        account.set_balance(balance);
    }
}
