//! Identifier types for banks and registered accounts

use std::fmt;
use uuid::Uuid;

/// Bank identifier
///
/// Generated once per `Bank` and stamped onto every account it registers.
/// An account only carries this id, never the bank itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BankId(Uuid);

impl BankId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        BankId(Uuid::new_v4())
    }
}

impl Default for BankId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Positional handle of an account inside a bank's account sequence
///
/// Returned by `Bank::add_account`. Stays valid as long as the sequence is
/// only grown through the bank; edits made via `Bank::accounts_mut` can shift
/// or invalidate handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub usize);

impl AccountId {
    /// Index into the bank's account sequence
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
