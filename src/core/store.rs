use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use crate::core::account::Account;
use crate::core::error::{AccountError, AccountResult};

type AccountsByNumber = BTreeMap<String, Account>;

/// Every account known to the running program, keyed by account number.
///
/// The store owns its accounts; callers only ever borrow them.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountStore {
    accounts: AccountsByNumber
}

impl AccountStore {
    pub fn new() -> AccountStore {
        AccountStore { accounts: BTreeMap::new() }
    }

    /// Files `account` under its own number. An existing account
    /// is never overwritten.
    pub fn add(&mut self, account: Account) -> AccountResult<&mut Account> {
        if self.accounts.contains_key(account.number()) {
            return Err(AccountError::DuplicateAccount(account.number().to_owned()));
        }
        let number = account.number().to_owned();
        return Ok(self.accounts.entry(number).or_insert(account));
    }

    pub fn get(&self, number: &str) -> AccountResult<&Account> {
        self.accounts.get(number)
            .ok_or_else(|| AccountError::NotFound(number.to_owned()))
    }

    pub fn get_mut(&mut self, number: &str) -> AccountResult<&mut Account> {
        self.accounts.get_mut(number)
            .ok_or_else(|| AccountError::NotFound(number.to_owned()))
    }

    pub fn remove(&mut self, number: &str) -> Option<Account> {
        let removed = self.accounts.remove(number);
        if removed.is_some() {
            log::info!("removed account {}", number);
        }
        removed
    }

    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number)
    }

    /// Accounts in ascending order of account number.
    pub fn list(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Checks every record against the key it is filed under.
    /// Needed after deserializing, since serde fills the map directly.
    pub fn validate(&self) -> AccountResult<()> {
        for (key, account) in &self.accounts {
            if key != account.number() {
                return Err(AccountError::Inconsistent {
                    key: key.clone(),
                    reason: format!("filed under a different account number {}", account.number())
                });
            }
            account.check_invariants()?;
        }
        return Ok(());
    }
}
