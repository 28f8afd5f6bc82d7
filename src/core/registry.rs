//! Account registry module
//!
//! This module provides the `AccountRegistry` struct which holds every
//! account opened during the session.
//!
//! The registry is responsible for:
//! - Registering accounts (last write for an id wins)
//! - Looking accounts up by id
//! - Providing sorted account listings for the session summary

use crate::types::{Account, AccountId};
use std::collections::HashMap;

/// In-memory store of all accounts for the session
///
/// Accounts are owned by the registry and never aliased across entries.
/// Nothing is persisted; the registry is dropped at exit.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    /// Map of account ids to accounts
    accounts: HashMap<AccountId, Account>,
}

impl AccountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
        }
    }

    /// Insert an account, overwriting any account stored under the same id
    ///
    /// # Returns
    ///
    /// `true` if an existing account was replaced
    pub fn register(&mut self, account: Account) -> bool {
        self.accounts
            .insert(account.id().to_string(), account)
            .is_some()
    }

    /// Look up an account by id
    pub fn lookup(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Look up an account by id for mutation
    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Capability check gating interest accrual
    pub fn is_interest_bearing(account: &Account) -> bool {
        account.is_interest_bearing()
    }

    /// Get all accounts sorted by id
    ///
    /// Sorting gives deterministic summary output.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.id().cmp(b.id()));
        accounts
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether no account has been registered yet
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
