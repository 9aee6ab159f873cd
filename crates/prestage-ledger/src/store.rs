//! Key-value store abstraction for the allowance ledger.
//!
//! The ledger never owns its persistence: the store is injected so the host
//! can back it with its own keyed storage while tests use [`MemoryStore`].
//! Keys are account ids; values are the account's ordered allowance list.

use std::collections::HashMap;

use prestage_types::{AccountId, Allowance};

/// The keyed storage the ledger operates over.
///
/// Implementations only move whole lists in and out; all list-level logic
/// (scan, stable removal) lives in the ledger.
pub trait AllowanceStore {
    /// The stored list for `account`, or `None` if it never staged anything.
    fn get(&self, account: &AccountId) -> Option<&Vec<Allowance>>;

    /// Replace the stored list for `account`.
    fn put(&mut self, account: AccountId, allowances: Vec<Allowance>);

    /// Drop the stored list for `account`, returning it if present.
    fn remove(&mut self, account: &AccountId) -> Option<Vec<Allowance>>;
}

/// In-memory store used by tests and embedders without a host store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<AccountId, Vec<Allowance>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts with a stored list (consumed-to-empty lists
    /// included, mirroring how a host KV store behaves).
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.entries.len()
    }
}

impl AllowanceStore for MemoryStore {
    fn get(&self, account: &AccountId) -> Option<&Vec<Allowance>> {
        self.entries.get(account)
    }

    fn put(&mut self, account: AccountId, allowances: Vec<Allowance>) {
        self.entries.insert(account, allowances);
    }

    fn remove(&mut self, account: &AccountId) -> Option<Vec<Allowance>> {
        self.entries.remove(account)
    }
}
