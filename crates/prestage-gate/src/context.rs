//! Contracts consumed from the account framework.
//!
//! This module never inspects signatures or call stacks itself — the host
//! supplies three facts through these traits: whether the current caller is
//! authorized to act for an account, the current transaction's identifier,
//! and the identity of the immediate caller in the current call context.

use std::collections::HashSet;

use prestage_types::{AccountId, TransactionId};

/// "Is the current caller authorized to act for this account via a
/// capability-call grant?" — answered by the host's identity subsystem.
pub trait AuthorityProvider {
    fn check_authority(&self, account: &AccountId) -> bool;
}

/// The ambient facts of the call being validated.
pub trait CallContext {
    /// The current transaction's identifier, stable for the lifetime of the
    /// transaction.
    fn transaction_id(&self) -> TransactionId;

    /// The **immediate** caller in the current call context — not the
    /// transaction's ultimate signer. The distinction matters for nested
    /// calls: the allowance is looked up under the account whose code is
    /// making the call.
    fn caller(&self) -> AccountId;
}

// ---------------------------------------------------------------------------
// Simple implementations for embedders and tests
// ---------------------------------------------------------------------------

/// Authority provider backed by an explicit set of controlled accounts.
#[derive(Debug, Default)]
pub struct OwnerAuthority {
    controlled: HashSet<AccountId>,
}

impl OwnerAuthority {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the current caller controls `account`.
    pub fn grant(&mut self, account: AccountId) {
        self.controlled.insert(account);
    }

    /// Withdraw control of `account`.
    pub fn revoke(&mut self, account: &AccountId) {
        self.controlled.remove(account);
    }
}

impl AuthorityProvider for OwnerAuthority {
    fn check_authority(&self, account: &AccountId) -> bool {
        self.controlled.contains(account)
    }
}

/// Fixed call context: one transaction, one caller.
#[derive(Debug, Clone)]
pub struct StaticContext {
    pub transaction_id: TransactionId,
    pub caller: AccountId,
}

impl StaticContext {
    #[must_use]
    pub fn new(transaction_id: TransactionId, caller: AccountId) -> Self {
        Self {
            transaction_id,
            caller,
        }
    }
}

impl CallContext for StaticContext {
    fn transaction_id(&self) -> TransactionId {
        self.transaction_id.clone()
    }

    fn caller(&self) -> AccountId {
        self.caller.clone()
    }
}
