//! The allowance ledger — append, exact-match scan, single-entry removal.
//!
//! ## Design Principles
//!
//! - **Exact match only**: a candidate consumes an allowance only when the
//!   transaction id and every operation field are equal.
//! - **Single-use**: a successful match removes the entry in the same step;
//!   there is no window in which a consumed allowance is still visible.
//! - **Stable removal**: the list is rebuilt preserving the relative order of
//!   every other entry, never swap-with-last.
//! - **Linear scan by intent**: staged lists are short-lived and small
//!   (staged immediately before use, consumed within the same transaction),
//!   so a scan-and-rebuild beats any indexing scheme here.

use prestage_types::{AccountId, Allowance, Operation, TransactionId};

use crate::store::AllowanceStore;

/// The per-account allowance ledger over an injected store.
#[derive(Debug)]
pub struct AllowanceLedger<S: AllowanceStore> {
    store: S,
}

impl<S: AllowanceStore> AllowanceLedger<S> {
    /// Create a ledger over the given store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // =================================================================
    // Staging
    // =================================================================

    /// Append a new allowance for `account`, creating its list if absent.
    ///
    /// No deduplication: staging the same operation twice yields two distinct
    /// entries, each independently consumable. The authority precondition on
    /// staging is enforced by the caller (the module facade), not here.
    pub fn stage(
        &mut self,
        account: &AccountId,
        operation: Operation,
        transaction_id: TransactionId,
    ) -> Allowance {
        let allowance = Allowance::new(transaction_id, operation, account.clone());

        let mut allowances = self.store.get(account).cloned().unwrap_or_default();
        allowances.push(allowance.clone());
        self.store.put(account.clone(), allowances);

        tracing::debug!(
            account = %account.short(),
            entry_point = %allowance.operation.entry_point,
            tx = %allowance.transaction_id,
            "Allowance staged"
        );
        allowance
    }

    // =================================================================
    // Consumption
    // =================================================================

    /// Find the first allowance for `account` matching `candidate` inside
    /// `transaction_id`, remove it, and return `true`.
    ///
    /// Returns `false` — leaving the list unmodified — when nothing matches
    /// or the account has no list. The scan is in insertion order and the
    /// removal preserves the relative order of all other entries.
    pub fn find_and_consume(
        &mut self,
        account: &AccountId,
        candidate: &Operation,
        transaction_id: &TransactionId,
    ) -> bool {
        let Some(allowances) = self.store.get(account) else {
            return false;
        };

        let Some(index) = allowances
            .iter()
            .position(|a| a.matches(candidate, transaction_id))
        else {
            return false;
        };

        // Rebuild without the matched index. One read, one write — atomic
        // with respect to the decision under the sequential execution model.
        let remaining: Vec<Allowance> = allowances
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, a)| a.clone())
            .collect();
        self.store.put(account.clone(), remaining);

        tracing::debug!(
            account = %account.short(),
            entry_point = %candidate.entry_point,
            index,
            "Allowance consumed"
        );
        true
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Read-only snapshot of the account's staged allowances.
    ///
    /// An account that never staged anything yields an empty vec — never an
    /// error. Callers must be able to probe any account safely.
    #[must_use]
    pub fn list(&self, account: &AccountId) -> Vec<Allowance> {
        self.store.get(account).cloned().unwrap_or_default()
    }

    /// Number of staged allowances for the account.
    #[must_use]
    pub fn count(&self, account: &AccountId) -> usize {
        self.store.get(account).map_or(0, Vec::len)
    }

    /// Whether the account has no staged allowances.
    #[must_use]
    pub fn is_empty(&self, account: &AccountId) -> bool {
        self.count(account) == 0
    }
}
