//! # Allowance — the single-use pre-authorization record
//!
//! An `Allowance` is staged by an account owner ahead of the operation it
//! authorizes and consumed at most once, inside the same transaction.
//!
//! ## Lifecycle
//!
//! ```text
//!   ┌────────┐  exact match in same tx  ┌──────────┐
//!   │ STAGED ├─────────────────────────▶│ CONSUMED │ (removed from ledger)
//!   └───┬────┘                          └──────────┘
//!       │ transaction ends without a match
//!       ▼
//!   unreachable (its tx id can never recur)
//! ```
//!
//! ## Security Properties
//!
//! - **Single-use**: consumption removes the record; a second identical
//!   attempt finds nothing.
//! - **Transaction-bound**: the allowance carries the id of the transaction
//!   that staged it and matches only inside that transaction, so it cannot be
//!   replayed later even if never consumed.
//! - **Exact-match**: the candidate operation must equal the staged one on
//!   every field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Operation, TransactionId};

/// One staged authorization. Created only by the staging call; consumed at
/// most once by the validation gate; never otherwise mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    /// The transaction in which this allowance was staged. Matching is
    /// confined to this transaction.
    pub transaction_id: TransactionId,
    /// The exact operation being authorized.
    pub operation: Operation,
    /// The account that staged the allowance (the ledger key under normal
    /// use).
    pub caller: AccountId,
    /// When the allowance was staged. Diagnostic metadata only — never
    /// consulted during matching.
    pub staged_at: DateTime<Utc>,
}

impl Allowance {
    #[must_use]
    pub fn new(transaction_id: TransactionId, operation: Operation, caller: AccountId) -> Self {
        Self {
            transaction_id,
            operation,
            caller,
            staged_at: Utc::now(),
        }
    }

    /// Does this allowance authorize `candidate` inside `transaction_id`?
    ///
    /// Both the transaction binding and the operation must match exactly;
    /// `staged_at` is ignored.
    #[must_use]
    pub fn matches(&self, candidate: &Operation, transaction_id: &TransactionId) -> bool {
        self.transaction_id == *transaction_id && self.operation == *candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_same_transaction() {
        let op = Operation::dummy("transfer", b"value=1".to_vec());
        let tx1 = TransactionId::random();
        let tx2 = TransactionId::random();
        let allowance = Allowance::new(tx1.clone(), op.clone(), AccountId::random());

        assert!(allowance.matches(&op, &tx1));
        assert!(!allowance.matches(&op, &tx2));
    }

    #[test]
    fn matches_requires_exact_operation() {
        let target = crate::ContractId::random();
        let staged = Operation::dummy_for_target(target.clone(), "transfer", b"value=1".to_vec());
        let tx = TransactionId::random();
        let allowance = Allowance::new(tx.clone(), staged, AccountId::random());

        let near_miss =
            Operation::dummy_for_target(target, "transfer", b"value=100".to_vec());
        assert!(!allowance.matches(&near_miss, &tx));
    }

    #[test]
    fn staged_at_does_not_affect_matching() {
        let op = Operation::dummy("transfer", b"value=1".to_vec());
        let tx = TransactionId::random();
        let mut allowance = Allowance::new(tx.clone(), op.clone(), AccountId::random());
        allowance.staged_at = DateTime::<Utc>::MIN_UTC;
        assert!(allowance.matches(&op, &tx));
    }

    #[test]
    fn serde_roundtrip() {
        let allowance = Allowance::new(
            TransactionId::random(),
            Operation::dummy("transfer", b"value=1".to_vec()),
            AccountId::random(),
        );
        let json = serde_json::to_string(&allowance).unwrap();
        let back: Allowance = serde_json::from_str(&json).unwrap();
        assert_eq!(allowance, back);
    }
}
