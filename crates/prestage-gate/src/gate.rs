//! The validation decision — bootstrap exemption, then ledger consumption.
//!
//! ## Design Principles
//!
//! - **One named carve-out**: the staging call itself is exempted from
//!   ledger validation through a single guard clause ([`ValidationGate::is_stage_call`])
//!   against pinned policy constants, never an inline comparison.
//! - **Fail-closed everywhere else**: anything that is not the staging call
//!   and has no exact-match allowance is denied.
//! - **Stable log wording**: every branch emits one structured event whose
//!   message text external tooling matches verbatim.

use prestage_ledger::{AllowanceLedger, AllowanceStore};
use prestage_types::{constants, AccountId, ContractId, Operation, TransactionId};

/// The per-operation decision function.
#[derive(Debug, Clone)]
pub struct ValidationGate {
    /// This module's own contract identity, compared against candidate
    /// targets for the bootstrap exemption.
    module_id: ContractId,
}

impl ValidationGate {
    #[must_use]
    pub fn new(module_id: ContractId) -> Self {
        Self { module_id }
    }

    /// The bootstrap exemption guard: is `candidate` a call to this module's
    /// own `stage` entry point?
    ///
    /// Requiring a pre-staged allowance for the staging call itself would be
    /// circular — nothing could ever be staged. The exemption does not bypass
    /// authorization, only the ledger: `stage` still enforces its own
    /// account-control check before writing anything.
    #[must_use]
    pub fn is_stage_call(&self, candidate: &Operation) -> bool {
        candidate.target == self.module_id
            && candidate.entry_point == constants::STAGE_ENTRY_POINT
    }

    /// Decide whether `candidate`, attempted by `caller` inside
    /// `transaction_id`, is the exact operation that was staged.
    ///
    /// On a successful match the consumed allowance is removed from the
    /// ledger in the same step. `false` is the sole failure signal — the
    /// framework turns it into rejection of the whole transaction.
    pub fn decide<S: AllowanceStore>(
        &self,
        ledger: &mut AllowanceLedger<S>,
        candidate: &Operation,
        caller: &AccountId,
        transaction_id: &TransactionId,
    ) -> bool {
        if self.is_stage_call(candidate) {
            tracing::info!(
                entry_point = %candidate.entry_point,
                "[prestage] skip stage call"
            );
            return true;
        }

        tracing::debug!(
            entry_point = %candidate.entry_point,
            caller = %caller.short(),
            "[prestage] checking operation"
        );

        let allowed = ledger.find_and_consume(caller, candidate, transaction_id);
        if allowed {
            tracing::info!(
                entry_point = %candidate.entry_point,
                caller = %caller.short(),
                "[prestage] allowing operation"
            );
        } else {
            tracing::info!(
                entry_point = %candidate.entry_point,
                caller = %caller.short(),
                "[prestage] no matching allowance"
            );
        }
        allowed
    }
}
