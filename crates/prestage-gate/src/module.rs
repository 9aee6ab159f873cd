//! The installable module facade.
//!
//! `PrestageModule` is what the framework attaches to an account: it binds
//! the allowance ledger over an injected store, the validation gate, and the
//! host's authority provider, and exposes the module's five entry points —
//! `stage`, `decide`, `list_allowances`, `on_install`, and `manifest`.

use prestage_ledger::{AllowanceLedger, AllowanceStore};
use prestage_types::{
    AccountId, Allowance, ContractId, ModuleDescriptor, Operation, PrestageError, Result,
};

use crate::context::{AuthorityProvider, CallContext};
use crate::gate::ValidationGate;

/// The pre-authorization gate module, ready to install against an account.
#[derive(Debug)]
pub struct PrestageModule<S: AllowanceStore, A: AuthorityProvider> {
    gate: ValidationGate,
    ledger: AllowanceLedger<S>,
    authority: A,
}

impl<S: AllowanceStore, A: AuthorityProvider> PrestageModule<S, A> {
    /// Create the module with its own contract identity, a backing store,
    /// and the host's authority provider.
    #[must_use]
    pub fn new(module_id: ContractId, store: S, authority: A) -> Self {
        Self {
            gate: ValidationGate::new(module_id),
            ledger: AllowanceLedger::new(store),
            authority,
        }
    }

    // =================================================================
    // Entry points
    // =================================================================

    /// Stage a single-use allowance for `operation` under `account`.
    ///
    /// The authority check runs first: if the current caller does not control
    /// `account`, the call fails with [`PrestageError::NotAuthorized`] and
    /// nothing is written. The allowance is bound to the context's current
    /// transaction.
    pub fn stage(
        &mut self,
        account: &AccountId,
        operation: Operation,
        ctx: &impl CallContext,
    ) -> Result<Allowance> {
        if !self.authority.check_authority(account) {
            return Err(PrestageError::NotAuthorized(account.clone()));
        }

        let allowance = self
            .ledger
            .stage(account, operation, ctx.transaction_id());

        tracing::info!(
            entry_point = %allowance.operation.entry_point,
            account = %account.short(),
            "[prestage] staged entry point"
        );
        Ok(allowance)
    }

    /// The validation entry point the framework calls per intercepted
    /// operation. Resolves the immediate caller from the context, then runs
    /// the gate algorithm. Mutates the ledger only on a successful match.
    pub fn decide(&mut self, candidate: &Operation, ctx: &impl CallContext) -> bool {
        let caller = ctx.caller();
        let transaction_id = ctx.transaction_id();
        self.gate
            .decide(&mut self.ledger, candidate, &caller, &transaction_id)
    }

    /// Read-only snapshot of the account's staged allowances. An account
    /// that never staged anything yields an empty vec.
    #[must_use]
    pub fn list_allowances(&self, account: &AccountId) -> Vec<Allowance> {
        self.ledger.list(account)
    }

    /// Lifecycle hook invoked once when the framework attaches the module to
    /// an account. No state change.
    pub fn on_install(&self) {
        tracing::info!("[prestage] installed");
    }

    /// Static module metadata for install-time negotiation.
    #[must_use]
    pub fn manifest() -> ModuleDescriptor {
        ModuleDescriptor::prestage()
    }

    // =================================================================
    // Accessors
    // =================================================================

    /// The gate (and with it, the module identity used by the bootstrap
    /// exemption).
    #[must_use]
    pub fn gate(&self) -> &ValidationGate {
        &self.gate
    }
}
