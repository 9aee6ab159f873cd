//! End-to-end integration tests across both planes.
//!
//! These tests exercise the full module lifecycle the way the account
//! framework drives it: install, stage inside a transaction, intercept the
//! real operation attempt, decide, and observe the ledger afterwards. They
//! also pin the structured log wording, which external tooling matches
//! verbatim.

use std::io;
use std::sync::{Arc, Mutex};

use prestage_gate::{OwnerAuthority, PrestageModule, StaticContext};
use prestage_ledger::MemoryStore;
use prestage_types::{constants, AccountId, ContractId, Operation, PrestageError, TransactionId};

/// Helper: a module installed for one owner account.
struct Installed {
    module: PrestageModule<MemoryStore, OwnerAuthority>,
    module_id: ContractId,
    owner: AccountId,
}

impl Installed {
    fn new() -> Self {
        let module_id = ContractId::random();
        let owner = AccountId::random();
        let mut authority = OwnerAuthority::new();
        authority.grant(owner.clone());

        let module = PrestageModule::new(module_id.clone(), MemoryStore::new(), authority);
        module.on_install();

        Self {
            module,
            module_id,
            owner,
        }
    }

    fn owner_ctx(&self, tx: &TransactionId) -> StaticContext {
        StaticContext::new(tx.clone(), self.owner.clone())
    }
}

fn transfer(target: &ContractId, payload: &[u8]) -> Operation {
    Operation::dummy_for_target(target.clone(), "transfer", payload.to_vec())
}

// ===================================================================
// Scenarios
// ===================================================================

#[test]
fn stage_then_execute_then_replay_denied() {
    let mut installed = Installed::new();
    let token = ContractId::random();
    let op = transfer(&token, b"to=V,value=1");

    // Transaction T: owner stages, then the framework intercepts the real
    // transfer attempt.
    let tx = TransactionId::random();
    let ctx = installed.owner_ctx(&tx);
    installed.module.stage(&installed.owner, op.clone(), &ctx).unwrap();

    assert!(installed.module.decide(&op, &ctx));
    assert!(installed.module.list_allowances(&installed.owner).is_empty());

    // A second, separate transaction attempting the identical transfer:
    // denied, since nothing was staged under the new transaction id.
    let tx2 = TransactionId::random();
    let ctx2 = installed.owner_ctx(&tx2);
    assert!(!installed.module.decide(&op, &ctx2));
}

#[test]
fn mismatched_payload_denied_and_allowance_survives() {
    let mut installed = Installed::new();
    let token = ContractId::random();
    let staged = transfer(&token, b"to=V,value=1");

    let tx = TransactionId::random();
    let ctx = installed.owner_ctx(&tx);
    installed
        .module
        .stage(&installed.owner, staged.clone(), &ctx)
        .unwrap();

    // Same transaction attempts a transfer with a different value.
    let attempted = transfer(&token, b"to=V,value=100");
    assert!(!installed.module.decide(&attempted, &ctx));

    // The original unconsumed allowance is still in the ledger.
    let remaining = installed.module.list_allowances(&installed.owner);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].operation, staged);
}

#[test]
fn unconsumed_allowance_is_dead_weight_not_a_hazard() {
    let mut installed = Installed::new();
    let token = ContractId::random();
    let op = transfer(&token, b"to=V,value=1");

    // Staged but never attempted in its own transaction.
    let tx1 = TransactionId::random();
    let ctx1 = installed.owner_ctx(&tx1);
    installed.module.stage(&installed.owner, op.clone(), &ctx1).unwrap();

    // Every later transaction is denied; the entry stays behind.
    for _ in 0..3 {
        let tx = TransactionId::random();
        let ctx = installed.owner_ctx(&tx);
        assert!(!installed.module.decide(&op, &ctx));
    }
    assert_eq!(installed.module.list_allowances(&installed.owner).len(), 1);
}

#[test]
fn staging_by_non_owner_writes_nothing() {
    let mut installed = Installed::new();
    let token = ContractId::random();
    let op = transfer(&token, b"to=V,value=1");

    let mallory = AccountId::random();
    let tx = TransactionId::random();
    let ctx = StaticContext::new(tx, mallory.clone());

    // Mallory tries to stage under the owner's account without authority.
    let err = installed
        .module
        .stage(&installed.owner, op, &ctx)
        .unwrap_err();
    assert!(matches!(err, PrestageError::NotAuthorized(_)));
    assert!(installed.module.list_allowances(&installed.owner).is_empty());
    assert!(installed.module.list_allowances(&mallory).is_empty());
}

#[test]
fn bootstrap_exemption_allows_staging_call_itself() {
    let mut installed = Installed::new();
    let tx = TransactionId::random();
    let ctx = installed.owner_ctx(&tx);

    // The framework intercepts the stage call like any other sensitive
    // operation; the gate must allow it without any pre-staged allowance.
    let stage_call = Operation::new(
        installed.module_id.clone(),
        constants::STAGE_ENTRY_POINT,
        b"encoded stage args".to_vec(),
    );
    assert!(installed.module.decide(&stage_call, &ctx));
    assert!(installed.module.list_allowances(&installed.owner).is_empty());
}

#[test]
fn empty_account_query_is_empty_not_an_error() {
    let installed = Installed::new();
    assert!(installed
        .module
        .list_allowances(&AccountId::random())
        .is_empty());
}

#[test]
fn interleaved_allowances_consume_independently() {
    let mut installed = Installed::new();
    let token = ContractId::random();
    let tx = TransactionId::random();
    let ctx = installed.owner_ctx(&tx);

    let a = transfer(&token, b"a");
    let b = transfer(&token, b"b");
    let c = transfer(&token, b"c");
    for op in [&a, &b, &c] {
        installed
            .module
            .stage(&installed.owner, op.clone(), &ctx)
            .unwrap();
    }

    // Consume the middle entry; the others keep their relative order.
    assert!(installed.module.decide(&b, &ctx));
    let ops: Vec<Operation> = installed
        .module
        .list_allowances(&installed.owner)
        .into_iter()
        .map(|alw| alw.operation)
        .collect();
    assert_eq!(ops, vec![a.clone(), c.clone()]);

    assert!(installed.module.decide(&c, &ctx));
    assert!(installed.module.decide(&a, &ctx));
    assert!(!installed.module.decide(&a, &ctx));
}

// ===================================================================
// Log wording — part of the observable contract
// ===================================================================

/// Shared buffer the capturing subscriber writes into.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a capturing subscriber and return everything it logged.
fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(buffer.clone())
        .without_time()
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[test]
fn decision_log_wording_is_stable() {
    let mut installed = Installed::new();
    let token = ContractId::random();
    let op = transfer(&token, b"to=V,value=1");
    let tx = TransactionId::random();
    let ctx = installed.owner_ctx(&tx);

    let logs = capture_logs(|| {
        installed.module.on_install();
        installed
            .module
            .stage(&installed.owner, op.clone(), &ctx)
            .unwrap();

        let stage_call = Operation::new(
            installed.module_id.clone(),
            constants::STAGE_ENTRY_POINT,
            Vec::new(),
        );
        assert!(installed.module.decide(&stage_call, &ctx));
        assert!(installed.module.decide(&op, &ctx));
        assert!(!installed.module.decide(&op, &ctx));
    });

    assert!(logs.contains("[prestage] installed"), "logs:\n{logs}");
    assert!(
        logs.contains("[prestage] staged entry point"),
        "logs:\n{logs}"
    );
    assert!(logs.contains("[prestage] skip stage call"), "logs:\n{logs}");
    assert!(
        logs.contains("[prestage] allowing operation"),
        "logs:\n{logs}"
    );
    assert!(
        logs.contains("[prestage] no matching allowance"),
        "logs:\n{logs}"
    );
}
