//! # prestage-ledger
//!
//! **Allowance Ledger Plane**: the per-account mapping from account to an
//! ordered list of staged allowances, with append, exact-match scan, and
//! single-entry removal.
//!
//! ## Architecture
//!
//! 1. **AllowanceStore**: the key-value abstraction the ledger is built on.
//!    Injected as an explicit dependency so hosts can back it with their own
//!    persistent store and tests can use [`MemoryStore`].
//! 2. **AllowanceLedger**: the three ledger operations — `stage`,
//!    `find_and_consume`, `list`.
//!
//! ## Data Flow
//!
//! ```text
//! owner → Ledger.stage() → store[account].push(allowance)
//! gate  → Ledger.find_and_consume() → scan, remove first exact match
//! ```
//!
//! The ledger itself performs no authority checks — the module facade in
//! `prestage-gate` verifies account control before staging reaches here.

pub mod ledger;
pub mod store;

pub use ledger::AllowanceLedger;
pub use store::{AllowanceStore, MemoryStore};
