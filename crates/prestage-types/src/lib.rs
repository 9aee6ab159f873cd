//! # prestage-types
//!
//! Shared types, errors, and constants for the **Prestage** pre-authorization
//! gate.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`ContractId`], [`TransactionId`], [`EntryPoint`]
//! - **Operation model**: [`Operation`] — the target/entry-point/args triple
//! - **Allowance model**: [`Allowance`] — a single-use, transaction-bound grant
//! - **Module metadata**: [`ModuleDescriptor`], [`Scope`]
//! - **Errors**: [`PrestageError`] with `PS_ERR_` prefix codes
//! - **Constants**: fixed entry-point selectors and module identity

pub mod allowance;
pub mod constants;
pub mod error;
pub mod ids;
pub mod manifest;
pub mod operation;

// Re-export all primary types at crate root for ergonomic imports:
//   use prestage_types::{Operation, Allowance, AccountId, ...};

pub use allowance::*;
pub use error::*;
pub use ids::*;
pub use manifest::*;
pub use operation::*;

// Constants are accessed via `prestage_types::constants::FOO`
// (not re-exported to avoid name collisions).
