//! # prestage-gate
//!
//! **Validation Gate Plane**: the decision function the account framework
//! invokes for every sensitive operation inside a transaction, plus the
//! module facade the framework installs against an account.
//!
//! ## Architecture
//!
//! 1. **Framework contracts** ([`context`]): the authority-check and
//!    call-context traits this module consumes from the host.
//! 2. **ValidationGate** ([`gate`]): bootstrap exemption, then exact-match
//!    consumption against the allowance ledger.
//! 3. **PrestageModule** ([`module`]): the installable facade — `stage`,
//!    `decide`, `list_allowances`, `on_install`, `manifest`.
//!
//! ## Decision Flow
//!
//! ```text
//! framework → PrestageModule.decide()
//!           → ValidationGate: stage call? ──yes──▶ allow (ledger untouched)
//!                              │no
//!                              ▼
//!           → AllowanceLedger.find_and_consume() → allow / deny
//! ```
//!
//! A `false` decision is not an error: the framework converts it into
//! rejection of the whole transaction and rolls back any applied effects.

pub mod context;
pub mod gate;
pub mod module;

pub use context::{AuthorityProvider, CallContext, OwnerAuthority, StaticContext};
pub use gate::ValidationGate;
pub use module::PrestageModule;
