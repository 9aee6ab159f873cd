//! The operation model — the unit of pre-authorization.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ContractId, EntryPoint};

/// A specific call to be authorized: which contract, which function, and the
/// exact encoded arguments.
///
/// Equality is exact field equality on all three fields. The argument payload
/// is opaque — it is whatever the framework's own serialization produced —
/// and is compared byte-for-byte. There is no partial or prefix matching:
/// `transfer(value=1)` and `transfer(value=100)` are different operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    /// The callee contract.
    pub target: ContractId,
    /// Selector of the function being invoked.
    pub entry_point: EntryPoint,
    /// Exact encoded arguments, uninterpreted.
    pub args: Vec<u8>,
}

impl Operation {
    #[must_use]
    pub fn new(target: ContractId, entry_point: EntryPoint, args: impl Into<Vec<u8>>) -> Self {
        Self {
            target,
            entry_point,
            args: args.into(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({} arg bytes)",
            self.target,
            self.entry_point,
            self.args.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-helpers"))]
impl Operation {
    /// Operation against a random target with the given method name and args.
    #[must_use]
    pub fn dummy(method: &str, args: impl Into<Vec<u8>>) -> Self {
        Self::new(
            ContractId::random(),
            EntryPoint::from_method_name(method),
            args,
        )
    }

    /// Operation against a fixed target, for exact-match tests.
    #[must_use]
    pub fn dummy_for_target(target: ContractId, method: &str, args: impl Into<Vec<u8>>) -> Self {
        Self::new(target, EntryPoint::from_method_name(method), args)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
