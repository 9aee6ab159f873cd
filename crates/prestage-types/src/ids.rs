//! Opaque identifiers used throughout Prestage.
//!
//! Accounts, target contracts, and transactions are identified by opaque byte
//! strings supplied by the host framework. This crate never interprets their
//! contents; equality is byte equality. Entry points are numeric selectors
//! derived from the method name.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// The identity on whose behalf allowances are staged.
///
/// Opaque host-supplied bytes (typically an address). Also the ledger key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Vec<u8>);

impl AccountId {
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Short hex form for log fields.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..self.0.len().min(4)])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct:{}", hex::encode(&self.0))
    }
}

// ---------------------------------------------------------------------------
// ContractId
// ---------------------------------------------------------------------------

/// The opaque identity of a callee contract (the target of an [`Operation`]).
///
/// [`Operation`]: crate::Operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ContractId(pub Vec<u8>);

impl ContractId {
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contract:{}", hex::encode(&self.0))
    }
}

// ---------------------------------------------------------------------------
// TransactionId
// ---------------------------------------------------------------------------

/// Opaque identifier of a transaction, stable for the transaction's lifetime.
///
/// Supplied by the host's transaction subsystem. Allowances are bound to the
/// transaction that staged them through this id, which is what prevents
/// replay into a later transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TransactionId(pub Vec<u8>);

impl TransactionId {
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx:{}", hex::encode(&self.0))
    }
}

// ---------------------------------------------------------------------------
// EntryPoint
// ---------------------------------------------------------------------------

/// Numeric selector of the function being invoked on a target contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EntryPoint(pub u32);

impl EntryPoint {
    /// Derive a selector from a method name: big-endian first four bytes of
    /// `SHA-256(name)`.
    ///
    /// Every party derives the **exact same** selector for the same method
    /// name, so fixed selectors can be pinned as constants and checked
    /// against this derivation in tests.
    #[must_use]
    pub fn from_method_name(name: &str) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(name.as_bytes());
        let bytes: [u8; 4] = hash[..4].try_into().expect("SHA-256 produces 32 bytes");
        Self(u32::from_be_bytes(bytes))
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-helpers"))]
impl AccountId {
    /// Random 20-byte account id for tests.
    #[must_use]
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes.to_vec())
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl ContractId {
    /// Random 20-byte contract id for tests.
    #[must_use]
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 20];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes.to_vec())
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl TransactionId {
    /// Random 32-byte transaction id for tests.
    #[must_use]
    pub fn random() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
