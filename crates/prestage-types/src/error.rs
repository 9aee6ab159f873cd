//! Error types for the Prestage pre-authorization gate.
//!
//! All errors use the `PS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Staging / authorization errors
//! - 9xx: General / internal errors
//!
//! Note that a validation **denial is not an error**: `decide` returns a
//! plain `false` and the framework converts that into transaction rejection.
//! Likewise a query against an account that never staged anything yields an
//! empty list, not an error.

use thiserror::Error;

use crate::AccountId;

/// Central error enum for all Prestage operations.
#[derive(Debug, Error)]
pub enum PrestageError {
    // =================================================================
    // Staging / Authorization Errors (1xx)
    // =================================================================
    /// The staging call was not authorized by the account it targets.
    /// Nothing is written to the ledger.
    #[error("PS_ERR_100: not authorized by the account: {0}")]
    NotAuthorized(AccountId),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("PS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error (host store adapters).
    #[error("PS_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PrestageError>;

impl From<serde_json::Error> for PrestageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
