//! Module descriptor — static metadata consumed by the framework's
//! install-time negotiation. No logic beyond static values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// A capability scope the module requires from the framework.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope(pub String);

impl Scope {
    /// The generic call-interception scope: the framework consults this
    /// module for every sensitive call inside a transaction.
    #[must_use]
    pub fn contract_call() -> Self {
        Self("contract_call".to_string())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static module metadata: name, description, type discriminant, required
/// scopes, and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub description: String,
    pub type_id: u32,
    pub scopes: Vec<Scope>,
    pub version: String,
}

impl ModuleDescriptor {
    /// The descriptor for this module. Always the same static values.
    #[must_use]
    pub fn prestage() -> Self {
        Self {
            name: constants::MODULE_NAME.to_string(),
            description: constants::MODULE_DESCRIPTION.to_string(),
            type_id: constants::MODULE_VALIDATION_TYPE_ID,
            scopes: vec![Scope::contract_call()],
            version: constants::MODULE_VERSION.to_string(),
        }
    }
}
