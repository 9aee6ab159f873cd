//! Fixed selectors and module metadata constants.
//!
//! The staging selector is a security-relevant policy constant: the
//! validation gate compares every candidate operation against it to apply
//! the bootstrap exemption (see `prestage-gate`). It is pinned here rather
//! than derived inline so the carve-out is named and auditable.

use crate::EntryPoint;

/// Selector of this module's own `stage` entry point.
///
/// Equals `EntryPoint::from_method_name("stage")`; a test below pins the
/// two together.
pub const STAGE_ENTRY_POINT: EntryPoint = EntryPoint(0xc7ff_6dcd);

/// Selector of the read-only `list_allowances` entry point.
pub const LIST_ALLOWANCES_ENTRY_POINT: EntryPoint = EntryPoint(0x2e18_b686);

/// Module name reported in the manifest.
pub const MODULE_NAME: &str = "prestage";

/// Human description reported in the manifest.
pub const MODULE_DESCRIPTION: &str = "Pre-authorize each operation in order to execute it";

/// Module-type discriminant for validation modules, used by the framework's
/// install-time negotiation.
pub const MODULE_VALIDATION_TYPE_ID: u32 = 2;

/// Module version reported in the manifest.
pub const MODULE_VERSION: &str = "0.2.0";
