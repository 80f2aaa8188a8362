//! # fieldcheck-shared
//!
//! Shared error handling and the constraint data model for the fieldcheck
//! workspace.
//!
//! This crate provides foundational types that are used across all other crates:
//!
//! - The `ErrorEnvelope` used for operational failures
//! - `ConfigurationError`, the fatal startup error taxonomy
//! - Constraint declarations (`FieldConstraint`, `RuleSpec`, `Constrained`)
//!   and validation outcomes (`ValidationResult`)
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Const declarations** - Constraints are `&'static` tables built at compile time
//! 3. **Serde-compatible** - Outcomes and envelopes serialize for API responses

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod result;
pub mod validation;

pub use errors::{ConfigurationError, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use result::{ConfigResult, Result, ResultExt};
pub use validation::{
    AsFieldValue, Constrained, FieldConstraint, FieldValue, FieldViolation, RuleSpec,
    ValidationResult,
};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
