//! # fieldcheck-engine
//!
//! Validates payloads against their declared field constraints and reports
//! the first failing rule as a localized message.
//!
//! ```ignore
//! let mut builder = Validator::builder();
//! builder.check_type::<RegisterRequest>();
//! let validator = builder.build()?;
//!
//! match validator.validate(&request, "zh")? {
//!     ValidationResult::Valid => {},
//!     ValidationResult::Invalid(violation) => return Err(violation.into()),
//! }
//! ```
//!
//! A [`Validator`] is assembled once through [`ValidatorBuilder`] and then
//! shared read-only; there is no way to register rules or templates after
//! [`ValidatorBuilder::build`].

mod builder;
mod validator;

pub use builder::ValidatorBuilder;
pub use fieldcheck_i18n::Locale;
pub use fieldcheck_shared::{
    ConfigurationError, Constrained, FieldConstraint, FieldValue, FieldViolation, RuleSpec,
    ValidationResult,
};
pub use validator::{VAR_LABEL, Validator};

/// Returns the engine crate version.
#[must_use]
pub const fn engine_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
