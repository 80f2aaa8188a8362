//! # fieldcheck-catalog
//!
//! Closed set of numeric application error codes served to API clients.
//!
//! Codes are partitioned into ranges:
//!
//! - `0` success
//! - `400..=499` generic client errors, `500..=599` generic server errors
//! - `1000..=1999` identity/user domain
//! - `2000..=2999` content domain
//!
//! Entries are `const` items declared with [`declare_app_errors!`]; the
//! [`ErrorCatalog`] validates them once and is read-only afterwards.

mod catalog;
mod code;
pub mod codes;

pub use catalog::ErrorCatalog;
pub use code::{AppError, CodeRange, CodedError};
pub use codes::STANDARD_ERRORS;

/// Returns the catalog crate version.
#[must_use]
pub const fn catalog_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
