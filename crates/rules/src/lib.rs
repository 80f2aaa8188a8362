//! # fieldcheck-rules
//!
//! Named validation rules. Each rule is a pure predicate over one field value
//! plus optional positional parameters.
//!
//! Registration happens once at startup through [`RuleRegistryBuilder`];
//! [`RuleRegistryBuilder::freeze`] produces the read-only [`RuleRegistry`]
//! that request handling shares.

pub mod builtin;
mod registry;
mod tag;

pub use builtin::{BUILTIN_RULES, EMAIL, PASSWORD, REQUIRED};
pub use registry::{Predicate, RuleRegistry, RuleRegistryBuilder, UnknownRuleError};
pub use tag::{ParsedRule, parse_rule_tag};

/// Returns the rules crate version.
#[must_use]
pub const fn rules_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
