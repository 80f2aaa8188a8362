//! Named rule registration (startup) and evaluation (request time).

use crate::builtin;
use fieldcheck_shared::{ConfigResult, ConfigurationError, FieldValue};
use std::collections::BTreeMap;
use std::fmt;

/// Rule predicate: `(value, params) -> passes`.
///
/// Predicates must be pure: no shared mutable state, no I/O.
pub type Predicate = dyn Fn(FieldValue<'_>, &[&str]) -> bool + Send + Sync;

/// Evaluation referenced a rule that was never registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rule `{rule}` is not registered")]
pub struct UnknownRuleError {
    /// Requested rule name.
    pub rule: String,
}

/// Mutable registration phase of the rule registry.
///
/// Only exists during startup; [`freeze`](Self::freeze) turns it into the
/// shared, read-only [`RuleRegistry`].
pub struct RuleRegistryBuilder {
    rules: BTreeMap<String, Box<Predicate>>,
}

impl RuleRegistryBuilder {
    /// Builder pre-loaded with the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        let mut rules: BTreeMap<String, Box<Predicate>> = BTreeMap::new();
        rules.insert(builtin::REQUIRED.to_string(), Box::new(builtin::required));
        rules.insert(builtin::EMAIL.to_string(), Box::new(builtin::email));
        rules.insert(builtin::PASSWORD.to_string(), Box::new(builtin::password));
        Self { rules }
    }

    /// Builder with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Register a custom rule.
    ///
    /// A name that is already taken is rejected and the existing predicate
    /// stays in place.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F) -> ConfigResult<&mut Self>
    where
        F: Fn(FieldValue<'_>, &[&str]) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyRuleName);
        }
        if self.rules.contains_key(&name) {
            tracing::warn!(rule = %name, "duplicate rule registration rejected");
            return Err(ConfigurationError::DuplicateRule { name });
        }
        tracing::debug!(rule = %name, "rule registered");
        self.rules.insert(name, Box::new(predicate));
        Ok(self)
    }

    /// Returns true when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// End the registration phase.
    #[must_use]
    pub fn freeze(self) -> RuleRegistry {
        tracing::info!(rules = self.rules.len(), "rule registry frozen");
        RuleRegistry { rules: self.rules }
    }
}

impl Default for RuleRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistryBuilder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RuleRegistryBuilder")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Frozen rule registry, safe for concurrent evaluation.
pub struct RuleRegistry {
    rules: BTreeMap<String, Box<Predicate>>,
}

impl RuleRegistry {
    /// Registry holding only the built-in rules.
    #[must_use]
    pub fn builtin() -> Self {
        RuleRegistryBuilder::new().freeze()
    }

    /// Evaluate rule `name` against `value`.
    pub fn evaluate(
        &self,
        name: &str,
        value: FieldValue<'_>,
        params: &[&str],
    ) -> Result<bool, UnknownRuleError> {
        let predicate = self.rules.get(name).ok_or_else(|| UnknownRuleError {
            rule: name.to_string(),
        })?;
        Ok(predicate(value, params))
    }

    /// Returns true when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.keys().map(String::as_str)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no rule is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RuleRegistry")
            .field("rules", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
