//! Error envelope types and the startup configuration error taxonomy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fmt, io};

/// Metadata attached to errors for diagnostics.
pub type ErrorMetadata = BTreeMap<String, String>;

/// High-level classification of error origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Expected failures (bad input, rejected payloads).
    Expected,
    /// Broken startup invariants (misconfigured rules, catalogs, templates).
    Invariant,
    /// Unexpected failures (I/O, serialization).
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected => formatter.write_str("expected"),
            Self::Invariant => formatter.write_str("invariant"),
            Self::Unexpected => formatter.write_str("unexpected"),
        }
    }
}

/// Stable operational error code with namespace and identifier.
///
/// These codes label internal failures (config loading, CLI input). They are
/// distinct from the numeric application codes served to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode {
    namespace: String,
    code: String,
}

impl ErrorCode {
    /// Create a new error code with a namespace and code.
    pub fn new(namespace: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            code: code.into(),
        }
    }

    /// Invalid input code.
    pub fn invalid_input() -> Self {
        Self::new("core", "invalid_input")
    }

    /// Not found code.
    pub fn not_found() -> Self {
        Self::new("core", "not_found")
    }

    /// I/O error code.
    pub fn io() -> Self {
        Self::new("core", "io")
    }

    /// Internal failure code.
    pub fn internal() -> Self {
        Self::new("core", "internal")
    }

    /// Code under the `config` namespace.
    pub fn config(code: impl Into<String>) -> Self {
        Self::new("config", code)
    }

    /// Returns the namespace portion.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the code identifier.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.namespace, self.code)
    }
}

/// Structured error envelope shared across crates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error kind describing the origin category.
    pub kind: ErrorKind,
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Additional diagnostic metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: ErrorMetadata,
}

impl ErrorEnvelope {
    fn with_kind(kind: ErrorKind, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Create an expected error.
    pub fn expected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Expected, code, message)
    }

    /// Create an invariant error.
    pub fn invariant(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Invariant, code, message)
    }

    /// Create an unexpected error.
    pub fn unexpected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Unexpected, code, message)
    }

    /// Attach a single metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}: {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for ErrorEnvelope {}

impl From<io::Error> for ErrorEnvelope {
    fn from(error: io::Error) -> Self {
        let code = match error.kind() {
            io::ErrorKind::NotFound => ErrorCode::not_found(),
            _ => ErrorCode::io(),
        };
        Self::unexpected(code, error.to_string())
    }
}

/// Fatal startup misconfiguration.
///
/// Raised while the rule registry, translator, error catalog, or validator is
/// being assembled. None of these reach request handling: a process that
/// hits one must abort initialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// A rule name was registered twice.
    #[error("rule `{name}` is already registered")]
    DuplicateRule {
        /// Colliding rule name.
        name: String,
    },
    /// A rule was registered with an empty name.
    #[error("rule names must be non-empty")]
    EmptyRuleName,
    /// A constraint references a rule that was never registered.
    #[error("field `{field}` of `{type_name}` references unregistered rule `{rule}`")]
    UnknownRule {
        /// Type that declared the constraint.
        type_name: String,
        /// Field carrying the constraint.
        field: String,
        /// Unregistered rule name.
        rule: String,
    },
    /// A rule tag string could not be parsed.
    #[error("invalid rule tag `{tag}`: {reason}")]
    InvalidRuleTag {
        /// Raw tag input.
        tag: String,
        /// Parse failure reason.
        reason: &'static str,
    },
    /// Two catalog entries share a numeric code within one range.
    #[error("error code {code} is declared by both `{first}` and `{second}`")]
    DuplicateErrorCode {
        /// Colliding numeric code.
        code: u32,
        /// First declaration.
        first: &'static str,
        /// Second declaration.
        second: &'static str,
    },
    /// Two catalog entries share a symbolic name.
    #[error("error name `{name}` is declared more than once")]
    DuplicateErrorName {
        /// Colliding symbolic name.
        name: &'static str,
    },
    /// A catalog entry lies outside every declared range.
    #[error("error code {code} (`{name}`) is outside every declared range")]
    ErrorCodeOutOfRange {
        /// Offending numeric code.
        code: u32,
        /// Symbolic name of the entry.
        name: &'static str,
    },
    /// Strict mode found a registered rule with no template for a locale.
    #[error("rule `{rule}` has no `{locale}` template")]
    MissingTemplate {
        /// Locale missing the template.
        locale: String,
        /// Rule missing the template.
        rule: String,
    },
}

impl ConfigurationError {
    /// Stable operational code for this error.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        let code = match self {
            Self::DuplicateRule { .. } => "duplicate_rule",
            Self::EmptyRuleName => "empty_rule_name",
            Self::UnknownRule { .. } => "unknown_rule",
            Self::InvalidRuleTag { .. } => "invalid_rule_tag",
            Self::DuplicateErrorCode { .. } => "duplicate_error_code",
            Self::DuplicateErrorName { .. } => "duplicate_error_name",
            Self::ErrorCodeOutOfRange { .. } => "error_code_out_of_range",
            Self::MissingTemplate { .. } => "missing_template",
        };
        ErrorCode::config(code)
    }
}

impl From<ConfigurationError> for ErrorEnvelope {
    fn from(error: ConfigurationError) -> Self {
        let envelope = Self::invariant(error.error_code(), error.to_string());
        match error {
            ConfigurationError::DuplicateRule { name } => envelope.with_metadata("rule", name),
            ConfigurationError::UnknownRule {
                type_name,
                field,
                rule,
            } => envelope
                .with_metadata("type", type_name)
                .with_metadata("field", field)
                .with_metadata("rule", rule),
            ConfigurationError::MissingTemplate { locale, rule } => envelope
                .with_metadata("locale", locale)
                .with_metadata("rule", rule),
            ConfigurationError::DuplicateErrorCode { code, .. }
            | ConfigurationError::ErrorCodeOutOfRange { code, .. } => {
                envelope.with_metadata("code", code.to_string())
            },
            ConfigurationError::InvalidRuleTag { tag, .. } => envelope.with_metadata("tag", tag),
            ConfigurationError::EmptyRuleName | ConfigurationError::DuplicateErrorName { .. } => {
                envelope
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_constructors() {
        let expected = ErrorEnvelope::expected(ErrorCode::invalid_input(), "invalid");
        assert_eq!(expected.kind, ErrorKind::Expected);
        assert_eq!(expected.code, ErrorCode::invalid_input());

        let invariant = ErrorEnvelope::invariant(ErrorCode::internal(), "boom");
        assert_eq!(invariant.kind, ErrorKind::Invariant);

        let unexpected = ErrorEnvelope::unexpected(ErrorCode::io(), "disk");
        assert_eq!(unexpected.kind, ErrorKind::Unexpected);
    }

    #[test]
    fn io_errors_map_to_operational_codes() {
        let missing = ErrorEnvelope::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(missing.code, ErrorCode::not_found());

        let other = ErrorEnvelope::from(io::Error::other("broken"));
        assert_eq!(other.code, ErrorCode::io());
        assert_eq!(other.kind, ErrorKind::Unexpected);
    }

    #[test]
    fn configuration_errors_become_invariant_envelopes() {
        let error = ConfigurationError::UnknownRule {
            type_name: "SignupRequest".to_string(),
            field: "email".to_string(),
            rule: "mx_record".to_string(),
        };
        let envelope = ErrorEnvelope::from(error);

        assert_eq!(envelope.kind, ErrorKind::Invariant);
        assert_eq!(envelope.code, ErrorCode::config("unknown_rule"));
        assert_eq!(
            envelope.metadata.get("rule").map(String::as_str),
            Some("mx_record")
        );
        assert!(envelope.message.contains("mx_record"));
    }

    #[test]
    fn duplicate_code_message_names_both_declarations() {
        let error = ConfigurationError::DuplicateErrorCode {
            code: 1001,
            first: "UserNotFound",
            second: "UserMissing",
        };
        assert_eq!(
            error.to_string(),
            "error code 1001 is declared by both `UserNotFound` and `UserMissing`"
        );
    }
}
