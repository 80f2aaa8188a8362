//! Result helpers for shared error handling.

use crate::errors::{ConfigurationError, ErrorEnvelope};

/// Shared result type used across the workspace.
pub type Result<T, E = ErrorEnvelope> = std::result::Result<T, E>;

/// Result of a startup assembly step.
pub type ConfigResult<T> = std::result::Result<T, ConfigurationError>;

/// Extension helpers for lifting typed errors into `ErrorEnvelope`s.
pub trait ResultExt<T> {
    /// Convert the error into an envelope.
    fn into_envelope(self) -> Result<T>;

    /// Convert the error into an envelope and attach one metadata entry.
    fn with_context(self, key: &str, value: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ErrorEnvelope>,
{
    fn into_envelope(self) -> Result<T> {
        self.map_err(Into::into)
    }

    fn with_context(self, key: &str, value: impl Into<String>) -> Result<T> {
        self.map_err(|error| error.into().with_metadata(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorCode, ErrorKind};

    #[test]
    fn into_envelope_converts_configuration_errors() {
        let value: ConfigResult<()> = Err(ConfigurationError::EmptyRuleName);
        let lifted = value.into_envelope();

        assert!(matches!(
            lifted,
            Err(ErrorEnvelope {
                kind: ErrorKind::Invariant,
                ..
            })
        ));
    }

    #[test]
    fn with_context_attaches_metadata() {
        let value: Result<i32> = Err(ErrorEnvelope::expected(
            ErrorCode::invalid_input(),
            "bad input",
        ));
        let mapped = value.with_context("source", "stdin");

        assert!(mapped.is_err());
        if let Err(error) = mapped {
            assert_eq!(
                error.metadata.get("source").map(String::as_str),
                Some("stdin")
            );
        }
    }

    #[test]
    fn ok_values_pass_through() {
        let value: ConfigResult<u8> = Ok(7);
        assert!(matches!(value.into_envelope(), Ok(7)));
    }
}
