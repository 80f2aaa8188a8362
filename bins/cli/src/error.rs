use fieldcheck_shared::{ConfigurationError, ErrorCode, ErrorEnvelope, ErrorKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Ok = 0,
    InvalidInput = 2,
    Io = 3,
    Internal = 1,
}

impl ExitCode {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Debug)]
pub enum CliError {
    InvalidInput(String),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Configuration(ConfigurationError),
    Envelope(ErrorEnvelope),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidInput(_) => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::Io,
            Self::Serialization(_) | Self::Configuration(_) => ExitCode::Internal,
            Self::Envelope(envelope) => envelope_exit_code(envelope),
        }
    }

    /// Shared error model view, used for JSON output.
    #[must_use]
    pub fn to_envelope(&self) -> ErrorEnvelope {
        match self {
            Self::InvalidInput(message) => {
                ErrorEnvelope::expected(ErrorCode::invalid_input(), message.as_str())
            },
            Self::Io(error) => ErrorEnvelope::unexpected(ErrorCode::io(), error.to_string()),
            Self::Serialization(error) => {
                ErrorEnvelope::unexpected(ErrorCode::internal(), error.to_string())
            },
            Self::Configuration(error) => ErrorEnvelope::from(error.clone()),
            Self::Envelope(envelope) => envelope.clone(),
        }
    }
}

fn envelope_exit_code(envelope: &ErrorEnvelope) -> ExitCode {
    let code = envelope.code.code();
    if code == "io" || code.starts_with("config_file") {
        return ExitCode::Io;
    }
    match envelope.kind {
        ErrorKind::Expected => ExitCode::InvalidInput,
        ErrorKind::Invariant | ErrorKind::Unexpected => ExitCode::Internal,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(formatter, "invalid input: {message}"),
            Self::Io(error) => write!(formatter, "io error: {error}"),
            Self::Serialization(error) => write!(formatter, "serialization error: {error}"),
            Self::Configuration(error) => write!(formatter, "configuration error: {error}"),
            Self::Envelope(envelope) => {
                write!(formatter, "{}: {}", envelope.code, envelope.message)
            },
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

impl From<ConfigurationError> for CliError {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl From<ErrorEnvelope> for CliError {
    fn from(error: ErrorEnvelope) -> Self {
        Self::Envelope(error)
    }
}
