//! Application error codes and their numeric ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Numeric range a family of application codes lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeRange {
    /// `0`: success.
    Success,
    /// `400..=499`: generic client errors.
    Client,
    /// `500..=599`: generic server errors.
    Server,
    /// `1000..=1999`: identity and user domain.
    Identity,
    /// `2000..=2999`: content domain (posts, categories, tags).
    Content,
}

impl CodeRange {
    /// Every declared range, in ascending numeric order.
    pub const ALL: [Self; 5] = [
        Self::Success,
        Self::Client,
        Self::Server,
        Self::Identity,
        Self::Content,
    ];

    /// Inclusive bounds of the range.
    #[must_use]
    pub const fn bounds(self) -> RangeInclusive<u32> {
        match self {
            Self::Success => 0..=0,
            Self::Client => 400..=499,
            Self::Server => 500..=599,
            Self::Identity => 1000..=1999,
            Self::Content => 2000..=2999,
        }
    }

    /// Range containing `code`, if any.
    #[must_use]
    pub fn of(code: u32) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|range| range.bounds().contains(&code))
    }

    /// Short label of the range.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Client => "client",
            Self::Server => "server",
            Self::Identity => "identity",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A catalog entry: numeric code, symbolic name, and default message.
///
/// Entries are `const` items; they are never built at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppError {
    code: u32,
    name: &'static str,
    message: &'static str,
}

impl AppError {
    /// Declare an entry.
    #[must_use]
    pub const fn new(code: u32, name: &'static str, message: &'static str) -> Self {
        Self {
            code,
            name,
            message,
        }
    }

    /// Numeric code served to API clients.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Symbolic name, e.g. `UserNotFound`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Default message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Range the code falls in.
    #[must_use]
    pub fn range(&self) -> Option<CodeRange> {
        CodeRange::of(self.code)
    }

    /// Returns true for the success entry.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Same code with a call-site message (e.g. a translated validation message).
    #[must_use]
    pub fn with_message(&self, message: impl Into<String>) -> CodedError {
        CodedError {
            code: self.code,
            message: message.into(),
        }
    }

    /// Owned `{code, message}` pair with the default message.
    #[must_use]
    pub fn to_coded(&self) -> CodedError {
        self.with_message(self.message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "code: {}, message: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_coded().serialize(serializer)
    }
}

/// Owned `{code, message}` pair as carried by API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("code: {code}, message: {message}")]
pub struct CodedError {
    /// Numeric application code.
    pub code: u32,
    /// Message shown to the caller.
    pub message: String,
}

impl From<AppError> for CodedError {
    fn from(error: AppError) -> Self {
        error.to_coded()
    }
}
