//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is present must carry a usable
//! value, otherwise loading fails instead of silently keeping the default.

use crate::schema::ValidatorConfig;
use fieldcheck_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: active locale.
pub const ENV_LOCALE: &str = "FIELDCHECK_LOCALE";
/// Env var: fallback locale.
pub const ENV_FALLBACK_LOCALE: &str = "FIELDCHECK_FALLBACK_LOCALE";
/// Env var: strict translation checking.
pub const ENV_STRICT_TRANSLATIONS: &str = "FIELDCHECK_STRICT_TRANSLATIONS";

const ENV_VARS: [&str; 3] = [ENV_LOCALE, ENV_FALLBACK_LOCALE, ENV_STRICT_TRANSLATIONS];

/// Parsed env overrides. `None` means the variable was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorEnv {
    /// Active locale override.
    pub locale: Option<Box<str>>,
    /// Fallback locale override.
    pub fallback_locale: Option<Box<str>>,
    /// Strict translation override.
    pub strict_translations: Option<bool>,
}

impl ValidatorEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            locale: parse_optional_trimmed_string(map, ENV_LOCALE)?,
            fallback_locale: parse_optional_trimmed_string(map, ENV_FALLBACK_LOCALE)?,
            strict_translations: parse_optional_bool(map, ENV_STRICT_TRANSLATIONS)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let map: BTreeMap<String, String> = ENV_VARS
            .into_iter()
            .filter_map(|name| std::env::var(name).ok().map(|value| (name.to_string(), value)))
            .collect();
        Self::from_map(&map)
    }

    /// Returns true when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.locale.is_none()
            && self.fallback_locale.is_none()
            && self.strict_translations.is_none()
    }
}

/// Apply env overrides on top of `config` and validate the result.
pub fn apply_env_overrides(
    mut config: ValidatorConfig,
    env: &ValidatorEnv,
) -> Result<ValidatorConfig, ErrorEnvelope> {
    if let Some(locale) = env.locale.as_deref() {
        config.locale = locale.to_string();
    }
    if let Some(locale) = env.fallback_locale.as_deref() {
        config.fallback_locale = locale.to_string();
    }
    if let Some(strict) = env.strict_translations {
        config.strict_translations = strict;
    }
    config.validate()
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    /// Stable operational code for this error.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidBool { .. } => ErrorCode::new("config", "invalid_env_bool"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(error.error_code(), error.to_string());
        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidBool { var, value } => envelope
                .with_metadata("env_var", var)
                .with_metadata("value", value),
        }
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }
    Ok(Some(trimmed.into()))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: raw.clone(),
        }),
    }
}
