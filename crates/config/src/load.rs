//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::env::{ValidatorEnv, apply_env_overrides};
use crate::schema::ValidatorConfig;
use fieldcheck_shared::{ErrorCode, ErrorEnvelope, ResultExt};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Load the validator config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`ValidatorEnv`)
/// - config JSON (file content)
/// - defaults (`ValidatorConfig::default()`)
pub fn load_validator_config_from_sources(
    config_json: Option<&str>,
    env: &ValidatorEnv,
) -> Result<ValidatorConfig, ErrorEnvelope> {
    let config = match config_json {
        None => ValidatorConfig::default(),
        Some(input) => parse_config_unvalidated(input, ConfigFormat::Json)?,
    };

    // env is applied last and also validates the resulting config.
    apply_env_overrides(config, env)
}

/// Load the validator config from an optional file path.
pub fn load_validator_config_from_path(
    config_path: Option<&Path>,
    env: &ValidatorEnv,
) -> Result<ValidatorConfig, ErrorEnvelope> {
    let config = match config_path {
        None => ValidatorConfig::default(),
        Some(path) => {
            let config_text = read_config_file(path)?;
            let format = detect_config_format(path)?;
            parse_config_unvalidated(&config_text, format)?
        },
    };

    let config = apply_env_overrides(config, env)?;
    tracing::debug!(
        locale = %config.locale,
        fallback = %config.fallback_locale,
        strict = config.strict_translations,
        "validator config loaded"
    );
    Ok(config)
}

/// Load the validator config from std env and an optional file path.
pub fn load_validator_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatorConfig, ErrorEnvelope> {
    let env = ValidatorEnv::from_std_env().with_context("source", "env")?;
    load_validator_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &ValidatorConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &ValidatorConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn parse_config_unvalidated(
    input: &str,
    format: ConfigFormat,
) -> Result<ValidatorConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}
