//! # fieldcheck-config
//!
//! Validator configuration schema, env overrides, and loading.
//! This crate depends on `i18n` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_FALLBACK_LOCALE, ENV_LOCALE, ENV_STRICT_TRANSLATIONS, EnvParseError, ValidatorEnv,
    apply_env_overrides,
};
pub use load::{
    load_validator_config_from_path, load_validator_config_from_sources,
    load_validator_config_std_env, to_pretty_json, to_pretty_toml,
};
pub use schema::{
    DEFAULT_FALLBACK_LOCALE, DEFAULT_LOCALE, TemplateOverrides, ValidatorConfig, config_schema,
    parse_validator_config_json, parse_validator_config_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
