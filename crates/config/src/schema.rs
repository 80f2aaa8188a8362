//! Validator configuration schema and structural checks.

use fieldcheck_i18n::Locale;
use fieldcheck_shared::{ErrorCode, ErrorEnvelope};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default active locale.
pub const DEFAULT_LOCALE: &str = "zh";
/// Default fallback locale.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Custom templates: locale identifier -> rule name -> template.
pub type TemplateOverrides = BTreeMap<String, BTreeMap<String, String>>;

/// Startup configuration for a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ValidatorConfig {
    /// Locale used when callers do not request one.
    pub locale: String,
    /// Locale used when a requested locale is unsupported or lacks a template.
    pub fallback_locale: String,
    /// Fail startup when a registered rule lacks a template in any locale.
    pub strict_translations: bool,
    /// Additional or replacement message templates.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: TemplateOverrides,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
            strict_translations: false,
            templates: BTreeMap::new(),
        }
    }
}

impl ValidatorConfig {
    /// Check structural constraints and normalize whitespace.
    ///
    /// Unsupported locale identifiers pass; they are reported at `warn` and
    /// fall back when the validator is built.
    pub fn validate(mut self) -> Result<Self, ErrorEnvelope> {
        self.locale = normalize_locale("locale", &self.locale)?;
        self.fallback_locale = normalize_locale("fallbackLocale", &self.fallback_locale)?;

        for (locale, rules) in &self.templates {
            if locale.trim().is_empty() {
                return Err(invalid_template("template locale must be non-empty", locale, ""));
            }
            if Locale::parse(locale).is_none() {
                tracing::warn!(locale = %locale, "templates configured for unsupported locale");
            }
            for (rule, template) in rules {
                if rule.trim().is_empty() {
                    return Err(invalid_template("template rule must be non-empty", locale, rule));
                }
                if template.trim().is_empty() {
                    return Err(invalid_template("template text must be non-empty", locale, rule));
                }
            }
        }

        Ok(self)
    }
}

fn normalize_locale(field: &'static str, value: &str) -> Result<String, ErrorEnvelope> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_locale"),
            format!("{field} must be non-empty"),
        )
        .with_metadata("field", field));
    }
    if Locale::parse(trimmed).is_none() {
        tracing::warn!(field, locale = trimmed, "unsupported locale configured, will fall back");
    }
    Ok(trimmed.to_string())
}

fn invalid_template(message: &str, locale: &str, rule: &str) -> ErrorEnvelope {
    ErrorEnvelope::expected(ErrorCode::new("config", "invalid_template"), message)
        .with_metadata("locale", locale.to_string())
        .with_metadata("rule", rule.to_string())
}

/// Parse and validate a JSON config document.
pub fn parse_validator_config_json(input: &str) -> Result<ValidatorConfig, ErrorEnvelope> {
    let config: ValidatorConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;
    config.validate()
}

/// Parse and validate a TOML config document.
pub fn parse_validator_config_toml(input: &str) -> Result<ValidatorConfig, ErrorEnvelope> {
    let config: ValidatorConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;
    config.validate()
}

/// JSON Schema for [`ValidatorConfig`].
#[must_use]
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(ValidatorConfig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zh_with_en_fallback() {
        let config = ValidatorConfig::default();
        assert_eq!(config.locale, "zh");
        assert_eq!(config.fallback_locale, "en");
        assert!(!config.strict_translations);
        assert!(config.templates.is_empty());
    }

    #[test]
    fn partial_json_keeps_defaults() -> Result<(), ErrorEnvelope> {
        let config = parse_validator_config_json(r#"{ "locale": " en " }"#)?;
        assert_eq!(config.locale, "en");
        assert_eq!(config.fallback_locale, "en");
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = parse_validator_config_json(r#"{ "lang": "en" }"#);
        assert!(matches!(
            result,
            Err(error) if error.code == ErrorCode::new("config", "invalid_json")
        ));
    }

    #[test]
    fn empty_locale_is_rejected() {
        let result = parse_validator_config_json(r#"{ "locale": "  " }"#);
        assert!(matches!(
            result,
            Err(error) if error.code == ErrorCode::new("config", "invalid_locale")
        ));
    }

    #[test]
    fn unsupported_locale_is_accepted() -> Result<(), ErrorEnvelope> {
        let config = parse_validator_config_json(r#"{ "locale": "fr" }"#)?;
        assert_eq!(config.locale, "fr");
        Ok(())
    }

    #[test]
    fn empty_template_text_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let error = parse_validator_config_toml("[templates.en]\nslug = \"\"\n")
            .err()
            .ok_or_else(|| std::io::Error::other("expected empty template error"))?;
        assert_eq!(error.code, ErrorCode::new("config", "invalid_template"));
        assert_eq!(error.metadata.get("rule").map(String::as_str), Some("slug"));
        Ok(())
    }

    #[test]
    fn schema_names_every_field() -> Result<(), serde_json::Error> {
        let schema = serde_json::to_value(config_schema())?;
        let mut properties = schema
            .get("properties")
            .and_then(serde_json::Value::as_object)
            .map(|properties| properties.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        properties.sort();
        assert_eq!(
            properties,
            vec!["fallbackLocale", "locale", "strictTranslations", "templates"]
        );
        Ok(())
    }
}
