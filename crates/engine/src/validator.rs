//! Request-time validation against a frozen registry and translator.

use crate::builder::{TypeCheck, ValidatorBuilder};
use fieldcheck_config::ValidatorConfig;
use fieldcheck_i18n::{Locale, Translator};
use fieldcheck_rules::{RuleRegistry, UnknownRuleError, parse_rule_tag};
use fieldcheck_shared::{
    AsFieldValue, ConfigResult, ConfigurationError, Constrained, FieldValue, FieldViolation,
    ValidationResult,
};
use std::sync::Arc;

/// Label used by [`Validator::validate_var`].
pub const VAR_LABEL: &str = "value";

/// Immutable validator shared by every request.
///
/// Cloning is cheap: the registry and translator are reference-counted and
/// never mutated after [`ValidatorBuilder::build`].
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<RuleRegistry>,
    translator: Arc<Translator>,
}

impl Validator {
    pub(crate) const fn from_parts(
        registry: Arc<RuleRegistry>,
        translator: Arc<Translator>,
    ) -> Self {
        Self {
            registry,
            translator,
        }
    }

    /// Start assembling a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Build a validator from a loaded config with the built-in rules only.
    pub fn from_config(config: &ValidatorConfig) -> ConfigResult<Self> {
        ValidatorBuilder::from_config(config).build()
    }

    /// Locale used by [`validate_default`](Self::validate_default).
    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.translator.active()
    }

    /// Frozen rule registry.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Frozen translator.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Verify that every rule `T` references is registered.
    pub fn check_type<T: Constrained>(&self) -> ConfigResult<()> {
        TypeCheck::of::<T>().verify(|rule| self.registry.contains(rule))
    }

    /// Validate `object`, reporting the first failing rule in `locale`.
    ///
    /// Fields are checked in declaration order and each field's rules in
    /// declared order; evaluation stops at the first failure. An
    /// unregistered rule name is an `Err`, never a validation failure.
    pub fn validate<T: Constrained>(
        &self,
        object: &T,
        locale: &str,
    ) -> ConfigResult<ValidationResult> {
        self.validate_in(object, self.translator.resolve_locale(locale))
    }

    /// Validate `object` in the active locale.
    pub fn validate_default<T: Constrained>(&self, object: &T) -> ConfigResult<ValidationResult> {
        self.validate_in(object, self.translator.active())
    }

    /// Validate `object` in an already-resolved locale.
    pub fn validate_in<T: Constrained>(
        &self,
        object: &T,
        locale: Locale,
    ) -> ConfigResult<ValidationResult> {
        for constraint in T::constraints() {
            let value = object.field_value(constraint.field);
            for rule in constraint.rules {
                let passed = self
                    .registry
                    .evaluate(rule.name, value, rule.params)
                    .map_err(|error| unknown_rule::<T>(constraint.field, error))?;
                if !passed {
                    let label = constraint.display_label();
                    return Ok(self.violation(
                        constraint.field,
                        label,
                        rule.name,
                        rule.params,
                        locale,
                    ));
                }
            }
        }
        Ok(ValidationResult::Valid)
    }

    /// Validate one ad-hoc value against a rule tag such as `"required,email"`.
    ///
    /// Messages use the label `"value"`.
    pub fn validate_var<V: AsFieldValue + ?Sized>(
        &self,
        value: &V,
        tag: &str,
        locale: &str,
    ) -> ConfigResult<ValidationResult> {
        self.validate_var_labeled(value, tag, VAR_LABEL, locale)
    }

    /// Like [`validate_var`](Self::validate_var) with an explicit label.
    pub fn validate_var_labeled<V: AsFieldValue + ?Sized>(
        &self,
        value: &V,
        tag: &str,
        label: &str,
        locale: &str,
    ) -> ConfigResult<ValidationResult> {
        let rules = parse_rule_tag(tag)?;
        let locale = self.translator.resolve_locale(locale);
        let value: FieldValue<'_> = value.as_field_value();
        for rule in &rules {
            let passed = self
                .registry
                .evaluate(rule.name, value, &rule.params)
                .map_err(|error| unknown_rule::<V>(label, error))?;
            if !passed {
                return Ok(self.violation(label, label, rule.name, &rule.params, locale));
            }
        }
        Ok(ValidationResult::Valid)
    }

    fn violation(
        &self,
        field: &str,
        label: &str,
        rule: &str,
        params: &[&str],
        locale: Locale,
    ) -> ValidationResult {
        tracing::debug!(field, rule, %locale, "validation failed");
        ValidationResult::Invalid(FieldViolation {
            field: field.to_string(),
            label: label.to_string(),
            rule: rule.to_string(),
            message: self.translator.translate_in(rule, label, params, locale),
        })
    }
}

fn unknown_rule<T: ?Sized>(field: &str, error: UnknownRuleError) -> ConfigurationError {
    ConfigurationError::UnknownRule {
        type_name: std::any::type_name::<T>().to_string(),
        field: field.to_string(),
        rule: error.rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_shared::{FieldConstraint, RuleSpec};

    struct Login {
        account: String,
        secret: String,
    }

    impl Constrained for Login {
        fn constraints() -> &'static [FieldConstraint] {
            const CONSTRAINTS: &[FieldConstraint] = &[
                FieldConstraint::labeled("account", "账号", &[RuleSpec::new("required")]),
                FieldConstraint::new(
                    "secret",
                    &[RuleSpec::new("required"), RuleSpec::new("password")],
                ),
            ];
            CONSTRAINTS
        }

        fn field_value(&self, field: &str) -> FieldValue<'_> {
            match field {
                "account" => self.account.as_field_value(),
                "secret" => self.secret.as_field_value(),
                _ => FieldValue::Missing,
            }
        }
    }

    fn validator() -> ConfigResult<Validator> {
        Validator::builder().build()
    }

    #[test]
    fn valid_object_passes() -> ConfigResult<()> {
        let login = Login {
            account: "alice".to_string(),
            secret: "abc123".to_string(),
        };
        assert_eq!(validator()?.validate(&login, "en")?, ValidationResult::Valid);
        Ok(())
    }

    #[test]
    fn declared_label_is_used() -> ConfigResult<()> {
        let login = Login {
            account: String::new(),
            secret: "abc123".to_string(),
        };
        let result = validator()?.validate(&login, "zh")?;
        assert_eq!(result.message(), Some("账号 为必填字段"));
        Ok(())
    }

    #[test]
    fn raw_field_name_is_the_default_label() -> ConfigResult<()> {
        let login = Login {
            account: "alice".to_string(),
            secret: "short".to_string(),
        };
        let result = validator()?.validate(&login, "en")?;
        let violation = result.violation().cloned();
        assert_eq!(
            violation,
            Some(FieldViolation {
                field: "secret".to_string(),
                label: "secret".to_string(),
                rule: "password".to_string(),
                message: "secret must contain letters and digits, length 6-20".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn validate_default_uses_active_locale() -> ConfigResult<()> {
        let login = Login {
            account: String::new(),
            secret: String::new(),
        };
        let mut builder = Validator::builder();
        builder.locale(Locale::En);
        let validator = builder.build()?;
        assert_eq!(
            validator.validate_default(&login)?.message(),
            Some("账号 is required")
        );
        Ok(())
    }

    #[test]
    fn validate_var_uses_value_label() -> ConfigResult<()> {
        let validator = validator()?;
        let result = validator.validate_var("not-an-email", "required,email", "en")?;
        assert_eq!(result.message(), Some("value invalid format"));

        let result = validator.validate_var_labeled("", "required", "邮箱", "zh")?;
        assert_eq!(result.message(), Some("邮箱 为必填字段"));
        Ok(())
    }

    #[test]
    fn validate_var_rejects_unknown_rule_and_bad_tag() -> ConfigResult<()> {
        let validator = validator()?;
        assert!(matches!(
            validator.validate_var("x", "required,uuid", "en"),
            Err(ConfigurationError::UnknownRule { ref rule, .. }) if rule == "uuid"
        ));
        assert!(matches!(
            validator.validate_var("x", "required,,email", "en"),
            Err(ConfigurationError::InvalidRuleTag { .. })
        ));
        Ok(())
    }

    #[test]
    fn validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
    }
}
