//! Startup assembly of a [`Validator`].

use crate::validator::Validator;
use fieldcheck_config::ValidatorConfig;
use fieldcheck_i18n::{Locale, TranslatorBuilder};
use fieldcheck_rules::RuleRegistryBuilder;
use fieldcheck_shared::{ConfigResult, ConfigurationError, Constrained, FieldConstraint, FieldValue};
use std::sync::Arc;

/// Constraint table recorded by [`ValidatorBuilder::check_type`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeCheck {
    pub(crate) type_name: &'static str,
    pub(crate) constraints: &'static [FieldConstraint],
}

impl TypeCheck {
    pub(crate) fn of<T: Constrained>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            constraints: T::constraints(),
        }
    }

    /// First rule referenced by the type that `is_registered` rejects.
    pub(crate) fn verify(&self, is_registered: impl Fn(&str) -> bool) -> ConfigResult<()> {
        for constraint in self.constraints {
            if let Some(rule) = constraint
                .rules
                .iter()
                .find(|rule| !is_registered(rule.name))
            {
                return Err(ConfigurationError::UnknownRule {
                    type_name: self.type_name.to_string(),
                    field: constraint.field.to_string(),
                    rule: rule.name.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Mutable startup phase of a [`Validator`].
///
/// Every misconfiguration surfaces as a [`ConfigurationError`], either from
/// [`register_rule`](Self::register_rule) or from [`build`](Self::build).
#[derive(Debug)]
pub struct ValidatorBuilder {
    rules: RuleRegistryBuilder,
    locale: Locale,
    fallback: Locale,
    templates: Vec<(Locale, String, String)>,
    strict_translations: bool,
    checks: Vec<TypeCheck>,
}

impl ValidatorBuilder {
    /// Builder with the built-in rules, `zh` as active and `en` as fallback locale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RuleRegistryBuilder::new(),
            locale: Locale::Zh,
            fallback: Locale::En,
            templates: Vec::new(),
            strict_translations: false,
            checks: Vec::new(),
        }
    }

    /// Builder seeded from a loaded config.
    ///
    /// Unsupported locale identifiers fall back; templates keyed by an
    /// unsupported locale are skipped. Both are logged at `warn`.
    #[must_use]
    pub fn from_config(config: &ValidatorConfig) -> Self {
        let fallback = config_locale("fallbackLocale", &config.fallback_locale, Locale::En);
        let locale = config_locale("locale", &config.locale, fallback);

        let mut builder = Self::new();
        builder
            .locale(locale)
            .fallback(fallback)
            .strict_translations(config.strict_translations);

        for (locale_id, rules) in &config.templates {
            let Some(locale) = Locale::parse(locale_id) else {
                tracing::warn!(locale = %locale_id, "skipping templates for unsupported locale");
                continue;
            };
            for (rule, template) in rules {
                builder.add_template(locale, rule.as_str(), template.as_str());
            }
        }
        builder
    }

    /// Register a custom rule. Duplicate and empty names are rejected.
    pub fn register_rule<F>(
        &mut self,
        name: impl Into<String>,
        predicate: F,
    ) -> ConfigResult<&mut Self>
    where
        F: Fn(FieldValue<'_>, &[&str]) -> bool + Send + Sync + 'static,
    {
        self.rules.register(name, predicate)?;
        Ok(self)
    }

    /// Add or replace a message template.
    pub fn add_template(
        &mut self,
        locale: Locale,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.templates.push((locale, rule.into(), template.into()));
        self
    }

    /// Locale used by [`Validator::validate_default`].
    pub const fn locale(&mut self, locale: Locale) -> &mut Self {
        self.locale = locale;
        self
    }

    /// Locale used when a requested one is unsupported or lacks a template.
    pub const fn fallback(&mut self, locale: Locale) -> &mut Self {
        self.fallback = locale;
        self
    }

    /// Fail [`build`](Self::build) when any registered rule lacks a template.
    pub const fn strict_translations(&mut self, strict: bool) -> &mut Self {
        self.strict_translations = strict;
        self
    }

    /// Verify at build time that every rule `T` references is registered.
    pub fn check_type<T: Constrained>(&mut self) -> &mut Self {
        self.checks.push(TypeCheck::of::<T>());
        self
    }

    /// Freeze the registry and templates into a shareable [`Validator`].
    pub fn build(self) -> ConfigResult<Validator> {
        for check in &self.checks {
            check.verify(|rule| self.rules.contains(rule))?;
        }

        let registry = self.rules.freeze();

        let mut translator = TranslatorBuilder::new(self.locale).fallback(self.fallback);
        for (locale, rule, template) in self.templates {
            translator.add_template(locale, rule, template);
        }
        let translator = translator.build();

        let missing = translator.missing_templates(registry.names());
        if let Some((locale, rule)) = missing.first() {
            if self.strict_translations {
                return Err(ConfigurationError::MissingTemplate {
                    locale: locale.to_string(),
                    rule: rule.clone(),
                });
            }
            for (locale, rule) in &missing {
                tracing::warn!(%locale, rule = %rule, "rule has no template");
            }
        }

        tracing::info!(
            rules = registry.len(),
            locale = %translator.active(),
            fallback = %translator.fallback(),
            checked_types = self.checks.len(),
            "validator built"
        );
        Ok(Validator::from_parts(Arc::new(registry), Arc::new(translator)))
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn config_locale(field: &'static str, value: &str, fallback: Locale) -> Locale {
    Locale::parse(value).unwrap_or_else(|| {
        tracing::warn!(field, locale = value, %fallback, "unsupported locale, using fallback");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcheck_shared::RuleSpec;

    struct Slugged;

    impl Constrained for Slugged {
        fn constraints() -> &'static [FieldConstraint] {
            const CONSTRAINTS: &[FieldConstraint] = &[FieldConstraint::new(
                "slug",
                &[RuleSpec::new("required"), RuleSpec::new("slug")],
            )];
            CONSTRAINTS
        }

        fn field_value(&self, _field: &str) -> FieldValue<'_> {
            FieldValue::Missing
        }
    }

    fn slug(value: FieldValue<'_>, _params: &[&str]) -> bool {
        value
            .as_str()
            .is_some_and(|text| text.chars().all(|ch| ch.is_ascii_lowercase() || ch == '-'))
    }

    #[test]
    fn check_type_reports_unregistered_rule() {
        let mut builder = ValidatorBuilder::new();
        builder.check_type::<Slugged>();
        let result = builder.build();
        assert!(matches!(
            result,
            Err(ConfigurationError::UnknownRule { ref field, ref rule, .. })
                if field == "slug" && rule == "slug"
        ));
    }

    #[test]
    fn check_type_passes_once_rule_is_registered() -> ConfigResult<()> {
        let mut builder = ValidatorBuilder::new();
        builder.register_rule("slug", slug)?.check_type::<Slugged>();
        let validator = builder.build()?;
        assert!(validator.registry().contains("slug"));
        Ok(())
    }

    #[test]
    fn strict_mode_requires_every_template() -> ConfigResult<()> {
        let mut builder = ValidatorBuilder::new();
        builder
            .register_rule("slug", slug)?
            .strict_translations(true)
            .add_template(Locale::En, "slug", "must be a slug");
        let result = builder.build();
        assert_eq!(
            result.err(),
            Some(ConfigurationError::MissingTemplate {
                locale: "zh".to_string(),
                rule: "slug".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn lenient_mode_builds_without_templates() -> ConfigResult<()> {
        let mut builder = ValidatorBuilder::new();
        builder.register_rule("slug", slug)?;
        assert!(builder.build().is_ok());
        Ok(())
    }

    #[test]
    fn from_config_falls_back_on_unsupported_locale() -> ConfigResult<()> {
        let config = ValidatorConfig {
            locale: "fr".to_string(),
            fallback_locale: "en".to_string(),
            ..ValidatorConfig::default()
        };
        let validator = ValidatorBuilder::from_config(&config).build()?;
        assert_eq!(validator.active_locale(), Locale::En);
        Ok(())
    }

    #[test]
    fn from_config_applies_templates() -> ConfigResult<()> {
        let mut config = ValidatorConfig::default();
        config
            .templates
            .entry("zh".to_string())
            .or_default()
            .insert("required".to_string(), "{field}不能为空".to_string());
        config
            .templates
            .entry("klingon".to_string())
            .or_default()
            .insert("required".to_string(), "ignored".to_string());

        let validator = ValidatorBuilder::from_config(&config).build()?;
        assert_eq!(
            validator.translator().translate("required", "标题", "zh"),
            "标题不能为空"
        );
        Ok(())
    }
}
