//! Rule message translation with silent locale fallback.

use crate::locale::{Locale, SUPPORTED_LOCALES};
use crate::templates::{default_templates, raw_failure_text, render};
use std::collections::BTreeMap;

/// Startup phase of the translator: collects templates per locale.
#[derive(Debug, Clone)]
pub struct TranslatorBuilder {
    active: Locale,
    fallback: Locale,
    templates: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl TranslatorBuilder {
    /// Builder with the default templates for every supported locale.
    #[must_use]
    pub fn new(active: Locale) -> Self {
        let templates: BTreeMap<Locale, BTreeMap<String, String>> = SUPPORTED_LOCALES
            .into_iter()
            .map(|locale| {
                let entries: BTreeMap<String, String> = default_templates(locale)
                    .iter()
                    .map(|(rule, template)| ((*rule).to_string(), (*template).to_string()))
                    .collect();
                (locale, entries)
            })
            .collect();
        Self {
            active,
            fallback: Locale::En,
            templates,
        }
    }

    /// Locale used when a requested locale is unsupported or lacks a template.
    #[must_use]
    pub fn fallback(mut self, locale: Locale) -> Self {
        self.fallback = locale;
        self
    }

    /// Add or replace the template for `rule` in `locale`.
    pub fn add_template(
        &mut self,
        locale: Locale,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        let rule = rule.into();
        tracing::debug!(%locale, rule = %rule, "template registered");
        self.templates
            .entry(locale)
            .or_default()
            .insert(rule, template.into());
        self
    }

    /// Freeze the templates.
    #[must_use]
    pub fn build(self) -> Translator {
        Translator {
            active: self.active,
            fallback: self.fallback,
            templates: self.templates,
        }
    }
}

/// Read-only message translator.
///
/// Never fails: an unsupported locale resolves to the fallback locale, and a
/// rule without any template degrades to the raw rule failure text.
#[derive(Debug, Clone)]
pub struct Translator {
    active: Locale,
    fallback: Locale,
    templates: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl Translator {
    /// Translator with default templates, `active` locale, and English fallback.
    #[must_use]
    pub fn new(active: Locale) -> Self {
        TranslatorBuilder::new(active).build()
    }

    /// Locale used when callers do not pick one.
    #[must_use]
    pub const fn active(&self) -> Locale {
        self.active
    }

    /// Locale used when the requested one is unusable.
    #[must_use]
    pub const fn fallback(&self) -> Locale {
        self.fallback
    }

    /// Map a requested locale identifier onto a supported locale.
    #[must_use]
    pub fn resolve_locale(&self, requested: &str) -> Locale {
        Locale::parse(requested).unwrap_or_else(|| {
            tracing::debug!(
                requested,
                fallback = %self.fallback,
                "unsupported locale, using fallback"
            );
            self.fallback
        })
    }

    /// Template for `rule` in exactly `locale`.
    #[must_use]
    pub fn template(&self, locale: Locale, rule: &str) -> Option<&str> {
        self.templates
            .get(&locale)
            .and_then(|entries| entries.get(rule))
            .map(String::as_str)
    }

    /// Localized message for `rule` failing on the field labelled `label`.
    #[must_use]
    pub fn translate(&self, rule: &str, label: &str, locale: &str) -> String {
        self.translate_with_params(rule, label, &[], locale)
    }

    /// Like [`translate`](Self::translate), substituting `{param}` from `params`.
    #[must_use]
    pub fn translate_with_params(
        &self,
        rule: &str,
        label: &str,
        params: &[&str],
        locale: &str,
    ) -> String {
        self.translate_in(rule, label, params, self.resolve_locale(locale))
    }

    /// Translate into an already-resolved locale.
    #[must_use]
    pub fn translate_in(&self, rule: &str, label: &str, params: &[&str], locale: Locale) -> String {
        let template = self.template(locale, rule).or_else(|| {
            tracing::debug!(%locale, rule, "no template in requested locale");
            self.template(self.fallback, rule)
        });
        match template {
            Some(template) => render(template, label, params),
            None => {
                tracing::debug!(rule, "no template in any locale, using raw text");
                raw_failure_text(rule, label)
            },
        }
    }

    /// Every `(locale, rule)` pair among `rules` that has no template.
    pub fn missing_templates<'a, I>(&self, rules: I) -> Vec<(Locale, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rules: Vec<&str> = rules.into_iter().collect();
        SUPPORTED_LOCALES
            .into_iter()
            .flat_map(|locale| {
                rules
                    .iter()
                    .filter(move |rule| self.template(locale, rule).is_none())
                    .map(move |rule| (locale, (*rule).to_string()))
            })
            .collect()
    }
}
