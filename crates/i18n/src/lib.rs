//! # fieldcheck-i18n
//!
//! Localized messages for failed rules.
//!
//! The [`Translator`] maps a rule name to a message template per [`Locale`]
//! and interpolates the field label. It never fails: an unsupported locale
//! falls back silently and a rule with no template degrades to raw text.

mod locale;
pub mod templates;
mod translator;

pub use locale::{Locale, SUPPORTED_LOCALES};
pub use templates::raw_failure_text;
pub use translator::{Translator, TranslatorBuilder};

/// Returns the i18n crate version.
#[must_use]
pub const fn i18n_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
