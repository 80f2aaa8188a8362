//! Supported message locales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale a message template is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English. The default fallback.
    En,
    /// Simplified Chinese.
    Zh,
}

/// Every supported locale, in stable order.
pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Zh];

impl Locale {
    /// Canonical locale identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a locale identifier.
    ///
    /// Case-insensitive and tolerant of region tags (`zh-CN`, `en_US`).
    /// Returns `None` for unsupported languages.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or_default();
        match lang {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_region_tags_and_case() {
        assert_eq!(Locale::parse("zh"), Some(Locale::Zh));
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::Zh));
        assert_eq!(Locale::parse(" EN_us "), Some(Locale::En));
    }

    #[test]
    fn parse_rejects_unsupported_languages() {
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("zz-ZH"), None);
    }

    #[test]
    fn serializes_as_identifier() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Locale::Zh)?, "\"zh\"");
        let parsed: Locale = serde_json::from_str("\"en\"")?;
        assert_eq!(parsed, Locale::En);
        Ok(())
    }
}
