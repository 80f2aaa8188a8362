//! Frozen, validated lookup table over application error codes.

use crate::code::{AppError, CodeRange};
use crate::codes::STANDARD_ERRORS;
use fieldcheck_shared::{ConfigResult, ConfigurationError};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::OnceLock;

/// Read-only catalog of application error codes.
///
/// Construction checks that every code sits inside a declared range and that
/// no code or symbolic name is declared twice. There is no mutation API.
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    entries: Vec<AppError>,
    by_code: BTreeMap<u32, usize>,
    by_name: BTreeMap<&'static str, usize>,
}

impl ErrorCatalog {
    /// Validate and freeze a set of entries.
    pub fn new(entries: &[AppError]) -> ConfigResult<Self> {
        let mut by_code = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.range().is_none() {
                return Err(ConfigurationError::ErrorCodeOutOfRange {
                    code: entry.code(),
                    name: entry.name(),
                });
            }
            match by_code.entry(entry.code()) {
                Entry::Occupied(existing) => {
                    let first = entries
                        .get(*existing.get())
                        .map_or("<unknown>", AppError::name);
                    return Err(ConfigurationError::DuplicateErrorCode {
                        code: entry.code(),
                        first,
                        second: entry.name(),
                    });
                },
                Entry::Vacant(slot) => {
                    slot.insert(index);
                },
            }
            if by_name.insert(entry.name(), index).is_some() {
                return Err(ConfigurationError::DuplicateErrorName { name: entry.name() });
            }
        }

        tracing::debug!(entries = entries.len(), "error catalog frozen");
        Ok(Self {
            entries: entries.to_vec(),
            by_code,
            by_name,
        })
    }

    /// Process-wide catalog of the standard entries.
    pub fn standard() -> ConfigResult<&'static Self> {
        static STANDARD: OnceLock<ConfigResult<ErrorCatalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Self::new(STANDARD_ERRORS))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Look an entry up by symbolic name, e.g. `UserNotFound`.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&AppError> {
        self.by_name
            .get(name)
            .and_then(|index| self.entries.get(*index))
    }

    /// Look an entry up by numeric code.
    #[must_use]
    pub fn by_code(&self, code: u32) -> Option<&AppError> {
        self.by_code
            .get(&code)
            .and_then(|index| self.entries.get(*index))
    }

    /// Entries whose code falls in `range`, in declaration order.
    pub fn in_range(&self, range: CodeRange) -> impl Iterator<Item = &AppError> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.range() == Some(range))
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AppError> + '_ {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{INVALID_PARAMS, USER_NOT_FOUND};

    #[test]
    fn standard_catalog_resolves_user_not_found() -> ConfigResult<()> {
        let catalog = ErrorCatalog::standard()?;
        let entry = catalog.by_name("UserNotFound");

        assert_eq!(entry.map(AppError::code), Some(1001));
        assert_eq!(entry.map(AppError::message), Some("用户不存在"));
        assert_eq!(catalog.by_code(1001), Some(&USER_NOT_FOUND));
        Ok(())
    }

    #[test]
    fn standard_catalog_is_shared() -> ConfigResult<()> {
        let first = ErrorCatalog::standard()?;
        let second = ErrorCatalog::standard()?;
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), STANDARD_ERRORS.len());
        Ok(())
    }

    #[test]
    fn rejects_duplicate_code_within_range() {
        let entries = [
            AppError::new(1001, "UserNotFound", "用户不存在"),
            AppError::new(1001, "AccountMissing", "账号不存在"),
        ];
        let result = ErrorCatalog::new(&entries);

        assert!(matches!(
            result,
            Err(ConfigurationError::DuplicateErrorCode {
                code: 1001,
                first: "UserNotFound",
                second: "AccountMissing",
            })
        ));
    }

    #[test]
    fn rejects_duplicate_names() {
        let entries = [
            AppError::new(2001, "PostNotFound", "文章不存在"),
            AppError::new(2004, "PostNotFound", "文章不存在"),
        ];
        assert!(matches!(
            ErrorCatalog::new(&entries),
            Err(ConfigurationError::DuplicateErrorName {
                name: "PostNotFound"
            })
        ));
    }

    #[test]
    fn rejects_codes_outside_every_range() {
        let entries = [AppError::new(7, "Odd", "odd")];
        assert!(matches!(
            ErrorCatalog::new(&entries),
            Err(ConfigurationError::ErrorCodeOutOfRange { code: 7, .. })
        ));
    }

    #[test]
    fn range_listing_keeps_declaration_order() -> ConfigResult<()> {
        let catalog = ErrorCatalog::standard()?;
        let client: Vec<u32> = catalog
            .in_range(CodeRange::Client)
            .map(AppError::code)
            .collect();

        assert_eq!(client, vec![400, 401, 403, 404, 429]);
        assert_eq!(catalog.by_name("InvalidParams"), Some(&INVALID_PARAMS));
        assert!(catalog.by_name("Missing").is_none());
        Ok(())
    }
}
