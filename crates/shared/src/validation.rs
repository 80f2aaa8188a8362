//! Constraint declarations and validation outcomes for request payloads.
//!
//! A payload type declares its constraints once, in field order, through the
//! [`Constrained`] trait (normally derived). Rules see each field through a
//! type-erased [`FieldValue`] so that one predicate serves every field type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-erased view of a single field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Absent optional value.
    Missing,
    /// String-like value.
    Str(&'a str),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    /// Returns true for the zero value of the field's type.
    ///
    /// Zero values are: missing, the empty string, `0`, `0.0`, and `false`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Missing => true,
            Self::Str(value) => value.is_empty(),
            Self::Int(value) => value == 0,
            Self::UInt(value) => value == 0,
            Self::Float(value) => value == 0.0,
            Self::Bool(value) => !value,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

/// Projection of a concrete field type into a [`FieldValue`].
pub trait AsFieldValue {
    /// Borrow the value as a rule input.
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl AsFieldValue for Box<str> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_ref()
            .map_or(FieldValue::Missing, AsFieldValue::as_field_value)
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::UInt(u64::from(*self))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl AsFieldValue for isize {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl AsFieldValue for usize {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::UInt(u64::try_from(*self).unwrap_or(u64::MAX))
    }
}

impl AsFieldValue for f32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

/// A rule reference with its declared parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Registered rule name.
    pub name: &'static str,
    /// Positional parameters passed to the rule predicate.
    pub params: &'static [&'static str],
}

impl RuleSpec {
    /// Rule without parameters.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, params: &[] }
    }

    /// Rule with positional parameters.
    #[must_use]
    pub const fn with_params(name: &'static str, params: &'static [&'static str]) -> Self {
        Self { name, params }
    }
}

/// Ordered rules and display label for one field of a payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraint {
    /// Raw field identifier.
    pub field: &'static str,
    /// Optional display label used in messages.
    pub label: Option<&'static str>,
    /// Rules in evaluation order.
    pub rules: &'static [RuleSpec],
}

impl FieldConstraint {
    /// Constraint without a display label.
    #[must_use]
    pub const fn new(field: &'static str, rules: &'static [RuleSpec]) -> Self {
        Self {
            field,
            label: None,
            rules,
        }
    }

    /// Constraint with a display label.
    #[must_use]
    pub const fn labeled(
        field: &'static str,
        label: &'static str,
        rules: &'static [RuleSpec],
    ) -> Self {
        Self {
            field,
            label: Some(label),
            rules,
        }
    }

    /// Label shown to users: the declared label, else the raw field name.
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self.label {
            Some(label) => label,
            None => self.field,
        }
    }
}

/// Payload types with statically declared field constraints.
///
/// Usually implemented with `#[derive(Constrained)]`.
pub trait Constrained {
    /// Field constraints in declaration order.
    fn constraints() -> &'static [FieldConstraint];

    /// Borrow the named field as a rule input.
    ///
    /// Unknown field names yield [`FieldValue::Missing`].
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

/// The single reported failure of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    /// Raw field identifier.
    pub field: String,
    /// Label the message was rendered with.
    pub label: String,
    /// Rule that failed.
    pub rule: String,
    /// Localized message.
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for FieldViolation {}

/// Outcome of validating one payload: valid, or exactly one violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ValidationResult {
    /// Every constraint passed.
    Valid,
    /// The first failing rule in field-then-rule order.
    Invalid(FieldViolation),
}

impl ValidationResult {
    /// Returns true when every constraint passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Borrow the violation, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<&FieldViolation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }

    /// Localized message of the violation, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.violation().map(|violation| violation.message.as_str())
    }

    /// Convert into a `Result` for `?`-style call sites.
    pub fn into_result(self) -> Result<(), FieldViolation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}
