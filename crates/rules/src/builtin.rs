//! Built-in rules: `required`, `email`, `password`.
//!
//! These are the only rules available without registration. Anything else a
//! constraint references must be registered explicitly at startup.

use fieldcheck_shared::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

/// Name of the `required` rule.
pub const REQUIRED: &str = "required";
/// Name of the `email` rule.
pub const EMAIL: &str = "email";
/// Name of the `password` rule.
pub const PASSWORD: &str = "password";

/// Every built-in rule name.
pub const BUILTIN_RULES: [&str; 3] = [REQUIRED, EMAIL, PASSWORD];

/// Syntactic email shape. No DNS or MX lookup is ever performed.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// At least one ASCII letter and at least one ASCII digit, in either order.
pub const PASSWORD_PATTERN: &str = r"(?s)^(?:.*[A-Za-z].*[0-9]|.*[0-9].*[A-Za-z])";

/// Inclusive lower password length bound, in UTF-8 bytes.
pub const PASSWORD_MIN_LEN: usize = 6;
/// Inclusive upper password length bound, in UTF-8 bytes.
pub const PASSWORD_MAX_LEN: usize = 20;

// A pattern that fails to compile makes its rule reject every input;
// `patterns_compile` guards both.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());
static PASSWORD_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(PASSWORD_PATTERN).ok());

/// Fails only on the zero value of the field's type.
pub fn required(value: FieldValue<'_>, _params: &[&str]) -> bool {
    !value.is_zero()
}

/// Matches [`EMAIL_PATTERN`]. Non-string values fail.
pub fn email(value: FieldValue<'_>, _params: &[&str]) -> bool {
    let (Some(input), Some(pattern)) = (value.as_str(), EMAIL_RE.as_ref()) else {
        return false;
    };
    pattern.is_match(input)
}

/// Byte length in `[6, 20]` and matches [`PASSWORD_PATTERN`]. Non-string values fail.
pub fn password(value: FieldValue<'_>, _params: &[&str]) -> bool {
    let (Some(input), Some(pattern)) = (value.as_str(), PASSWORD_RE.as_ref()) else {
        return false;
    };
    (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&input.len()) && pattern.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn check(rule: fn(FieldValue<'_>, &[&str]) -> bool, input: &str) -> bool {
        rule(FieldValue::Str(input), &[])
    }

    #[test]
    fn patterns_compile() {
        assert!(EMAIL_RE.is_some());
        assert!(PASSWORD_RE.is_some());
    }

    #[test]
    fn required_rejects_only_zero_values() {
        assert!(!required(FieldValue::Str(""), &[]));
        assert!(!required(FieldValue::Missing, &[]));
        assert!(!required(FieldValue::Int(0), &[]));
        assert!(!required(FieldValue::UInt(0), &[]));

        assert!(required(FieldValue::Str("x"), &[]));
        assert!(required(FieldValue::Int(-3), &[]));
        assert!(required(FieldValue::Float(0.5), &[]));
    }

    #[test]
    fn email_cases() {
        assert!(check(email, "a@b.co"));
        assert!(check(email, "first.last+tag@mail.example.org"));
        assert!(!check(email, "a@b"));
        assert!(!check(email, "not-an-email"));
        assert!(!check(email, ""));
        assert!(!email(FieldValue::Int(1), &[]));
    }

    #[test]
    fn password_cases() {
        assert!(check(password, "abc123"));
        assert!(check(password, "1a1a1a"));
        assert!(!check(password, "abcdef"));
        assert!(!check(password, "123456"));
        assert!(!check(password, "ab1"));
        assert!(!check(password, "abcdefghij0123456789x"));
        assert!(!password(FieldValue::Missing, &[]));
    }

    #[test]
    fn password_length_counts_bytes() {
        // 10 chars, 24 bytes.
        assert!(!check(password, "ab1密密密密密密密"));
        // 4 chars, 6 bytes.
        assert!(check(password, "a1密1"));
    }

    #[test]
    fn password_accepts_symbols_alongside_letters_and_digits() {
        assert!(check(password, "p@ss w0rd!"));
        assert!(!check(password, "!!!!!!1"));
    }

    proptest! {
        #[test]
        fn password_accepts_mixed_alphanumerics_in_bounds(
            letter in "[A-Za-z]",
            digit in "[0-9]",
            rest in "[A-Za-z0-9]{4,18}",
        ) {
            let candidate = format!("{letter}{rest}{digit}");
            prop_assert!(check(password, &candidate));
        }

        #[test]
        fn password_rejects_overlong_inputs(input in "[A-Za-z]{10}[0-9]{11,30}") {
            prop_assert!(!check(password, &input));
        }

        #[test]
        fn password_rejects_digit_only_inputs(input in "[0-9]{6,20}") {
            prop_assert!(!check(password, &input));
        }
    }
}
