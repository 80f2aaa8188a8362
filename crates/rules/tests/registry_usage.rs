//! Registry behavior as seen by downstream crates.

use fieldcheck_rules::{RuleRegistryBuilder, UnknownRuleError, parse_rule_tag};
use fieldcheck_shared::{ConfigResult, ConfigurationError, FieldValue};

fn min_len(value: FieldValue<'_>, params: &[&str]) -> bool {
    let limit = params.first().and_then(|raw| raw.parse::<usize>().ok());
    match (value.as_str(), limit) {
        (Some(text), Some(limit)) => text.chars().count() >= limit,
        _ => false,
    }
}

#[test]
fn custom_rule_with_params_from_tag() -> ConfigResult<()> {
    let mut builder = RuleRegistryBuilder::new();
    builder.register("min_len", min_len)?;
    let registry = builder.freeze();

    let rules = parse_rule_tag("required,min_len=3")?;
    let outcome: Vec<bool> = rules
        .iter()
        .map(|rule| registry.evaluate(rule.name, FieldValue::Str("ab"), &rule.params))
        .collect::<Result<_, _>>()
        .map_err(|error| ConfigurationError::UnknownRule {
            type_name: "test".to_string(),
            field: "value".to_string(),
            rule: error.rule,
        })?;
    assert_eq!(outcome, vec![true, false]);
    Ok(())
}

#[test]
fn builtin_rules_are_preloaded() {
    let registry = RuleRegistryBuilder::new().freeze();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["email", "password", "required"]);

    let empty = RuleRegistryBuilder::empty().freeze();
    assert!(empty.is_empty());
}

#[test]
fn unknown_rule_is_an_error_not_a_failure() {
    let registry = RuleRegistryBuilder::new().freeze();
    let result = registry.evaluate("uuid", FieldValue::Str("x"), &[]);
    assert_eq!(
        result,
        Err(UnknownRuleError {
            rule: "uuid".to_string()
        })
    );
}

#[test]
fn registration_rejects_blank_and_taken_names() {
    let mut builder = RuleRegistryBuilder::new();
    assert_eq!(
        builder.register("  ", |_: FieldValue<'_>, _: &[&str]| true).err(),
        Some(ConfigurationError::EmptyRuleName)
    );
    assert!(
        builder
            .register("required", |_: FieldValue<'_>, _: &[&str]| true)
            .is_err()
    );

    let registry = builder.freeze();
    assert_eq!(
        registry.evaluate("required", FieldValue::Str(""), &[]),
        Ok(false)
    );
}

#[test]
fn builtin_rule_examples() {
    let registry = RuleRegistryBuilder::new().freeze();
    let check = |rule: &str, text: &str| registry.evaluate(rule, FieldValue::Str(text), &[]);

    assert_eq!(check("password", "abc123"), Ok(true));
    assert_eq!(check("password", "abcdef"), Ok(false));
    assert_eq!(check("password", "123456"), Ok(false));
    assert_eq!(check("password", "ab1"), Ok(false));
    assert_eq!(check("email", "a@b.co"), Ok(true));
    assert_eq!(check("email", "a@b"), Ok(false));
}
