//! Rule tag parsing for ad-hoc single-value checks.
//!
//! Tag grammar: comma-separated rules, each either `name` or
//! `name=param [param ...]` with whitespace-separated parameters.
//! `"required,max_len=20"` parses to two rules.

use fieldcheck_shared::{ConfigResult, ConfigurationError};

/// One rule reference borrowed from a tag string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule<'a> {
    /// Rule name.
    pub name: &'a str,
    /// Positional parameters.
    pub params: Vec<&'a str>,
}

/// Parse a rule tag into its rules, in order.
pub fn parse_rule_tag(tag: &str) -> ConfigResult<Vec<ParsedRule<'_>>> {
    if tag.trim().is_empty() {
        return Err(invalid(tag, "tag is empty"));
    }

    tag.split(',')
        .map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(invalid(tag, "empty rule segment"));
            }
            match segment.split_once('=') {
                None => Ok(ParsedRule {
                    name: segment,
                    params: Vec::new(),
                }),
                Some((name, raw_params)) => {
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(invalid(tag, "rule name before `=` is empty"));
                    }
                    let params: Vec<&str> = raw_params.split_whitespace().collect();
                    if params.is_empty() {
                        return Err(invalid(tag, "missing parameters after `=`"));
                    }
                    Ok(ParsedRule { name, params })
                },
            }
        })
        .collect()
}

fn invalid(tag: &str, reason: &'static str) -> ConfigurationError {
    ConfigurationError::InvalidRuleTag {
        tag: tag.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_params_in_order() -> ConfigResult<()> {
        let rules = parse_rule_tag("required, max_len=20 ,oneof=red green blue")?;

        assert_eq!(
            rules,
            vec![
                ParsedRule {
                    name: "required",
                    params: vec![]
                },
                ParsedRule {
                    name: "max_len",
                    params: vec!["20"]
                },
                ParsedRule {
                    name: "oneof",
                    params: vec!["red", "green", "blue"]
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "  ", "required,,email", "=5", "max_len="] {
            assert!(
                matches!(
                    parse_rule_tag(tag),
                    Err(ConfigurationError::InvalidRuleTag { .. })
                ),
                "tag {tag:?} should be rejected"
            );
        }
    }
}
