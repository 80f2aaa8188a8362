//! Integration tests for parsing and merging config fixtures.

use fieldcheck_config::{
    ValidatorEnv, load_validator_config_from_path, parse_validator_config_json,
    parse_validator_config_toml, to_pretty_toml,
};
use fieldcheck_shared::ErrorCode;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

fn read_fixture(relative: &str) -> Result<String, Box<dyn Error>> {
    Ok(fs::read_to_string(fixture_path(relative))?)
}

#[test]
fn parses_valid_fixture_with_templates() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("validator-config.valid.json")?;
    let config = parse_validator_config_json(&contents)?;

    assert_eq!(config.locale, "zh-CN");
    assert!(config.strict_translations);
    assert_eq!(
        config
            .templates
            .get("zh")
            .and_then(|rules| rules.get("max_len"))
            .map(String::as_str),
        Some("长度不能超过{param}个字符")
    );

    Ok(())
}

#[test]
fn parses_default_toml_fixture() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("validator-config.default.toml")?;
    let config = parse_validator_config_toml(&contents)?;

    assert_eq!(config, fieldcheck_config::ValidatorConfig::default());
    assert_eq!(to_pretty_toml(&config)?.trim(), contents.trim());

    Ok(())
}

#[test]
fn invalid_fixture_reports_error_code() -> Result<(), Box<dyn Error>> {
    let contents = read_fixture("validator-config.invalid.json")?;
    let error = parse_validator_config_json(&contents)
        .err()
        .ok_or_else(|| std::io::Error::other("expected invalid fixture error"))?;

    assert_eq!(error.code, ErrorCode::new("config", "invalid_template"));
    assert_eq!(
        error.metadata.get("locale").map(String::as_str),
        Some("en")
    );

    Ok(())
}

#[test]
fn env_fixture_overrides_toml_file() -> Result<(), Box<dyn Error>> {
    let env_map: BTreeMap<String, String> =
        serde_json::from_str(&read_fixture("validator-env.valid.json")?)?;
    let env = ValidatorEnv::from_map(&env_map)?;

    let config = load_validator_config_from_path(
        Some(&fixture_path("validator-config.default.toml")),
        &env,
    )?;

    assert_eq!(config.locale, "en");
    assert_eq!(config.fallback_locale, "en");
    assert!(!config.strict_translations);

    Ok(())
}
