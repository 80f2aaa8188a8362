//! Response envelope fixture parity tests.

use fieldcheck_api::{
    ApiResponse, api_response_schema, app_error_to_response, error_envelope_to_response,
    validation_result_to_response,
};
use fieldcheck_catalog::ErrorCatalog;
use fieldcheck_shared::{
    ConfigurationError, ErrorEnvelope, FieldViolation, ValidationResult,
};
use serde_json::{Value, json};
use std::error::Error;
use std::fs;
use std::path::Path;

fn fixtures() -> Result<Value, Box<dyn Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("responses.json");
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn fixture(fixtures: &Value, name: &str) -> Result<Value, Box<dyn Error>> {
    fixtures
        .get(name)
        .cloned()
        .ok_or_else(|| format!("missing fixture {name}").into())
}

#[test]
fn responses_match_fixtures() -> Result<(), Box<dyn Error>> {
    let fixtures = fixtures()?;

    let violation = ValidationResult::Invalid(FieldViolation {
        field: "email".to_string(),
        label: "邮箱".to_string(),
        rule: "email".to_string(),
        message: "邮箱 格式不正确".to_string(),
    });
    let failure = validation_result_to_response(violation, json!(null));
    assert_eq!(serde_json::to_value(&failure)?, fixture(&fixtures, "validationFailure")?);

    let catalog = ErrorCatalog::standard()?;
    let user_not_found = catalog
        .by_name("UserNotFound")
        .ok_or("UserNotFound missing from catalog")?;
    let response: ApiResponse<()> = app_error_to_response(user_not_found);
    assert_eq!(serde_json::to_value(&response)?, fixture(&fixtures, "userNotFound")?);

    let envelope = ErrorEnvelope::from(ConfigurationError::EmptyRuleName);
    let response: ApiResponse<()> = error_envelope_to_response(&envelope);
    assert_eq!(serde_json::to_value(&response)?, fixture(&fixtures, "serverInternal")?);

    let success =
        validation_result_to_response(ValidationResult::Valid, json!({ "username": "alice" }));
    assert_eq!(serde_json::to_value(&success)?, fixture(&fixtures, "success")?);

    Ok(())
}

#[test]
fn responses_deserialize_from_fixtures() -> Result<(), Box<dyn Error>> {
    let fixtures = fixtures()?;
    let parsed: ApiResponse<Value> = serde_json::from_value(fixture(&fixtures, "userNotFound")?)?;
    assert_eq!(parsed, ApiResponse::fail(1001, "用户不存在"));
    Ok(())
}

#[test]
fn schema_describes_envelope_fields() -> Result<(), Box<dyn Error>> {
    let schema = serde_json::to_value(api_response_schema())?;
    let properties = schema
        .get("properties")
        .and_then(Value::as_object)
        .ok_or("schema has no properties")?;
    assert!(properties.contains_key("code"));
    assert!(properties.contains_key("message"));
    assert!(properties.contains_key("data"));
    Ok(())
}
