//! Registration payload validation.

use crate::CliOutput;
use crate::commands::{build_validator, locale_or_active};
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use crate::payload::RegisterRequest;
use fieldcheck_api::validation_result_to_response;
use fieldcheck_config::ValidatorConfig;
use std::io::Read;
use std::path::Path;

/// Run the validate-register command on a file or stdin.
pub fn run_validate_register(
    mode: OutputMode,
    config: &ValidatorConfig,
    input: Option<&Path>,
    locale: Option<&str>,
) -> Result<CliOutput, CliError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        },
    };
    let request = parse_register_request(&raw)?;

    let validator = build_validator(config)?;
    let locale = locale_or_active(&validator, locale);
    let result = validator.validate(&request, &locale)?;
    let exit_code = if result.is_valid() {
        ExitCode::Ok
    } else {
        ExitCode::InvalidInput
    };

    let data = serde_json::json!({ "username": request.username });
    let response = validation_result_to_response(result, data);
    let stdout = if mode.is_json() {
        to_json_line(&response)?
    } else {
        format!("code: {}, message: {}\n", response.code, response.message)
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code,
    })
}

fn parse_register_request(raw: &str) -> Result<RegisterRequest, CliError> {
    if raw.trim().is_empty() {
        return Err(CliError::InvalidInput("registration payload is empty".to_string()));
    }
    serde_json::from_str(raw).map_err(|error| {
        CliError::InvalidInput(format!("registration payload is not valid JSON: {error}"))
    })
}
