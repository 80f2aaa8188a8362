//! Ad-hoc single value check.

use crate::CliOutput;
use crate::commands::{build_validator, locale_or_active};
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use fieldcheck_api::validation_result_to_response;
use fieldcheck_config::ValidatorConfig;
use fieldcheck_engine::{VAR_LABEL, ValidationResult};

/// Arguments of the `check` command.
#[derive(Debug, Clone, Copy)]
pub struct CheckCommandInput<'a> {
    pub rules: &'a str,
    pub value: &'a str,
    pub label: Option<&'a str>,
    pub locale: Option<&'a str>,
}

/// Run the check command.
pub fn run_check(
    mode: OutputMode,
    config: &ValidatorConfig,
    input: CheckCommandInput<'_>,
) -> Result<CliOutput, CliError> {
    let validator = build_validator(config)?;
    let locale = locale_or_active(&validator, input.locale);
    let label = input.label.unwrap_or(VAR_LABEL);

    let result = validator.validate_var_labeled(input.value, input.rules, label, &locale)?;
    let exit_code = if result.is_valid() {
        ExitCode::Ok
    } else {
        ExitCode::InvalidInput
    };

    let stdout = if mode.is_json() {
        let data = serde_json::json!({ "rules": input.rules, "label": label });
        to_json_line(&validation_result_to_response(result, data))?
    } else {
        format_check_text(&result)
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code,
    })
}

fn format_check_text(result: &ValidationResult) -> String {
    match result {
        ValidationResult::Valid => "valid\n".to_string(),
        ValidationResult::Invalid(violation) => {
            format!("invalid: {} ({})\n", violation.message, violation.rule)
        },
    }
}
