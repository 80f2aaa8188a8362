//! Strict startup self-check.

use crate::CliOutput;
use crate::commands::build_validator;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use fieldcheck_catalog::ErrorCatalog;
use fieldcheck_config::ValidatorConfig;

/// Build the validator with strict translations and report what was checked.
pub fn run_self_check(mode: OutputMode, config: &ValidatorConfig) -> Result<CliOutput, CliError> {
    let strict = ValidatorConfig {
        strict_translations: true,
        ..config.clone()
    };
    let validator = build_validator(&strict)?;
    let catalog = ErrorCatalog::standard()?;

    let rules: Vec<&str> = validator.registry().names().collect();
    let locale = validator.active_locale();
    let fallback = validator.translator().fallback();

    let stdout = if mode.is_json() {
        to_json_line(&serde_json::json!({
            "status": "ok",
            "rules": rules,
            "locale": locale,
            "fallbackLocale": fallback,
            "errorCodes": catalog.len(),
        }))?
    } else {
        format!(
            "status: ok\nrules: {}\nlocale: {locale}\nfallback: {fallback}\nerror codes: {}\n",
            rules.join(", "),
            catalog.len()
        )
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
