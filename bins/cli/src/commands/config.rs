//! Config inspection commands.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use fieldcheck_config::{ValidatorConfig, config_schema, to_pretty_json, to_pretty_toml};

/// Print the effective config (defaults + file + env).
pub fn run_config_show(mode: OutputMode, config: &ValidatorConfig) -> Result<CliOutput, CliError> {
    let stdout = if mode.is_json() {
        to_pretty_json(config)?
    } else {
        to_pretty_toml(config)?
    };
    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}

/// Print the JSON Schema of the config file.
pub fn run_config_schema() -> Result<CliOutput, CliError> {
    Ok(CliOutput {
        stdout: to_json_line(&config_schema())?,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
