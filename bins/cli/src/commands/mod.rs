//! CLI command handlers.

pub mod check;
pub mod codes;
pub mod config;
pub mod register;
pub mod self_check;

pub use check::{CheckCommandInput, run_check};
pub use codes::run_codes;
pub use config::{run_config_schema, run_config_show};
pub use register::run_validate_register;
pub use self_check::run_self_check;

use crate::error::CliError;
use crate::payload::RegisterRequest;
use fieldcheck_config::ValidatorConfig;
use fieldcheck_engine::{Validator, ValidatorBuilder};

/// Validator for the loaded config, checked against every CLI payload type.
pub(crate) fn build_validator(config: &ValidatorConfig) -> Result<Validator, CliError> {
    let mut builder = ValidatorBuilder::from_config(config);
    builder.check_type::<RegisterRequest>();
    Ok(builder.build()?)
}

/// Requested locale, or the validator's active one.
pub(crate) fn locale_or_active(validator: &Validator, locale: Option<&str>) -> String {
    locale.map_or_else(
        || validator.active_locale().as_str().to_string(),
        str::to_string,
    )
}
