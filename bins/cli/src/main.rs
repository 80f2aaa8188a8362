//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;
mod payload;

use clap::{Parser, Subcommand};
use commands::{
    CheckCommandInput, run_check, run_codes, run_config_schema, run_config_show, run_self_check,
    run_validate_register,
};
use error::{CliError, ExitCode};
use fieldcheck_api::error_envelope_to_response;
use fieldcheck_config::{ValidatorConfig, load_validator_config_std_env};
use format::{OutputArgs, OutputMode, to_json_line};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fieldcheck",
    version,
    about = "Declarative field validation with localized messages",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Validator config file (`.json` or `.toml`).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a single value against a rule tag such as `required,email`.
    Check {
        /// Comma-separated rule tag.
        #[arg(long)]
        rules: String,
        /// Value to validate.
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        /// Label used in the message (defaults to `value`).
        #[arg(long)]
        label: Option<String>,
        /// Requested locale (defaults to the configured one).
        #[arg(long)]
        locale: Option<String>,
    },
    /// Validate a registration payload (JSON) read from a file or stdin.
    ValidateRegister {
        /// Payload file; stdin when omitted.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Requested locale (defaults to the configured one).
        #[arg(long)]
        locale: Option<String>,
    },
    /// List application error codes or look one up by name.
    Codes {
        /// Catalog entry name, e.g. `UserNotFound`.
        #[arg(long)]
        name: Option<String>,
    },
    /// Build the validator with strict translations and report the result.
    SelfCheck,
    /// Inspect validator configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config (defaults, file, env).
    Show,
    /// Print the JSON Schema of the config file.
    Schema,
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_args(&cli.output);
    logging::init_tracing(cli.output.log_json);

    match run(&cli, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error, mode),
        },
        Err(error) => exit_with_error(&error, mode),
    }
}

fn exit_with_error(error: &CliError, mode: OutputMode) -> std::process::ExitCode {
    tracing::debug!(%error, "command failed");
    let response = error_envelope_to_response::<()>(&error.to_envelope());
    match to_json_line(&response) {
        Ok(line) if mode.is_json() => {
            let _ = io::stdout().write_all(line.as_bytes());
        },
        _ => {
            let _ = writeln!(io::stderr(), "error: {error}");
        },
    }
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(cli: &Cli, mode: OutputMode) -> Result<CliOutput, CliError> {
    match &cli.command {
        Commands::Codes { name } => run_codes(mode, name.as_deref()),
        Commands::Config(ConfigCommands::Schema) => run_config_schema(),
        command => {
            let config = load_config(cli)?;
            run_with_config(command, mode, &config)
        },
    }
}

fn run_with_config(
    command: &Commands,
    mode: OutputMode,
    config: &ValidatorConfig,
) -> Result<CliOutput, CliError> {
    match command {
        Commands::Check {
            rules,
            value,
            label,
            locale,
        } => run_check(
            mode,
            config,
            CheckCommandInput {
                rules,
                value,
                label: label.as_deref(),
                locale: locale.as_deref(),
            },
        ),
        Commands::ValidateRegister { input, locale } => {
            run_validate_register(mode, config, input.as_deref(), locale.as_deref())
        },
        Commands::SelfCheck => run_self_check(mode, config),
        Commands::Config(ConfigCommands::Show) => run_config_show(mode, config),
        Commands::Codes { name } => run_codes(mode, name.as_deref()),
        Commands::Config(ConfigCommands::Schema) => run_config_schema(),
    }
}

fn load_config(cli: &Cli) -> Result<ValidatorConfig, CliError> {
    Ok(load_validator_config_std_env(cli.config.as_deref())?)
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
