//! Output format helpers for CLI commands.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
    /// Emit machine-readable JSON output (legacy alias).
    #[arg(long, global = true, hide = true)]
    pub json: bool,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Output mode derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
}

impl OutputMode {
    /// Build output mode from CLI flags.
    #[must_use]
    pub const fn from_args(args: &OutputArgs) -> Self {
        let format = match (args.output, args.json) {
            (Some(value), _) => value,
            (None, true) => OutputFormat::Json,
            (None, false) => OutputFormat::Text,
        };
        Self { format }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Pretty JSON with a trailing newline.
pub fn to_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}
