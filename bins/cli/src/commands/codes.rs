//! Error catalog listing and lookup.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use fieldcheck_catalog::{AppError, ErrorCatalog};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CodeEntry {
    code: u32,
    name: &'static str,
    message: &'static str,
    range: &'static str,
}

impl From<&AppError> for CodeEntry {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code(),
            name: error.name(),
            message: error.message(),
            range: error.range().map_or("unknown", |range| range.as_str()),
        }
    }
}

/// Run the codes command: list the catalog, or look one entry up by name.
pub fn run_codes(mode: OutputMode, name: Option<&str>) -> Result<CliOutput, CliError> {
    let catalog = ErrorCatalog::standard()?;

    let entries: Vec<CodeEntry> = match name {
        Some(name) => {
            let entry = catalog
                .by_name(name)
                .ok_or_else(|| CliError::InvalidInput(format!("unknown error code name: {name}")))?;
            vec![CodeEntry::from(entry)]
        },
        None => catalog.iter().map(CodeEntry::from).collect(),
    };

    let stdout = if mode.is_json() {
        match (name, entries.first()) {
            (Some(_), Some(entry)) => to_json_line(entry)?,
            _ => to_json_line(&entries)?,
        }
    } else {
        entries
            .iter()
            .map(|entry| {
                format!(
                    "{:>5}  {:<18} {:<9} {}\n",
                    entry.code, entry.name, entry.range, entry.message
                )
            })
            .collect()
    };

    Ok(CliOutput {
        stdout,
        stderr: String::new(),
        exit_code: ExitCode::Ok,
    })
}
