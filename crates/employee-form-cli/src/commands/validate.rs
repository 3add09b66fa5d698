use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use employee_form::{validate, FieldValues, ValidationErrors};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `field: message` line per error
    Text,
    /// The errors object as JSON
    Json,
}

/// Validate one employee record read from `input` (or stdin).
/// Returns whether the record passed.
pub fn execute(input: Option<&Path>, today: NaiveDate, format: OutputFormat) -> Result<bool> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read employee record: {:?}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read employee record from stdin")?;
            buf
        }
    };

    let values = parse_values(&raw)?;
    let errors = validate(&values, today);

    let stdout = io::stdout();
    render(&errors, format, &mut stdout.lock())?;

    Ok(errors.is_empty())
}

pub fn parse_values(raw: &str) -> Result<FieldValues> {
    serde_json::from_str(raw)
        .context("Input must be a JSON object with exactly the eight form fields")
}

pub fn render<W: Write>(errors: &ValidationErrors, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, errors)?;
            writeln!(out)?;
        }
        OutputFormat::Text if errors.is_empty() => {
            writeln!(out, "{}", "valid".green().bold())?;
        }
        OutputFormat::Text => {
            for (field, error) in errors.iter() {
                writeln!(out, "{}: {}", field.as_str().red(), error)?;
            }
        }
    }
    Ok(())
}
