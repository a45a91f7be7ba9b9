// ABOUTME: Output helpers for the explore907 CLI
// ABOUTME: Resolves the --format flag, formats a view, and writes it to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use explore907::{
    errors::{AppError, AppResult},
    formatters::{format_output, OutputFormat},
    presentation::PlainText,
};
use serde::Serialize;

/// Print a view to stdout
pub fn print_output<T>(data: &T, format: OutputFormat) -> AppResult<()>
where
    T: Serialize + PlainText,
{
    let output = format_output(data, format)?;
    println!("{}", output.data);
    Ok(())
}

/// Resolve the `--format` flag, rejecting names no formatter handles
pub fn parse_format(raw: &str) -> AppResult<OutputFormat> {
    OutputFormat::parse(raw).ok_or_else(|| {
        AppError::invalid_input(format!(
            "unknown format '{raw}', expected text, json, or pretty-json"
        ))
    })
}
