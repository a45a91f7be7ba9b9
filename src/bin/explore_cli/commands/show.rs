// ABOUTME: The show subcommand: print one activity in full
// ABOUTME: Looks the record up by id and fails with a not-found error if absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use explore907::{
    catalog::Catalog,
    errors::{AppError, AppResult},
    formatters::OutputFormat,
    presentation::ActivityDetail,
};

use crate::helpers::display::print_output;

/// Run `show`
pub fn run(catalog: &Catalog, id: &str, format: OutputFormat) -> AppResult<()> {
    let record = catalog
        .get(id.trim())
        .ok_or_else(|| AppError::not_found(format!("Activity '{id}'")))?;
    print_output(&ActivityDetail::from(record), format)
}
