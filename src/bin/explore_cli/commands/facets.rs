// ABOUTME: The facets subcommand: list every legal facet value with record counts
// ABOUTME: Mirrors the option lists a filter panel would offer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use explore907::{
    catalog::Catalog, errors::AppResult, formatters::OutputFormat, presentation::FacetSummary,
};

use crate::helpers::display::print_output;

/// Run `facets`
pub fn run(catalog: &Catalog, format: OutputFormat) -> AppResult<()> {
    print_output(&FacetSummary::from_catalog(catalog), format)
}
