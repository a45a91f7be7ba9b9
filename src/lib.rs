// ABOUTME: Main library entry point for the explore907 activity catalog
// ABOUTME: Wires the catalog loader, filter/sort pipeline, browse controller, and output layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # explore907
//!
//! Browse a fixed catalog of Alaska outdoor activities: filter by facets and
//! free text, sort by one of four keys, and project the result for display.
//!
//! ## Architecture
//!
//! Every state change runs the same linear pipeline over the full dataset:
//!
//! 1. **Filter** ([`filters`]) keeps the records matching every active facet
//!    and the search query, preserving catalog order.
//! 2. **Sort** ([`sorting`]) orders the survivors with a stable comparator.
//! 3. **Projection** ([`presentation`]) turns the result into display items.
//!
//! [`browse::CatalogBrowser`] owns the filter, sort and view state, applies
//! [`browse::BrowseEvent`]s, and memoizes the last pipeline run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use explore907::browse::{BrowseEvent, CatalogBrowser};
//! use explore907::catalog::Catalog;
//! use explore907::models::Area;
//! use explore907::sorting::SortKey;
//!
//! # fn main() -> explore907::errors::AppResult<()> {
//! let mut browser = CatalogBrowser::new(Catalog::bundled()?);
//! browser.apply(BrowseEvent::toggle(Area::Kenai, true));
//! browser.apply(BrowseEvent::SelectSortKey(SortKey::Rating));
//!
//! for record in browser.results().items {
//!     println!("{} ({})", record.title, record.rating);
//! }
//! # Ok(())
//! # }
//! ```

/// Unified error type re-exported from the core crate
pub mod errors;

/// Facet enumerations and `ActivityRecord` re-exported from the core crate
pub mod models;

/// Catalog constants re-exported from the core crate
pub mod constants;

/// Immutable activity catalog and its JSON/YAML loaders
pub mod catalog;

/// Filter state, facet predicates, and persisted-selection parsing
pub mod filters;

/// Sort keys, direction, and the stable comparator sort
pub mod sorting;

/// Filter-then-sort pipeline composition
pub mod pipeline;

/// Browse controller owning filter, sort and view state
pub mod browse;

/// Display projections of records and result pages
pub mod presentation;

/// Output format abstraction (plain text, JSON)
pub mod formatters;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Fixture builders shared by unit tests
#[cfg(test)]
pub mod test_utils;
