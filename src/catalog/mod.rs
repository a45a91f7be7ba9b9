// ABOUTME: Immutable activity catalog supplied once at startup
// ABOUTME: Validates records on load and offers ordered, read-only access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Catalog
//!
//! The catalog is the only external input of the browser: an ordered sequence
//! of [`ActivityRecord`]s that never changes after load. Filtering and sorting
//! borrow from it and never write back.
//!
//! Catalogs come from the dataset bundled into the binary
//! ([`Catalog::bundled`]) or from a JSON/YAML file ([`loader`]).

/// JSON and YAML catalog parsing
pub mod loader;

use std::collections::HashSet;

use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;

pub use loader::CatalogFormat;

/// Dataset compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/activities.json");

/// Ordered, immutable sequence of activity records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ActivityRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating each one
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a record breaking the data model
    /// (blank id or title, no activity types, no seasons) and
    /// `ResourceAlreadyExists` when two records share an id.
    pub fn new(records: Vec<ActivityRecord>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(AppError::already_exists(format!("Activity '{}'", record.id))
                    .with_resource_id(record.id.clone()));
            }
        }

        info!(records = records.len(), "Activity catalog loaded");
        Ok(Self { records })
    }

    /// Load the dataset bundled with the binary
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled dataset is malformed.
    pub fn bundled() -> AppResult<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    /// All records in catalog order
    #[must_use]
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ActivityRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}
