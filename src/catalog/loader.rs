// ABOUTME: Catalog file parsing for JSON and YAML datasets
// ABOUTME: Accepts a bare record array or an object wrapping it under "activities"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::mem;
use std::path::Path;

use tracing::debug;

use super::Catalog;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl CatalogFormat {
    /// Infer the format from a file extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Key under which a catalog object may wrap its record array
const WRAPPER_KEY: &str = "activities";

impl Catalog {
    /// Parse a JSON catalog document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the JSON does not describe activity
    /// records, or a validation error from [`Catalog::new`].
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let mut document: serde_json::Value = serde_json::from_str(content)?;
        if let Some(wrapped) = document.get_mut(WRAPPER_KEY) {
            document = mem::take(wrapped);
        }
        let records: Vec<ActivityRecord> = serde_json::from_value(document)?;
        Self::new(records)
    }

    /// Parse a YAML catalog document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the YAML does not describe activity
    /// records, or a validation error from [`Catalog::new`].
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let mut document: serde_yaml::Value = serde_yaml::from_str(content)?;
        if let Some(wrapped) = document.get_mut(WRAPPER_KEY) {
            document = mem::take(wrapped);
        }
        let records: Vec<ActivityRecord> = serde_yaml::from_value(document)?;
        Self::new(records)
    }

    /// Load a catalog file, choosing the parser from its extension
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for an unsupported extension, `StorageError`
    /// if the file cannot be read, and parse or validation errors otherwise.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let resource_id = path.display().to_string();
        let format = CatalogFormat::from_path(path).ok_or_else(|| {
            AppError::invalid_format("Catalog file must have a .json, .yaml, or .yml extension")
                .with_resource_id(resource_id.clone())
        })?;

        debug!(path = %resource_id, ?format, "Reading catalog file");
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(resource_id.clone()))?;

        match format {
            CatalogFormat::Json => Self::from_json_str(&content),
            CatalogFormat::Yaml => Self::from_yaml_str(&content),
        }
        .map_err(|e| {
            if e.context.resource_id.is_some() {
                e
            } else {
                e.with_resource_id(resource_id)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("a.JSON")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("a.yml")),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_wrapped_document_accepted() {
        let json = r#"{ "activities": [] }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(catalog.is_empty());
    }
}
