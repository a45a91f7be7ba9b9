// ABOUTME: Unified error handling for catalog loading, selection parsing, and configuration
// ABOUTME: Defines ErrorCode, ErrorContext, AppError and conversions from serde and io errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The filter and sort pipeline is total and never fails. Errors only arise at
//! the edges: loading a catalog file, validating its records, reading
//! configuration, and serializing output. All of those report through
//! [`AppError`] so callers see a single error shape with a stable code.

use std::error::Error as StdError;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a validation rule
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is absent or empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input is not in a recognized format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A record with this identifier already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    /// Generic configuration failure
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value could not be interpreted
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading from disk failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit code for CLI front ends
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::InvalidFormat => 65,
            Self::ResourceNotFound => 66,
            Self::ConfigError | Self::ConfigInvalid => 78,
            Self::StorageError => 74,
            Self::ResourceAlreadyExists | Self::InternalError | Self::SerializationError => 70,
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Record or file the error refers to
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the catalog
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing or empty
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Required field '{field}' is missing or empty"),
        )
    }

    /// Unrecognized data format
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Duplicate identifier
    #[must_use]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Storage (file system) error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)?;
        if let Some(resource_id) = &self.context.resource_id {
            write!(f, " ({resource_id})")?;
        }
        Ok(())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {error}")).with_source(error)
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization(format!("YAML error: {error}")).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display_includes_resource() {
        let error = AppError::missing_field("title").with_resource_id("kenai-river");
        let rendered = error.to_string();
        assert!(rendered.starts_with("A required field is missing"));
        assert!(rendered.contains("'title'"));
        assert!(rendered.ends_with("(kenai-river)"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ResourceNotFound).unwrap();
        assert_eq!(json, "\"RESOURCE_NOT_FOUND\"");
    }

    #[test]
    fn test_json_error_conversion_keeps_source() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        assert_ne!(
            ErrorCode::ResourceNotFound.exit_code(),
            ErrorCode::InvalidInput.exit_code()
        );
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
    }
}
