// ABOUTME: Output format abstraction for rendering views as plain text or JSON
// ABOUTME: Used by the CLI to serialize result pages, details, and facet summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Every view in [`crate::presentation`] can be rendered for a person
//! ([`OutputFormat::Text`]) or for another program ([`OutputFormat::Json`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use explore907::catalog::Catalog;
//! use explore907::formatters::{format_output, OutputFormat};
//! use explore907::presentation::FacetSummary;
//!
//! # fn main() -> explore907::errors::AppResult<()> {
//! let summary = FacetSummary::from_catalog(&Catalog::bundled()?);
//! let output = format_output(&summary, OutputFormat::Json)?;
//! println!("{}", output.data);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::presentation::PlainText;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Indented JSON
    PrettyJson,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive); `None` for unrecognized names
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "pretty" | "pretty-json" | "json-pretty" => Some(Self::PrettyJson),
            _ => None,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json | Self::PrettyJson => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::PrettyJson => "pretty-json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Format a view to the specified output format
///
/// # Errors
///
/// Returns a `SerializationError` if JSON serialization fails
pub fn format_output<T>(data: &T, format: OutputFormat) -> AppResult<FormattedOutput>
where
    T: Serialize + PlainText,
{
    let data = match format {
        OutputFormat::Text => data.render_text(),
        OutputFormat::Json => serde_json::to_string(data).map_err(encoding_error)?,
        OutputFormat::PrettyJson => serde_json::to_string_pretty(data).map_err(encoding_error)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn encoding_error(e: serde_json::Error) -> AppError {
    AppError::serialization(format!("JSON encoding failed: {e}"))
}
