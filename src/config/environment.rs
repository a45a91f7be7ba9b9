// ABOUTME: Environment configuration for the catalog source and default browse state
// ABOUTME: Parses environment variables with logged fallbacks for unusable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::browse::ViewMode;
use crate::catalog::Catalog;
use crate::constants::env_config;
use crate::errors::AppResult;
use crate::sorting::SortState;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Environment name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explorer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplorerConfig {
    /// Catalog file replacing the bundled dataset
    pub catalog_path: Option<PathBuf>,
    /// Sort applied before the user picks one
    pub default_sort: SortState,
    /// Result layout applied before the user picks one
    pub view_mode: ViewMode,
    /// Deployment environment
    pub environment: Environment,
}

impl ExplorerConfig {
    /// Read configuration from environment variables
    ///
    /// Unset variables take their defaults. Values that fail to parse are
    /// logged and replaced by the default.
    #[must_use]
    pub fn from_env() -> Self {
        let catalog_path = env::var(env_config::CATALOG_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let default_sort = env::var(env_config::DEFAULT_SORT).map_or_else(
            |_| SortState::default(),
            |raw| {
                SortState::parse(&raw).unwrap_or_else(|| {
                    warn!(
                        variable = env_config::DEFAULT_SORT,
                        value = %raw,
                        "Unrecognized sort, using {}",
                        SortState::default()
                    );
                    SortState::default()
                })
            },
        );

        let view_mode = env::var(env_config::VIEW_MODE).map_or_else(
            |_| ViewMode::default(),
            |raw| {
                ViewMode::parse(&raw).unwrap_or_else(|| {
                    warn!(
                        variable = env_config::VIEW_MODE,
                        value = %raw,
                        "Unrecognized view mode, using {}",
                        ViewMode::default()
                    );
                    ViewMode::default()
                })
            },
        );

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();

        Self {
            catalog_path,
            default_sort,
            view_mode,
            environment,
        }
    }

    /// Load the configured catalog, or the bundled one when no path is set
    ///
    /// # Errors
    ///
    /// Returns any error from [`Catalog::from_path`] or [`Catalog::bundled`].
    pub fn load_catalog(&self) -> AppResult<Catalog> {
        let Some(path) = self.catalog_path.as_deref() else {
            return Catalog::bundled();
        };
        info!(path = %path.display(), "Loading catalog from file");
        Catalog::from_path(path)
    }
}
