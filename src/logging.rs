// ABOUTME: Logging configuration and structured logging setup for the explore907 CLI
// ABOUTME: Configures log level, output format, and stderr destination via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs always go to stderr so stdout carries only command output.

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, production, testing)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::EXPLORE907.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let is_production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .as_deref()
                .map_or(defaults.format, LogFormat::from_str_or_default),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: defaults.service_name,
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Raise the level for `-v` flags: one gives `info`, two `debug`, three or more `trace`
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.level);
        self
    }

    /// Build the filter: `RUST_LOG` directives if set, plus our own crate at `level`
    fn env_filter(&self) -> EnvFilter {
        let directives = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        let base = EnvFilter::new(directives);
        match format!("explore907={}", self.level).parse() {
            Ok(directive) => base.add_directive(directive),
            Err(_) => base,
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_writer(io::stderr);

        let installed = match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init(),
            LogFormat::Pretty => registry.with(layer).try_init(),
            LogFormat::Compact => {
                let layer = layer.compact().with_target(false);
                registry.with(layer).try_init()
            }
        };
        installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "explore907 starting up"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
