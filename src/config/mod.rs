// ABOUTME: Configuration module for catalog source and browse defaults
// ABOUTME: Reads deployment settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for explore907
//!
//! - **Environment**: deployment mode and browse defaults from environment variables

/// Environment-based configuration
pub mod environment;

pub use environment::{Environment, ExplorerConfig};
