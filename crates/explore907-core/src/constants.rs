// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rating labels, sort ranks, and environment variable names for the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Rating labels and the markers used to derive their ordinal rank
pub mod ratings {
    /// Label of the highest rating tier
    pub const TOP_20: &str = "1: Top 20";
    /// Label of the second rating tier
    pub const MAIN_EVENT: &str = "2: Main Event";
    /// Label of the third rating tier
    pub const WORTH_DOING: &str = "3: Worth Doing";
    /// Label of the lowest rating tier
    pub const SIDE_TRIPS: &str = "4: Side Trips";

    /// Substring marking a rank-1 rating
    pub const TOP_20_MARKER: &str = "Top 20";
    /// Substring marking a rank-2 rating
    pub const MAIN_EVENT_MARKER: &str = "Main Event";
    /// Substring marking a rank-3 rating
    pub const WORTH_DOING_MARKER: &str = "Worth Doing";

    /// Rank assigned to any rating without a recognized marker
    pub const FALLBACK_RANK: u8 = 4;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Path to a catalog file that replaces the bundled dataset
    pub const CATALOG_PATH: &str = "EXPLORE907_CATALOG_PATH";
    /// Default sort as `key` or `key:direction`
    pub const DEFAULT_SORT: &str = "EXPLORE907_DEFAULT_SORT";
    /// Default result view (`grid` or `list`)
    pub const VIEW_MODE: &str = "EXPLORE907_VIEW_MODE";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the CLI and library logs
    pub const EXPLORE907: &str = "explore907";
}
