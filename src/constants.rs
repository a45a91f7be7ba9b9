// ABOUTME: Catalog constants re-exported from the core crate plus display defaults
// ABOUTME: Keeps magic strings for labels, env vars, and rendering in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use explore907_core::constants::{env_config, ratings, service_names};

/// Plain-text rendering constants
pub mod display {
    /// Description length shown in list view before truncation
    pub const LIST_DESCRIPTION_CHARS: usize = 160;
    /// Activity types shown on a card before the rest are elided
    pub const CARD_ACTIVITY_TYPES: usize = 3;
    /// Message shown when the filters match nothing
    pub const EMPTY_RESULTS: &str =
        "No activities found. Try adjusting your filters or search terms to find more activities.";
}
