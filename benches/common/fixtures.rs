// ABOUTME: Benchmark fixtures generating synthetic activity catalogs
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures generating synthetic activity catalogs.
//!
//! Every facet value cycles with a different period so filters select a
//! realistic fraction of the catalog.

use explore907::catalog::Catalog;
use explore907::filters::FilterState;
use explore907::models::{
    ActivityRecord, ActivityType, Area, Difficulty, Rating, Season, TimeRequired,
};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Bundled-catalog scale (50 records)
    Small,
    /// Large regional guide (500 records)
    Medium,
    /// Stress case (5,000 records)
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "50",
            Self::Medium => "500",
            Self::Large => "5000",
        }
    }
}

const TITLE_WORDS: [&str; 8] = [
    "Glacier", "Ridge", "Lake", "Creek", "Pass", "Bay", "Falls", "Summit",
];

fn pick<T: Copy>(options: &[T], index: usize) -> T {
    options[index % options.len()]
}

fn generate_record(index: usize) -> ActivityRecord {
    let word = pick(&TITLE_WORDS, index * 7);
    let second = pick(ActivityType::ALL, index + 3);
    let activity_types = if index % 3 == 0 {
        vec![pick(ActivityType::ALL, index), second]
    } else {
        vec![pick(ActivityType::ALL, index)]
    };
    let season = if index % 4 == 0 {
        vec![Season::Summer, Season::Winter]
    } else {
        vec![pick(Season::ALL, index)]
    };

    ActivityRecord {
        id: format!("bench-{index:05}"),
        title: format!("{word} Loop {index}"),
        description: format!("Synthetic outing number {index} near the {word}"),
        location: format!("{word} Trailhead"),
        area: pick(Area::ALL, index * 5),
        activity_types,
        difficulty: pick(Difficulty::ALL, index),
        rating: Rating::KNOWN[index % Rating::KNOWN.len()].clone(),
        season,
        time_required: pick(TimeRequired::ALL, index / 2),
        distance: Some(format!("{} miles", index % 20 + 1)),
        elevation_gain: None,
        image_url: None,
        coordinates: None,
        tips: None,
        map_link: None,
        all_trails_link: None,
    }
}

/// Generate a catalog of the given size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Catalog {
    let records = (0..size.count()).map(generate_record).collect();
    Catalog::new(records).unwrap_or_default()
}

/// A filter state touching three facets and the search box
#[must_use]
pub fn typical_filters() -> FilterState {
    FilterState::new()
        .with(Area::Kenai)
        .with(Area::MatSu)
        .with(Difficulty::Medium)
        .with(Season::Summer)
        .with_search("lake")
}
