// ABOUTME: Shared fixtures for explore907 integration tests
// ABOUTME: Builds activity records and small catalogs with only the fields a test cares about
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `explore907`

use std::sync::Once;

use explore907::catalog::Catalog;
use explore907::models::{
    ActivityRecord, ActivityType, Area, Difficulty, Rating, Season, TimeRequired,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Record with neutral defaults; override fields with struct update syntax
pub fn record(id: &str) -> ActivityRecord {
    ActivityRecord {
        id: id.to_owned(),
        title: format!("Activity {id}"),
        description: "An outing".to_owned(),
        location: "Somewhere".to_owned(),
        area: Area::Anchorage,
        activity_types: vec![ActivityType::Hike],
        difficulty: Difficulty::Medium,
        rating: Rating::WorthDoing,
        season: vec![Season::Summer],
        time_required: TimeRequired::FewHours,
        distance: None,
        elevation_gain: None,
        image_url: None,
        coordinates: None,
        tips: None,
        map_link: None,
        all_trails_link: None,
    }
}

/// Record in the given area
pub fn in_area(id: &str, area: Area) -> ActivityRecord {
    ActivityRecord {
        area,
        ..record(id)
    }
}

/// Record with the given difficulty
pub fn with_difficulty(id: &str, difficulty: Difficulty) -> ActivityRecord {
    ActivityRecord {
        difficulty,
        ..record(id)
    }
}

/// Record with the given rating
pub fn with_rating(id: &str, rating: Rating) -> ActivityRecord {
    ActivityRecord {
        rating,
        ..record(id)
    }
}

/// Five records with areas Kenai, Kenai, Valdez, Anchorage, Kenai
pub fn five_area_catalog() -> Catalog {
    Catalog::new(vec![
        in_area("k1", Area::Kenai),
        in_area("k2", Area::Kenai),
        in_area("v1", Area::Valdez),
        in_area("a1", Area::Anchorage),
        in_area("k3", Area::Kenai),
    ])
    .unwrap()
}

/// Ids of records in order
pub fn ids<'a>(records: &[&'a ActivityRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
