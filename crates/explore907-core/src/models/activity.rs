// ABOUTME: Immutable activity record describing one catalog entry
// ABOUTME: Holds filterable facets plus display-only extras, with load-time validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{ActivityType, Area, Difficulty, Rating, Season, TimeRequired};
use crate::errors::{AppError, AppResult};

/// Geographic position of an activity's trailhead or starting point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

/// One entry of the activity catalog
///
/// Records are created once when the catalog loads and are never mutated.
/// Only `title`, `description`, `location`, `area` and the enumerated facets
/// take part in filtering and sorting; the optional fields are display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Named place (trail, lake, town)
    pub location: String,
    /// Region the activity belongs to
    pub area: Area,
    /// Kinds of outing offered, never empty
    #[serde(rename = "activities")]
    pub activity_types: Vec<ActivityType>,
    /// Physical difficulty
    pub difficulty: Difficulty,
    /// Editorial rating
    pub rating: Rating,
    /// Seasons in which the activity is available, never empty
    pub season: Vec<Season>,
    /// Time budget
    pub time_required: TimeRequired,

    /// Route length, free text ("8 miles round trip")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    /// Elevation gain, free text ("3,000 ft")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<String>,
    /// Hero image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Trailhead position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Local advice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    /// Link to a map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    /// Link to the `AllTrails` listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_trails_link: Option<String>,
}

impl ActivityRecord {
    /// Check the invariants the data model promises
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` if `id` or `title` is blank, or if the
    /// record lists no activity types or no seasons.
    pub fn validate(&self) -> AppResult<()> {
        let resource = if self.id.trim().is_empty() {
            self.title.clone()
        } else {
            self.id.clone()
        };

        let missing = [
            ("id", self.id.trim().is_empty()),
            ("title", self.title.trim().is_empty()),
            ("activities", self.activity_types.is_empty()),
            ("season", self.season.is_empty()),
        ]
        .into_iter()
        .find_map(|(field, is_missing)| is_missing.then_some(field));

        if let Some(field) = missing {
            return Err(AppError::missing_field(field).with_resource_id(resource));
        }
        Ok(())
    }

    /// Whether the record offers the given kind of outing
    #[must_use]
    pub fn offers(&self, activity_type: ActivityType) -> bool {
        self.activity_types.contains(&activity_type)
    }

    /// Whether the record is available in the given season
    #[must_use]
    pub fn available_in(&self, season: Season) -> bool {
        self.season.contains(&season)
    }
}
