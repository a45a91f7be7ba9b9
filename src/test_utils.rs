// ABOUTME: Test utilities for building ActivityRecord fixtures in a consistent way
// ABOUTME: Centralizes record construction so unit tests only spell out the fields they exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{ActivityRecord, ActivityType, Area, Difficulty, Rating, Season, TimeRequired};

/// Builder for records whose unspecified fields hold neutral defaults
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: ActivityRecord,
}

impl RecordBuilder {
    /// Start a record with the given id
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            record: ActivityRecord {
                id: id.to_owned(),
                title: format!("Untitled {id}"),
                description: "A day outdoors".to_owned(),
                location: "Trailhead".to_owned(),
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
            },
        }
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        title.clone_into(&mut self.record.title);
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.record.description);
        self
    }

    /// Set the location
    #[must_use]
    pub fn location(mut self, location: &str) -> Self {
        location.clone_into(&mut self.record.location);
        self
    }

    /// Set the area
    #[must_use]
    pub fn area(mut self, area: Area) -> Self {
        self.record.area = area;
        self
    }

    /// Set the activity types
    #[must_use]
    pub fn activities(mut self, types: &[ActivityType]) -> Self {
        self.record.activity_types = types.to_vec();
        self
    }

    /// Set the difficulty
    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.record.difficulty = difficulty;
        self
    }

    /// Set the rating
    #[must_use]
    pub fn rating(mut self, rating: Rating) -> Self {
        self.record.rating = rating;
        self
    }

    /// Set the seasons
    #[must_use]
    pub fn seasons(mut self, seasons: &[Season]) -> Self {
        self.record.season = seasons.to_vec();
        self
    }

    /// Set the time required
    #[must_use]
    pub fn time(mut self, time_required: TimeRequired) -> Self {
        self.record.time_required = time_required;
        self
    }

    /// Finish the record
    #[must_use]
    pub fn build(self) -> ActivityRecord {
        self.record
    }
}

/// Record with only id and title set
#[must_use]
pub fn record(id: &str, title: &str) -> ActivityRecord {
    RecordBuilder::new(id).title(title).build()
}

/// Record with id, title, and area set
#[must_use]
pub fn record_in(id: &str, title: &str, area: Area) -> ActivityRecord {
    RecordBuilder::new(id).title(title).area(area).build()
}
