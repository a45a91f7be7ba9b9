// ABOUTME: Display projections of catalog records, result pages, and facet counts
// ABOUTME: Serializable views plus a plain-text renderer for terminal output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presentation Projection
//!
//! Maps pipeline output to display items. Every view borrows from the catalog
//! and serializes with camelCase keys so JSON output mirrors the dataset file.
//! [`PlainText`] renders the same views for a terminal.

use serde::Serialize;

use crate::browse::{BrowseResults, ViewMode};
use crate::catalog::Catalog;
use crate::constants::display;
use crate::filters::{Facet, FilterSelection};
use crate::models::{ActivityRecord, ActivityType, Area, Difficulty, Rating, Season, TimeRequired};
use crate::sorting::SortState;

/// Human-readable rendering of a view
pub trait PlainText {
    /// Render as plain text, without a trailing newline
    fn render_text(&self) -> String;
}

/// Card summary of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCard<'a> {
    /// Record identifier
    pub id: &'a str,
    /// Display title
    pub title: &'a str,
    /// Named place
    pub location: &'a str,
    /// Region
    pub area: Area,
    /// Description, shown in list view
    pub description: &'a str,
    /// Kinds of outing
    pub activity_types: &'a [ActivityType],
    /// Physical difficulty
    pub difficulty: Difficulty,
    /// Editorial rating
    pub rating: &'a Rating,
    /// Seasons available
    pub seasons: &'a [Season],
    /// Time budget
    pub time_required: TimeRequired,
    /// Route length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<&'a str>,
    /// Elevation gain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<&'a str>,
}

impl<'a> From<&'a ActivityRecord> for ActivityCard<'a> {
    fn from(record: &'a ActivityRecord) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            location: &record.location,
            area: record.area,
            description: &record.description,
            activity_types: &record.activity_types,
            difficulty: record.difficulty,
            rating: &record.rating,
            seasons: &record.season,
            time_required: record.time_required,
            distance: record.distance.as_deref(),
            elevation_gain: record.elevation_gain.as_deref(),
        }
    }
}

impl ActivityCard<'_> {
    /// Activity types as shown on a card: the first few, then "+N"
    #[must_use]
    pub fn activity_badge(&self) -> String {
        let shown: Vec<&str> = self
            .activity_types
            .iter()
            .take(display::CARD_ACTIVITY_TYPES)
            .map(ActivityType::as_str)
            .collect();
        let hidden = self
            .activity_types
            .len()
            .saturating_sub(display::CARD_ACTIVITY_TYPES);
        if hidden == 0 {
            shown.join(", ")
        } else {
            format!("{} +{hidden}", shown.join(", "))
        }
    }

    fn grid_line(&self) -> String {
        format!(
            "{} | {} ({}) | {} | {} | {} | {}",
            self.title,
            self.location,
            self.area,
            self.difficulty,
            self.rating,
            self.time_required,
            self.activity_badge()
        )
    }

    fn list_block(&self) -> String {
        let mut lines = vec![
            format!("{}  [{}]", self.title, self.id),
            format!("  {} - {}", self.location, self.area),
            format!(
                "  {} | {} | {} | {}",
                self.difficulty,
                self.rating,
                self.time_required,
                join_labels(self.seasons.iter().map(Season::as_str))
            ),
            format!(
                "  Activities: {}",
                join_labels(self.activity_types.iter().map(ActivityType::as_str))
            ),
        ];
        if let Some(distance) = self.distance {
            lines.push(format!("  Distance: {distance}"));
        }
        if let Some(gain) = self.elevation_gain {
            lines.push(format!("  Elevation gain: {gain}"));
        }
        lines.push(format!(
            "  {}",
            truncate(self.description, display::LIST_DESCRIPTION_CHARS)
        ));
        lines.join("\n")
    }
}

/// One rendered page of browse results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPage<'a> {
    /// Number of matching records
    pub result_count: usize,
    /// Number of records in the catalog
    pub catalog_size: usize,
    /// Badge count of active filters
    pub active_filter_count: usize,
    /// Filters in their persisted form
    pub filters: FilterSelection,
    /// Sort that produced the ordering
    pub sort: SortState,
    /// Layout for text rendering
    pub view_mode: ViewMode,
    /// Cards in display order
    pub items: Vec<ActivityCard<'a>>,
}

impl<'a> From<&BrowseResults<'a>> for ResultsPage<'a> {
    fn from(results: &BrowseResults<'a>) -> Self {
        Self {
            result_count: results.result_count,
            catalog_size: results.catalog_size,
            active_filter_count: results.active_filter_count,
            filters: FilterSelection::from(results.filters),
            sort: results.sort,
            view_mode: results.view_mode,
            items: results.items.iter().copied().map(Into::into).collect(),
        }
    }
}

impl PlainText for ResultsPage<'_> {
    fn render_text(&self) -> String {
        let filters_note = if self.active_filter_count > 0 {
            format!(" (active filters: {})", self.active_filter_count)
        } else {
            String::new()
        };
        let mut out = format!(
            "{} activities found{filters_note}, sorted by {}",
            self.result_count, self.sort
        );

        if self.items.is_empty() {
            out.push_str("\n\n");
            out.push_str(display::EMPTY_RESULTS);
            return out;
        }

        match self.view_mode {
            ViewMode::Grid => {
                out.push('\n');
                for card in &self.items {
                    out.push('\n');
                    out.push_str(&card.grid_line());
                }
            }
            ViewMode::List => {
                for card in &self.items {
                    out.push_str("\n\n");
                    out.push_str(&card.list_block());
                }
            }
        }
        out
    }
}

/// Full view of one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActivityDetail<'a> {
    /// Record being shown
    pub record: &'a ActivityRecord,
}

impl<'a> From<&'a ActivityRecord> for ActivityDetail<'a> {
    fn from(record: &'a ActivityRecord) -> Self {
        Self { record }
    }
}

impl PlainText for ActivityDetail<'_> {
    fn render_text(&self) -> String {
        let r = self.record;
        let mut lines = vec![
            r.title.clone(),
            "=".repeat(r.title.chars().count()),
            format!("Location:      {} ({})", r.location, r.area),
            format!(
                "Activities:    {}",
                join_labels(r.activity_types.iter().map(ActivityType::as_str))
            ),
            format!("Difficulty:    {}", r.difficulty),
            format!("Rating:        {}", r.rating),
            format!(
                "Season:        {}",
                join_labels(r.season.iter().map(Season::as_str))
            ),
            format!("Time required: {}", r.time_required),
        ];
        if let Some(distance) = &r.distance {
            lines.push(format!("Distance:      {distance}"));
        }
        if let Some(gain) = &r.elevation_gain {
            lines.push(format!("Elevation:     {gain}"));
        }
        if let Some(coords) = r.coordinates {
            lines.push(format!(
                "Coordinates:   {:.4}, {:.4}",
                coords.lat, coords.lng
            ));
        }
        lines.push(String::new());
        lines.push(r.description.clone());
        if let Some(tips) = &r.tips {
            lines.push(String::new());
            lines.push(format!("Tips: {tips}"));
        }
        for (label, link) in [("Map", &r.map_link), ("AllTrails", &r.all_trails_link)] {
            if let Some(url) = link {
                lines.push(format!("{label}: {url}"));
            }
        }
        lines.join("\n")
    }
}

/// Number of catalog records carrying one facet value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    /// Facet value label
    pub value: String,
    /// Records carrying it
    pub count: usize,
}

/// Legal values of one facet with their record counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    /// Facet being described
    pub facet: Facet,
    /// Heading shown in a filter panel
    pub title: &'static str,
    /// Every legal value in declaration order
    pub values: Vec<ValueCount>,
}

/// Every facet of a catalog with value counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetSummary {
    /// Records in the catalog
    pub catalog_size: usize,
    /// One entry per facet
    pub facets: Vec<FacetCounts>,
}

impl FacetSummary {
    /// Count how many records carry each legal facet value
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let facets = Facet::ALL
            .iter()
            .map(|&facet| FacetCounts {
                facet,
                title: facet.title(),
                values: facet
                    .options()
                    .into_iter()
                    .map(|value| ValueCount {
                        count: catalog
                            .records()
                            .iter()
                            .filter(|record| value.is_carried_by(record))
                            .count(),
                        value: value.label().to_owned(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            catalog_size: catalog.len(),
            facets,
        }
    }
}

impl PlainText for FacetSummary {
    fn render_text(&self) -> String {
        let mut lines = vec![format!("{} activities in catalog", self.catalog_size)];
        for facet in &self.facets {
            lines.push(String::new());
            lines.push(facet.title.to_owned());
            for value in &facet.values {
                lines.push(format!("  {:<20} {:>3}", value.value, value.count));
            }
        }
        lines.join("\n")
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "..."
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_owned(),
        Some((byte_idx, _)) => format!("{}...", text[..byte_idx].trim_end()),
    }
}
