// ABOUTME: Filter state for the six multi-select facets and the free-text search
// ABOUTME: Immutable value type replaced wholesale on every edit, plus the active-filter counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filters
//!
//! A [`FilterState`] holds one selection set per [`Facet`] and a search query.
//! An empty set places no constraint on its facet; within a set, values are
//! alternatives (OR), and facets combine with AND. See [`predicate`] for the
//! matching rules and [`selection`] for resolving string-typed selections.

/// Record predicate and the filter pass
pub mod predicate;
/// Resolution of persisted or user-typed selections into typed filter state
pub mod selection;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::models::{ActivityRecord, ActivityType, Area, Difficulty, Rating, Season, TimeRequired};

pub use predicate::{filter_positions, filter_records, RecordPredicate};
pub use selection::{FilterSelection, IgnoredValue, ResolvedSelection};

/// One independently filterable dimension of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    /// Kinds of outing (multi-valued per record)
    ActivityTypes,
    /// Region (single-valued)
    Areas,
    /// Difficulty (single-valued)
    Difficulties,
    /// Rating (single-valued)
    Ratings,
    /// Seasons (multi-valued per record)
    Seasons,
    /// Time budget (single-valued)
    TimeRequired,
}

impl Facet {
    /// Every facet in panel order
    pub const ALL: &'static [Self] = &[
        Self::ActivityTypes,
        Self::Areas,
        Self::Difficulties,
        Self::Ratings,
        Self::Seasons,
        Self::TimeRequired,
    ];

    /// Heading shown above the facet's options
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ActivityTypes => "Activities",
            Self::Areas => "Areas",
            Self::Difficulties => "Difficulty",
            Self::Ratings => "Rating",
            Self::Seasons => "Season",
            Self::TimeRequired => "Time Required",
        }
    }

    /// Every legal value of this facet in declaration order
    #[must_use]
    pub fn options(&self) -> Vec<FacetValue> {
        match self {
            Self::ActivityTypes => values_of(ActivityType::ALL),
            Self::Areas => values_of(Area::ALL),
            Self::Difficulties => values_of(Difficulty::ALL),
            Self::Ratings => values_of(Rating::KNOWN),
            Self::Seasons => values_of(Season::ALL),
            Self::TimeRequired => values_of(TimeRequired::ALL),
        }
    }
}

fn values_of<T: Clone>(members: &[T]) -> Vec<FacetValue>
where
    FacetValue: From<T>,
{
    members.iter().cloned().map(FacetValue::from).collect()
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A typed value of one facet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FacetValue {
    /// Activity type selection
    ActivityType(ActivityType),
    /// Area selection
    Area(Area),
    /// Difficulty selection
    Difficulty(Difficulty),
    /// Rating selection
    Rating(Rating),
    /// Season selection
    Season(Season),
    /// Time required selection
    TimeRequired(TimeRequired),
}

impl FacetValue {
    /// Facet this value belongs to
    #[must_use]
    pub const fn facet(&self) -> Facet {
        match self {
            Self::ActivityType(_) => Facet::ActivityTypes,
            Self::Area(_) => Facet::Areas,
            Self::Difficulty(_) => Facet::Difficulties,
            Self::Rating(_) => Facet::Ratings,
            Self::Season(_) => Facet::Seasons,
            Self::TimeRequired(_) => Facet::TimeRequired,
        }
    }

    /// Resolve a raw string against a facet's enumeration
    ///
    /// Ratings resolve only to the four known tiers.
    #[must_use]
    pub fn parse(facet: Facet, raw: &str) -> Option<Self> {
        match facet {
            Facet::ActivityTypes => ActivityType::parse(raw).map(Self::ActivityType),
            Facet::Areas => Area::parse(raw).map(Self::Area),
            Facet::Difficulties => Difficulty::parse(raw).map(Self::Difficulty),
            Facet::Ratings => Rating::parse_known(raw).map(Self::Rating),
            Facet::Seasons => Season::parse(raw).map(Self::Season),
            Facet::TimeRequired => TimeRequired::parse(raw).map(Self::TimeRequired),
        }
    }

    /// Dataset label of the value
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::ActivityType(v) => v.as_str(),
            Self::Area(v) => v.as_str(),
            Self::Difficulty(v) => v.as_str(),
            Self::Rating(v) => v.as_str(),
            Self::Season(v) => v.as_str(),
            Self::TimeRequired(v) => v.as_str(),
        }
    }

    /// Whether a record carries this value
    #[must_use]
    pub fn is_carried_by(&self, record: &ActivityRecord) -> bool {
        match self {
            Self::ActivityType(v) => record.offers(*v),
            Self::Area(v) => record.area == *v,
            Self::Difficulty(v) => record.difficulty == *v,
            Self::Rating(v) => record.rating == *v,
            Self::Season(v) => record.available_in(*v),
            Self::TimeRequired(v) => record.time_required == *v,
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<ActivityType> for FacetValue {
    fn from(value: ActivityType) -> Self {
        Self::ActivityType(value)
    }
}

impl From<Area> for FacetValue {
    fn from(value: Area) -> Self {
        Self::Area(value)
    }
}

impl From<Difficulty> for FacetValue {
    fn from(value: Difficulty) -> Self {
        Self::Difficulty(value)
    }
}

impl From<Rating> for FacetValue {
    fn from(value: Rating) -> Self {
        Self::Rating(value)
    }
}

impl From<Season> for FacetValue {
    fn from(value: Season) -> Self {
        Self::Season(value)
    }
}

impl From<TimeRequired> for FacetValue {
    fn from(value: TimeRequired) -> Self {
        Self::TimeRequired(value)
    }
}

/// Current facet selections and search query
///
/// Edits never mutate a state in place: [`FilterState::toggled`],
/// [`FilterState::with`] and [`FilterState::with_search`] return a new value
/// that the owner swaps in. The default state has every set empty and an
/// empty query, which matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    activity_types: BTreeSet<ActivityType>,
    areas: BTreeSet<Area>,
    difficulties: BTreeSet<Difficulty>,
    ratings: BTreeSet<Rating>,
    seasons: BTreeSet<Season>,
    time_required: BTreeSet<TimeRequired>,
    search_query: String,
}

impl FilterState {
    /// State that constrains nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `value` selected
    #[must_use]
    pub fn with(self, value: impl Into<FacetValue>) -> Self {
        self.toggled(value.into(), true)
    }

    /// Return a copy with the search query replaced
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Return a copy with `value` added (`selected`) or removed
    ///
    /// Adding a value already present or removing one that is absent yields
    /// an equal state.
    #[must_use]
    pub fn toggled(&self, value: FacetValue, selected: bool) -> Self {
        fn apply<T: Ord>(set: &mut BTreeSet<T>, value: T, selected: bool) {
            if selected {
                set.insert(value);
            } else {
                set.remove(&value);
            }
        }

        let mut next = self.clone();
        match value {
            FacetValue::ActivityType(v) => apply(&mut next.activity_types, v, selected),
            FacetValue::Area(v) => apply(&mut next.areas, v, selected),
            FacetValue::Difficulty(v) => apply(&mut next.difficulties, v, selected),
            FacetValue::Rating(v) => apply(&mut next.ratings, v, selected),
            FacetValue::Season(v) => apply(&mut next.seasons, v, selected),
            FacetValue::TimeRequired(v) => apply(&mut next.time_required, v, selected),
        }
        next
    }

    /// Selected activity types
    #[must_use]
    pub const fn activity_types(&self) -> &BTreeSet<ActivityType> {
        &self.activity_types
    }

    /// Selected areas
    #[must_use]
    pub const fn areas(&self) -> &BTreeSet<Area> {
        &self.areas
    }

    /// Selected difficulties
    #[must_use]
    pub const fn difficulties(&self) -> &BTreeSet<Difficulty> {
        &self.difficulties
    }

    /// Selected ratings
    #[must_use]
    pub const fn ratings(&self) -> &BTreeSet<Rating> {
        &self.ratings
    }

    /// Selected seasons
    #[must_use]
    pub const fn seasons(&self) -> &BTreeSet<Season> {
        &self.seasons
    }

    /// Selected time budgets
    #[must_use]
    pub const fn time_required(&self) -> &BTreeSet<TimeRequired> {
        &self.time_required
    }

    /// Search query exactly as entered
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Normalized search needle: trimmed and lower-cased, `None` when blank
    ///
    /// Both the predicate and the active-filter counter go through this, so a
    /// whitespace-only query neither filters nor counts.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// Whether `value` is currently selected
    #[must_use]
    pub fn contains(&self, value: &FacetValue) -> bool {
        match value {
            FacetValue::ActivityType(v) => self.activity_types.contains(v),
            FacetValue::Area(v) => self.areas.contains(v),
            FacetValue::Difficulty(v) => self.difficulties.contains(v),
            FacetValue::Rating(v) => self.ratings.contains(v),
            FacetValue::Season(v) => self.seasons.contains(v),
            FacetValue::TimeRequired(v) => self.time_required.contains(v),
        }
    }

    /// Number of values selected in one facet
    #[must_use]
    pub fn selected_count(&self, facet: Facet) -> usize {
        match facet {
            Facet::ActivityTypes => self.activity_types.len(),
            Facet::Areas => self.areas.len(),
            Facet::Difficulties => self.difficulties.len(),
            Facet::Ratings => self.ratings.len(),
            Facet::Seasons => self.seasons.len(),
            Facet::TimeRequired => self.time_required.len(),
        }
    }

    /// Labels of the values selected in one facet, in enumeration order
    #[must_use]
    pub fn selected_labels(&self, facet: Facet) -> Vec<String> {
        fn labels_of<T: ToString>(set: &BTreeSet<T>) -> Vec<String> {
            set.iter().map(ToString::to_string).collect()
        }

        match facet {
            Facet::ActivityTypes => labels_of(&self.activity_types),
            Facet::Areas => labels_of(&self.areas),
            Facet::Difficulties => labels_of(&self.difficulties),
            Facet::Ratings => labels_of(&self.ratings),
            Facet::Seasons => labels_of(&self.seasons),
            Facet::TimeRequired => labels_of(&self.time_required),
        }
    }

    /// Badge count: every selected facet value, plus one for a search query
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        let selected: usize = Facet::ALL
            .iter()
            .map(|facet| self.selected_count(*facet))
            .sum();
        selected + usize::from(self.search_term().is_some())
    }

    /// Whether the state constrains nothing (a "clear all" would be a no-op)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }
}
