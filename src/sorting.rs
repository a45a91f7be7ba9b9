// ABOUTME: Sort keys, directions, and the stable comparator sort over filtered records
// ABOUTME: Derives title/area text keys and difficulty/rating ordinal ranks per record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Comparator Sort
//!
//! Orders records by one derived key:
//!
//! - `title`, `area`: lower-cased label, compared byte-wise
//! - `difficulty`: Easy=1, Medium=2, Tough=3
//! - `rating`: [`Rating::sort_rank`](crate::models::Rating::sort_rank)
//!
//! The sort is stable. Descending order flips the comparison result rather
//! than reversing the output, so records with equal keys keep their input
//! order in both directions.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ActivityRecord;

/// Field a result list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Title, case-insensitive
    #[default]
    Title,
    /// Rating tier
    Rating,
    /// Difficulty rank
    Difficulty,
    /// Area label, case-insensitive
    Area,
}

impl SortKey {
    /// Every key in the order the sort controls list them
    pub const ALL: &'static [Self] = &[Self::Title, Self::Rating, Self::Difficulty, Self::Area];

    /// Parse a key name (case-insensitive); "name" is accepted for `Title`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" | "name" => Some(Self::Title),
            "rating" => Some(Self::Rating),
            "difficulty" => Some(Self::Difficulty),
            "area" => Some(Self::Area),
            _ => None,
        }
    }

    /// Machine name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rating",
            Self::Difficulty => "difficulty",
            Self::Area => "area",
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "Name",
            Self::Rating => "Rating",
            Self::Difficulty => "Difficulty",
            Self::Area => "Area",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Natural key order
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Reversed key order
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Parse "asc"/"ascending" or "desc"/"descending" (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Short name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// The other direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply the direction to a natural-order comparison
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort key and direction; defaults to title ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Key records are ordered by
    pub key: SortKey,
    /// Direction of the ordering
    pub direction: SortDirection,
}

impl SortState {
    /// Create a sort state
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// State after the user picks `key` in the sort controls
    ///
    /// Picking the active key flips the direction; picking another key
    /// switches to it in ascending order.
    #[must_use]
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Parse `key` or `key:direction`, e.g. `rating:desc`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (key, direction) = match s.split_once(':') {
            Some((key, direction)) => (key, SortDirection::parse(direction)?),
            None => (s, SortDirection::Ascending),
        };
        Some(Self::new(SortKey::parse(key)?, direction))
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.direction)
    }
}

/// Sort key value derived from one record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Text(String),
    Rank(u8),
}

impl SortValue {
    fn of(record: &ActivityRecord, key: SortKey) -> Self {
        match key {
            SortKey::Title => Self::Text(record.title.to_lowercase()),
            SortKey::Area => Self::Text(record.area.as_str().to_lowercase()),
            SortKey::Difficulty => Self::Rank(record.difficulty.rank()),
            SortKey::Rating => Self::Rank(record.rating.sort_rank()),
        }
    }
}

/// Compare two records by `key` in natural (ascending) order
#[must_use]
pub fn compare_records(a: &ActivityRecord, b: &ActivityRecord, key: SortKey) -> Ordering {
    SortValue::of(a, key).cmp(&SortValue::of(b, key))
}

/// Stable sort of arbitrary items by the record each one refers to
///
/// Keys are derived once per item before sorting.
pub(crate) fn sort_by_record<'r, T, F>(items: Vec<T>, sort: SortState, record_of: F) -> Vec<T>
where
    F: Fn(&T) -> &'r ActivityRecord,
{
    let mut keyed: Vec<(SortValue, T)> = items
        .into_iter()
        .map(|item| (SortValue::of(record_of(&item), sort.key), item))
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| sort.direction.apply(a.cmp(b)));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Return the records in the order `sort` describes
#[must_use]
pub fn sort_records(records: Vec<&ActivityRecord>, sort: SortState) -> Vec<&ActivityRecord> {
    sort_by_record(records, sort, |record| *record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Difficulty, Rating};
    use crate::test_utils::{record, RecordBuilder};

    fn ids<'a>(records: &[&'a ActivityRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_title_ascending() {
        assert_eq!(
            SortState::default(),
            SortState::new(SortKey::Title, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let records = [
            record("1", "banana"),
            record("2", "Apple"),
            record("3", "cherry"),
        ];
        let sorted = sort_records(records.iter().collect(), SortState::default());
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_difficulty_sort_uses_rank() {
        let records = [
            RecordBuilder::new("tough")
                .difficulty(Difficulty::Tough)
                .build(),
            RecordBuilder::new("easy")
                .difficulty(Difficulty::Easy)
                .build(),
            RecordBuilder::new("medium")
                .difficulty(Difficulty::Medium)
                .build(),
        ];
        let sort = SortState::new(SortKey::Difficulty, SortDirection::Ascending);
        assert_eq!(
            ids(&sort_records(records.iter().collect(), sort)),
            vec!["easy", "medium", "tough"]
        );
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let records = [
            RecordBuilder::new("k1").area(Area::Kenai).build(),
            RecordBuilder::new("v1").area(Area::Valdez).build(),
            RecordBuilder::new("k2").area(Area::Kenai).build(),
            RecordBuilder::new("v2").area(Area::Valdez).build(),
        ];
        let sort = SortState::new(SortKey::Area, SortDirection::Descending);
        assert_eq!(
            ids(&sort_records(records.iter().collect(), sort)),
            vec!["v1", "v2", "k1", "k2"]
        );
    }

    #[test]
    fn test_rating_sort_places_unknown_labels_last() {
        let records = [
            RecordBuilder::new("other")
                .rating(Rating::Other("Unrated".to_owned()))
                .build(),
            RecordBuilder::new("side").rating(Rating::SideTrips).build(),
            RecordBuilder::new("top").rating(Rating::Top20).build(),
        ];
        let sort = SortState::new(SortKey::Rating, SortDirection::Ascending);
        assert_eq!(
            ids(&sort_records(records.iter().collect(), sort)),
            vec!["top", "other", "side"]
        );
    }

    #[test]
    fn test_select_toggles_or_resets_direction() {
        let state = SortState::default();
        let flipped = state.select(SortKey::Title);
        assert_eq!(flipped.direction, SortDirection::Descending);

        let switched = flipped.select(SortKey::Rating);
        assert_eq!(
            switched,
            SortState::new(SortKey::Rating, SortDirection::Ascending)
        );

        assert_eq!(
            switched.select(SortKey::Rating).select(SortKey::Rating),
            switched
        );
    }

    #[test]
    fn test_parse_sort_state() {
        assert_eq!(
            SortState::parse("rating:desc"),
            Some(SortState::new(SortKey::Rating, SortDirection::Descending))
        );
        assert_eq!(SortState::parse("Name"), Some(SortState::default()));
        assert_eq!(SortState::parse("rating:sideways"), None);
        assert_eq!(SortState::parse("popularity"), None);
        assert_eq!(
            SortState::parse("area:ASC").map(|s| s.to_string()),
            Some("area:asc".to_owned())
        );
    }
}
