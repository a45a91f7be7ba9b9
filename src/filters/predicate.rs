// ABOUTME: Record predicate combining facet membership and case-insensitive text search
// ABOUTME: Implements the filter pass that reduces the catalog while preserving its order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Facet predicate.
//!
//! A record passes when it satisfies every facet with a non-empty selection:
//!
//! | facet          | record field      | rule                        |
//! |----------------|-------------------|-----------------------------|
//! | search         | title, description, location, area | substring, case-insensitive |
//! | activity types | `activity_types`  | any overlap with selection  |
//! | areas          | `area`            | membership                  |
//! | difficulties   | `difficulty`      | membership                  |
//! | ratings        | `rating`          | membership (exact label)    |
//! | seasons        | `season`          | any overlap with selection  |
//! | time required  | `time_required`   | membership                  |

use std::collections::BTreeSet;

use super::FilterState;
use crate::models::ActivityRecord;

/// Compiled form of a [`FilterState`], ready to test records
///
/// Normalizes the search query once so a filter pass does not re-derive it
/// for every record.
#[derive(Debug, Clone)]
pub struct RecordPredicate<'f> {
    filters: &'f FilterState,
    needle: Option<String>,
}

impl<'f> RecordPredicate<'f> {
    /// Compile a filter state
    #[must_use]
    pub fn new(filters: &'f FilterState) -> Self {
        Self {
            filters,
            needle: filters.search_term(),
        }
    }

    /// Whether the record passes every active constraint
    #[must_use]
    pub fn test(&self, record: &ActivityRecord) -> bool {
        let filters = self.filters;
        self.matches_search(record)
            && overlaps(filters.activity_types(), &record.activity_types)
            && admits(filters.areas(), &record.area)
            && admits(filters.difficulties(), &record.difficulty)
            && admits(filters.ratings(), &record.rating)
            && overlaps(filters.seasons(), &record.season)
            && admits(filters.time_required(), &record.time_required)
    }

    fn matches_search(&self, record: &ActivityRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        [
            record.title.as_str(),
            record.description.as_str(),
            record.location.as_str(),
            record.area.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Single-valued facet: empty selection admits everything
fn admits<T: Ord>(selected: &BTreeSet<T>, value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Multi-valued facet: empty selection admits everything, otherwise any overlap
fn overlaps<T: Ord>(selected: &BTreeSet<T>, values: &[T]) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}

/// Positions of the records passing `filters`, ascending
#[must_use]
pub fn filter_positions(records: &[ActivityRecord], filters: &FilterState) -> Vec<usize> {
    let predicate = RecordPredicate::new(filters);
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate.test(record))
        .map(|(position, _)| position)
        .collect()
}

/// Keep the records passing `filters`, in their original relative order
#[must_use]
pub fn filter_records<'a>(
    records: &'a [ActivityRecord],
    filters: &FilterState,
) -> Vec<&'a ActivityRecord> {
    filter_positions(records, filters)
        .into_iter()
        .filter_map(|position| records.get(position))
        .collect()
}
