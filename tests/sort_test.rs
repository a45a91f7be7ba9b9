// ABOUTME: Integration tests for the comparator sort
// ABOUTME: Covers key derivation, direction, stability on ties, and the sort-control toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{ids, in_area, record, with_difficulty, with_rating};
use explore907::models::{ActivityRecord, Area, Difficulty, Rating};
use explore907::sorting::{sort_records, SortDirection, SortKey, SortState};

const DIRECTIONS: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

#[test]
fn test_sort_is_stable_for_every_key_and_direction() {
    // All four records tie on every key
    let records: Vec<ActivityRecord> = ["w", "x", "y", "z"]
        .iter()
        .map(|id| ActivityRecord {
            title: "Same".to_owned(),
            ..record(id)
        })
        .collect();

    for key in SortKey::ALL {
        for direction in DIRECTIONS {
            let sorted = sort_records(records.iter().collect(), SortState::new(*key, direction));
            assert_eq!(ids(&sorted), vec!["w", "x", "y", "z"], "{key}:{direction}");
        }
    }
}

#[test]
fn test_descending_keeps_ties_in_original_order() {
    let records = vec![
        with_difficulty("e1", Difficulty::Easy),
        with_difficulty("t1", Difficulty::Tough),
        with_difficulty("e2", Difficulty::Easy),
        with_difficulty("t2", Difficulty::Tough),
    ];
    let sort = SortState::new(SortKey::Difficulty, SortDirection::Descending);
    let sorted = sort_records(records.iter().collect(), sort);
    assert_eq!(ids(&sorted), vec!["t1", "t2", "e1", "e2"]);
}

#[test]
fn test_rating_ascending_groups_by_rank() {
    let records = vec![
        with_rating("side", Rating::SideTrips),
        with_rating("worth", Rating::WorthDoing),
        with_rating("unknown", Rating::from_label("Hidden Gem")),
        with_rating("top", Rating::Top20),
        with_rating("main", Rating::MainEvent),
        with_rating("top-2", Rating::Top20),
    ];
    let sort = SortState::new(SortKey::Rating, SortDirection::Ascending);
    let sorted = sort_records(records.iter().collect(), sort);
    assert_eq!(
        ids(&sorted),
        vec!["top", "top-2", "main", "worth", "side", "unknown"]
    );
}

#[test]
fn test_rating_rank_uses_substring_containment() {
    let records = vec![
        with_rating("plain", Rating::SideTrips),
        with_rating("variant", Rating::from_label("Worth Doing (seasonal)")),
    ];
    let sort = SortState::new(SortKey::Rating, SortDirection::Ascending);
    let sorted = sort_records(records.iter().collect(), sort);
    assert_eq!(ids(&sorted), vec!["variant", "plain"]);
}

#[test]
fn test_area_sort_is_lowercased_lexical() {
    let records = vec![
        in_area("valdez", Area::Valdez),
        in_area("anchorage", Area::Anchorage),
        in_area("matsu", Area::MatSu),
        in_area("fairbanks", Area::FairbanksDenali),
    ];
    let sort = SortState::new(SortKey::Area, SortDirection::Ascending);
    let sorted = sort_records(records.iter().collect(), sort);
    assert_eq!(
        ids(&sorted),
        vec!["anchorage", "fairbanks", "matsu", "valdez"]
    );
}

#[test]
fn test_sort_does_not_touch_input() {
    let records = vec![record("b"), record("a")];
    let before = records.clone();
    let _ = sort_records(records.iter().collect(), SortState::default());
    assert_eq!(records, before);
}

#[test]
fn test_select_toggles_or_resets() {
    let start = SortState::default();
    let flipped = start.select(SortKey::Title);
    assert_eq!(flipped.direction, SortDirection::Descending);

    let switched = flipped.select(SortKey::Rating);
    assert_eq!(
        switched,
        SortState::new(SortKey::Rating, SortDirection::Ascending)
    );

    let twice = switched.select(SortKey::Rating).select(SortKey::Rating);
    assert_eq!(twice, switched);
}

#[test]
fn test_sort_state_parsing() {
    assert_eq!(
        SortState::parse("rating:desc"),
        Some(SortState::new(SortKey::Rating, SortDirection::Descending))
    );
    assert_eq!(
        SortState::parse("area"),
        Some(SortState::new(SortKey::Area, SortDirection::Ascending))
    );
    assert_eq!(SortState::parse("distance"), None);
    assert_eq!(SortState::parse("title:sideways"), None);
}
