// ABOUTME: Core data models for the activity catalog
// ABOUTME: Re-exports ActivityRecord and the facet enumerations it is built from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Immutable activity record and its display-only extras
pub mod activity;
/// Rating labels with their derived ordinal rank
pub mod rating;
/// Closed facet enumerations (activity type, area, difficulty, season, time)
pub mod taxonomy;

pub use activity::{ActivityRecord, Coordinates};
pub use rating::Rating;
pub use taxonomy::{ActivityType, Area, Difficulty, Season, TimeRequired};
