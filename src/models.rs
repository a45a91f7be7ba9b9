// ABOUTME: Re-export of the catalog data models from the core crate
// ABOUTME: ActivityRecord plus the closed facet enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use explore907_core::models::{
    ActivityRecord, ActivityType, Area, Coordinates, Difficulty, Rating, Season, TimeRequired,
};
