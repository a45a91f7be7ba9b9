// ABOUTME: Rating labels whose leading digit encodes an ordinal rank
// ABOUTME: Known tiers plus an open variant for labels the catalog has not standardized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ratings;

/// Editorial rating of an activity
///
/// Datasets are expected to use the four known labels. A label outside that
/// set is preserved verbatim in `Other` so it can still be displayed, matched
/// exactly by a filter, and ranked by [`Rating::sort_rank`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rating {
    /// "1: Top 20"
    Top20,
    /// "2: Main Event"
    MainEvent,
    /// "3: Worth Doing"
    WorthDoing,
    /// "4: Side Trips"
    SideTrips,
    /// Label not covered by the known tiers
    Other(String),
}

impl Rating {
    /// The four known tiers, best first
    pub const KNOWN: &'static [Self] = &[
        Self::Top20,
        Self::MainEvent,
        Self::WorthDoing,
        Self::SideTrips,
    ];

    /// Exact dataset label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Top20 => ratings::TOP_20,
            Self::MainEvent => ratings::MAIN_EVENT,
            Self::WorthDoing => ratings::WORTH_DOING,
            Self::SideTrips => ratings::SIDE_TRIPS,
            Self::Other(label) => label,
        }
    }

    /// Classify a dataset label; anything but an exact known label becomes `Other`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::from(label.to_owned())
    }

    /// Resolve a label to one of the known tiers only
    ///
    /// Used for filter selections, which may only reference recognized values.
    #[must_use]
    pub fn parse_known(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::KNOWN
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(wanted))
            .cloned()
    }

    /// Whether this is one of the four known tiers
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Ordinal rank used for sorting, 1 (best) through 4
    ///
    /// Derived by substring containment on the label, checked in priority
    /// order: "Top 20", then "Main Event", then "Worth Doing"; everything else
    /// ranks 4. A longer label that embeds one of these markers takes that
    /// marker's rank.
    #[must_use]
    pub fn sort_rank(&self) -> u8 {
        let label = self.as_str();
        if label.contains(ratings::TOP_20_MARKER) {
            1
        } else if label.contains(ratings::MAIN_EVENT_MARKER) {
            2
        } else if label.contains(ratings::WORTH_DOING_MARKER) {
            3
        } else {
            ratings::FALLBACK_RANK
        }
    }
}

impl From<String> for Rating {
    fn from(label: String) -> Self {
        match Self::parse_known(&label) {
            Some(known) if known.as_str() == label => known,
            _ => Self::Other(label),
        }
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        match rating {
            Rating::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
