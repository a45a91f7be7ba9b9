// ABOUTME: String-typed filter selections as persisted or typed by a user
// ABOUTME: Resolves them against the facet enumerations, skipping unrecognized values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Selection parsing.
//!
//! The facet enumerations are the one compatibility-relevant contract of the
//! browser: a saved or hand-typed selection may only reference recognized
//! values. Anything else is dropped with a warning instead of failing, so an
//! old bookmark or a typo narrows nothing rather than breaking the page.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Facet, FacetValue, FilterState};

/// Raw filter selection, one list of labels per facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    /// Activity type labels
    pub activities: Vec<String>,
    /// Area labels
    pub areas: Vec<String>,
    /// Difficulty labels
    pub difficulties: Vec<String>,
    /// Rating labels
    pub ratings: Vec<String>,
    /// Season labels
    pub seasons: Vec<String>,
    /// Time required labels
    pub time_required: Vec<String>,
    /// Free-text search query
    pub search_query: String,
}

/// A selection value that matched no member of its facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredValue {
    /// Facet the value was given for
    pub facet: Facet,
    /// Value as supplied
    pub value: String,
}

/// Outcome of resolving a [`FilterSelection`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    /// Typed filter state built from the recognized values
    pub filters: FilterState,
    /// Values that were skipped
    pub ignored: Vec<IgnoredValue>,
}

impl FilterSelection {
    fn raw_values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::ActivityTypes => &self.activities,
            Facet::Areas => &self.areas,
            Facet::Difficulties => &self.difficulties,
            Facet::Ratings => &self.ratings,
            Facet::Seasons => &self.seasons,
            Facet::TimeRequired => &self.time_required,
        }
    }

    /// Resolve every label, reporting the ones that were skipped
    #[must_use]
    pub fn resolve(&self) -> ResolvedSelection {
        let mut filters = FilterState::new().with_search(self.search_query.clone());
        let mut ignored = Vec::new();

        for facet in Facet::ALL {
            for raw in self.raw_values(*facet) {
                if let Some(value) = FacetValue::parse(*facet, raw) {
                    filters = filters.toggled(value, true);
                } else {
                    warn!(facet = %facet, value = %raw, "Ignoring unrecognized filter value");
                    ignored.push(IgnoredValue {
                        facet: *facet,
                        value: raw.clone(),
                    });
                }
            }
        }

        ResolvedSelection { filters, ignored }
    }

    /// Resolve into a filter state, dropping unrecognized labels
    #[must_use]
    pub fn into_filter_state(self) -> FilterState {
        self.resolve().filters
    }
}

impl From<&FilterState> for FilterSelection {
    fn from(state: &FilterState) -> Self {
        Self {
            activities: state.selected_labels(Facet::ActivityTypes),
            areas: state.selected_labels(Facet::Areas),
            difficulties: state.selected_labels(Facet::Difficulties),
            ratings: state.selected_labels(Facet::Ratings),
            seasons: state.selected_labels(Facet::Seasons),
            time_required: state.selected_labels(Facet::TimeRequired),
            search_query: state.search_query().to_owned(),
        }
    }
}
