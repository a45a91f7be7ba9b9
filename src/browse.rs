// ABOUTME: Browse controller owning filter, sort, and view state for one catalog
// ABOUTME: Applies UI events as wholesale state replacements and memoizes the last pipeline run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Browse Controller
//!
//! [`CatalogBrowser`] is the single owner of the mutable browsing state. UI
//! code talks to it with [`BrowseEvent`] messages and reads back a
//! [`BrowseResults`] view. Each event swaps in a new [`FilterState`] or
//! [`SortState`]; the next read re-runs the pipeline over the full catalog
//! unless the `(filters, sort)` pair is identical to the previous run.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::filters::{FacetValue, FilterState};
use crate::models::ActivityRecord;
use crate::pipeline::run_pipeline_positions;
use crate::sorting::{SortKey, SortState};

/// Layout of the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid
    #[default]
    Grid,
    /// One detailed row per activity
    List,
}

impl ViewMode {
    /// Parse "grid" or "list" (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    /// Short name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State change requested by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    /// Check (`selected`) or uncheck a facet value
    ToggleFacet {
        /// Value being toggled
        value: FacetValue,
        /// New checkbox state
        selected: bool,
    },
    /// Replace the search query
    SetSearchQuery(String),
    /// Replace the whole filter state
    ReplaceFilters(FilterState),
    /// Reset every facet and the search query
    ClearFilters,
    /// Sort-control click: flips direction on the active key, else switches key ascending
    SelectSortKey(SortKey),
    /// Replace the sort state outright
    SetSort(SortState),
    /// Switch result layout
    SetViewMode(ViewMode),
}

impl BrowseEvent {
    /// Convenience constructor for [`BrowseEvent::ToggleFacet`]
    #[must_use]
    pub fn toggle(value: impl Into<FacetValue>, selected: bool) -> Self {
        Self::ToggleFacet {
            value: value.into(),
            selected,
        }
    }
}

/// Result of the last pipeline run, keyed by the inputs that produced it
#[derive(Debug, Clone)]
struct Memo {
    filters: FilterState,
    sort: SortState,
    positions: Vec<usize>,
}

impl Memo {
    fn is_for(&self, filters: &FilterState, sort: SortState) -> bool {
        self.sort == sort && self.filters == *filters
    }
}

/// What the result pane shows
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResults<'a> {
    /// Matching records in display order
    pub items: Vec<&'a ActivityRecord>,
    /// Number of matching records
    pub result_count: usize,
    /// Number of records in the catalog
    pub catalog_size: usize,
    /// Badge count of active filters
    pub active_filter_count: usize,
    /// Whether a "clear all" control would change anything
    pub can_clear_filters: bool,
    /// Filters that produced this result
    pub filters: &'a FilterState,
    /// Sort that produced this result
    pub sort: SortState,
    /// Layout to render with
    pub view_mode: ViewMode,
}

impl BrowseResults<'_> {
    /// Whether the filters matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Top-level controller for browsing one catalog
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Catalog,
    filters: FilterState,
    sort: SortState,
    view_mode: ViewMode,
    memo: Option<Memo>,
    recomputations: u64,
}

impl CatalogBrowser {
    /// Browser with default state: no filters, title ascending, grid view
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            sort: SortState::default(),
            view_mode: ViewMode::default(),
            memo: None,
            recomputations: 0,
        }
    }

    /// Start with a different sort
    #[must_use]
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    /// Start with a different view mode
    #[must_use]
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    /// Start with the given filters
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    /// Catalog being browsed
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filters
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current sort
    #[must_use]
    pub const fn sort(&self) -> SortState {
        self.sort
    }

    /// Current view mode
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// How many times the pipeline has actually run
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Apply one UI event; returns whether any state changed
    pub fn apply(&mut self, event: BrowseEvent) -> bool {
        debug!(?event, "Applying browse event");
        match event {
            BrowseEvent::ToggleFacet { value, selected } => {
                let next = self.filters.toggled(value, selected);
                self.replace_filters(next)
            }
            BrowseEvent::SetSearchQuery(query) => {
                let next = self.filters.clone().with_search(query);
                self.replace_filters(next)
            }
            BrowseEvent::ReplaceFilters(filters) => self.replace_filters(filters),
            BrowseEvent::ClearFilters => self.replace_filters(FilterState::default()),
            BrowseEvent::SelectSortKey(key) => self.replace_sort(self.sort.select(key)),
            BrowseEvent::SetSort(sort) => self.replace_sort(sort),
            BrowseEvent::SetViewMode(view_mode) => {
                let changed = self.view_mode != view_mode;
                self.view_mode = view_mode;
                changed
            }
        }
    }

    fn replace_filters(&mut self, filters: FilterState) -> bool {
        let changed = self.filters != filters;
        self.filters = filters;
        changed
    }

    fn replace_sort(&mut self, sort: SortState) -> bool {
        let changed = self.sort != sort;
        self.sort = sort;
        changed
    }

    /// Current results, recomputed only if filters or sort changed since the last call
    pub fn results(&mut self) -> BrowseResults<'_> {
        let records = self.catalog.records();
        let memo = match self.memo.take() {
            Some(memo) if memo.is_for(&self.filters, self.sort) => {
                debug!("Reusing memoized browse results");
                memo
            }
            _ => {
                self.recomputations += 1;
                Memo {
                    filters: self.filters.clone(),
                    sort: self.sort,
                    positions: run_pipeline_positions(records, &self.filters, self.sort),
                }
            }
        };
        let memo = self.memo.insert(memo);

        let items: Vec<&ActivityRecord> = memo
            .positions
            .iter()
            .filter_map(|&position| records.get(position))
            .collect();

        let active_filter_count = self.filters.active_filter_count();
        BrowseResults {
            result_count: items.len(),
            items,
            catalog_size: self.catalog.len(),
            active_filter_count,
            can_clear_filters: active_filter_count > 0,
            filters: &self.filters,
            sort: self.sort,
            view_mode: self.view_mode,
        }
    }
}
