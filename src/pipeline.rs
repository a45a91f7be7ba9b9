// ABOUTME: Filter-then-sort pipeline over the full catalog
// ABOUTME: Pure composition of the predicate pass and the comparator sort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::debug;

use crate::filters::{filter_positions, FilterState};
use crate::models::ActivityRecord;
use crate::sorting::{sort_by_record, SortState};

/// Filter `records` by `filters`, then order the survivors by `sort`
///
/// Always starts from the full input; the input is never modified.
#[must_use]
pub fn run_pipeline<'a>(
    records: &'a [ActivityRecord],
    filters: &FilterState,
    sort: SortState,
) -> Vec<&'a ActivityRecord> {
    run_pipeline_positions(records, filters, sort)
        .into_iter()
        .filter_map(|position| records.get(position))
        .collect()
}

/// Same pipeline, reporting positions into `records` instead of references
#[must_use]
pub fn run_pipeline_positions(
    records: &[ActivityRecord],
    filters: &FilterState,
    sort: SortState,
) -> Vec<usize> {
    let kept = filter_positions(records, filters);
    debug!(input = records.len(), kept = kept.len(), %sort, "Pipeline pass");
    sort_by_record(kept, sort, |&position| &records[position])
}
