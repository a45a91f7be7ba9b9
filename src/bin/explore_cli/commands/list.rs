// ABOUTME: The list subcommand: filter, search, and sort the catalog
// ABOUTME: Builds browse events from command-line flags and prints the result page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use explore907::{
    browse::{CatalogBrowser, ViewMode},
    catalog::Catalog,
    config::ExplorerConfig,
    errors::{AppError, AppResult},
    filters::FilterSelection,
    formatters::OutputFormat,
    presentation::ResultsPage,
    sorting::{SortDirection, SortKey, SortState},
};
use tracing::info;

use crate::helpers::display::print_output;

/// Filter, sort, and layout flags for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Activity type (Bike, Drive, Fish, Hike, Paddle, Ski, Tour); repeatable
    #[arg(long = "activity")]
    pub activities: Vec<String>,

    /// Area (Anchorage, Fairbanks-Denali, Kenai, Mat-Su, Southeast, Valdez); repeatable
    #[arg(long = "area")]
    pub areas: Vec<String>,

    /// Difficulty (Easy, Medium, Tough); repeatable
    #[arg(long = "difficulty")]
    pub difficulties: Vec<String>,

    /// Rating label ("1: Top 20", "2: Main Event", ...); repeatable
    #[arg(long = "rating")]
    pub ratings: Vec<String>,

    /// Season (Summer, Winter); repeatable
    #[arg(long = "season")]
    pub seasons: Vec<String>,

    /// Time required (Few Hours, Full Day, Weekend); repeatable
    #[arg(long = "time")]
    pub times: Vec<String>,

    /// Case-insensitive text to find in title, description, location, or area
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort key: title, rating, difficulty, or area
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Result layout: grid or list
    #[arg(long)]
    pub view: Option<String>,
}

impl ListArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection {
            activities: self.activities.clone(),
            areas: self.areas.clone(),
            difficulties: self.difficulties.clone(),
            ratings: self.ratings.clone(),
            seasons: self.seasons.clone(),
            time_required: self.times.clone(),
            search_query: self.search.clone().unwrap_or_default(),
        }
    }

    fn sort_state(&self, default: SortState) -> AppResult<SortState> {
        let key = match &self.sort {
            Some(raw) => SortKey::parse(raw).ok_or_else(|| {
                let options: Vec<&str> = SortKey::ALL.iter().map(SortKey::as_str).collect();
                AppError::invalid_input(format!(
                    "unknown sort key '{raw}', expected one of: {}",
                    options.join(", ")
                ))
            })?,
            None => default.key,
        };
        let direction = if self.desc {
            SortDirection::Descending
        } else if self.sort.is_some() {
            SortDirection::Ascending
        } else {
            default.direction
        };
        Ok(SortState::new(key, direction))
    }

    fn view_mode(&self, default: ViewMode) -> AppResult<ViewMode> {
        self.view.as_deref().map_or(Ok(default), |raw| {
            ViewMode::parse(raw).ok_or_else(|| {
                AppError::invalid_input(format!("unknown view '{raw}', expected grid or list"))
            })
        })
    }

    /// Browser starting from the flags, falling back to the configured sort and view
    fn browser(&self, config: &ExplorerConfig, catalog: Catalog) -> AppResult<CatalogBrowser> {
        let sort = self.sort_state(config.default_sort)?;
        let view_mode = self.view_mode(config.view_mode)?;
        let resolved = self.selection().resolve();
        if !resolved.ignored.is_empty() {
            info!(
                ignored = resolved.ignored.len(),
                "Some filter values were not recognized and were skipped"
            );
        }

        Ok(CatalogBrowser::new(catalog)
            .with_sort(sort)
            .with_view_mode(view_mode)
            .with_filters(resolved.filters))
    }
}

/// Run `list`
pub fn run(
    config: &ExplorerConfig,
    catalog: Catalog,
    args: &ListArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let mut browser = args.browser(config, catalog)?;
    let results = browser.results();
    print_output(&ResultsPage::from(&results), format)
}
