// ABOUTME: explore907 CLI - browse the Alaska activity catalog from a terminal
// ABOUTME: Lists filtered and sorted activities, shows one activity, and summarizes facets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Every activity, sorted by title
//! explore907 list
//!
//! # Kenai hikes, best rated first
//! explore907 list --area Kenai --activity Hike --sort rating
//!
//! # Easy or tough outings mentioning glaciers, as a detailed list
//! explore907 list --difficulty Easy --difficulty Tough --search glacier --view list
//!
//! # One activity in full
//! explore907 show harding-icefield
//!
//! # Facet values with record counts, as JSON
//! explore907 facets --format json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use explore907::config::ExplorerConfig;
use explore907::errors::AppError;
use explore907::logging::LoggingConfig;
use tracing::debug;

use commands::list::ListArgs;
use helpers::display::parse_format;

#[derive(Parser)]
#[command(
    name = "explore907",
    version,
    about = "Browse Alaska outdoor activities",
    long_about = "Filter, search, and sort a catalog of Alaska outdoor activities by area, \
                  activity type, difficulty, rating, season, and time required."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file (JSON or YAML) replacing the bundled dataset
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format: text, json, or pretty-json
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List activities matching the given filters
    List(ListArgs),

    /// Show every detail of one activity
    Show {
        /// Activity identifier
        id: String,
    },

    /// List every facet value with how many activities carry it
    Facets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("warning: {e:#}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ExplorerConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    let format = parse_format(&cli.format)?;
    debug!(?config, %format, "Configuration resolved");

    let catalog = config.load_catalog()?;

    match cli.command {
        Command::List(args) => commands::list::run(&config, catalog, &args, format)?,
        Command::Show { id } => commands::show::run(&catalog, &id, format)?,
        Command::Facets => commands::facets::run(&catalog, format)?,
    }

    Ok(())
}
