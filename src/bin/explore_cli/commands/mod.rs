// ABOUTME: Re-exports command modules for the explore907 CLI
// ABOUTME: Provides the list, show, and facets subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod facets;
pub mod list;
pub mod show;
