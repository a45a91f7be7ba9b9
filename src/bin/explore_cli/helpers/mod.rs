// ABOUTME: Re-exports helper modules for the explore907 CLI
// ABOUTME: Provides output printing shared by every subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
