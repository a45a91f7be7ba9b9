// ABOUTME: Core types and constants for the explore907 outdoor activity catalog
// ABOUTME: Foundation crate with facet enumerations, activity records, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # explore907 Core
//!
//! Foundation crate providing the shared vocabulary of the activity catalog.
//! Everything in here is plain data: the closed facet enumerations, the
//! immutable activity record, and the unified error type used by loaders and
//! configuration.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Catalog constants (rating labels, environment variable names)
//! - **models**: `ActivityRecord` and the facet enumerations it is built from

/// Unified error handling system with standard error codes
pub mod errors;

/// Catalog constants organized by domain
pub mod constants;

/// Core data models (`ActivityRecord`, `Area`, `Rating`, etc.)
pub mod models;
