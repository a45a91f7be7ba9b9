// ABOUTME: Re-export of the unified error type from the core crate
// ABOUTME: Lets library and binary code import errors from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use explore907_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
