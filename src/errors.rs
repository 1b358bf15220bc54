// ABOUTME: Re-exports the unified error types from journal-core for the client crate
// ABOUTME: Keeps `crate::errors` as the single import path used by every module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The error types live in `journal-core` so the metrics crate and the client
//! share one definition.

pub use journal_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
