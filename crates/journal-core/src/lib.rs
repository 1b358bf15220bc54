// ABOUTME: Core types and constants for the fitness journal client
// ABOUTME: Foundation crate with error handling, unit conversion, wire models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Journal Core
//!
//! Foundation crate providing shared types and constants for the fitness
//! journal client. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Conversion factors, API paths, and display labels
//! - **units**: Weight/length units, conversion and display formatting
//! - **models**: JSON wire models exchanged with the journal backend

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Display units and pure conversion/formatting functions
pub mod units;

/// Wire models for the journal REST API
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use units::{LengthUnit, WeightUnit};
