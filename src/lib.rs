// ABOUTME: Main library entry point for the fitness journal client
// ABOUTME: Wires unit preferences, the REST API client, forms, and views over the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Journal
//!
//! Client for a personal fitness journal backend. Measurements are always
//! stored in canonical units (pounds, inches) and converted to the user's
//! preferred units only at the display and input edges.
//!
//! ## Layout
//!
//! - **preferences**: persisted unit preferences with a pluggable cache
//! - **api**: typed REST client plus the [`api::JournalBackend`] seam
//! - **forms**: body composition, workout builder, and daily activity editors
//! - **views**: day navigation, journal rendering, and the charts summary
//! - **context**: session wiring of config, client, and preferences

/// Application constants and environment variable names
pub mod constants;

/// Unified error handling, re-exported from the core crate
pub mod errors;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP client construction helpers
pub mod utils;

/// Unit preference store and its persistence
pub mod preferences;

/// REST API client for the journal backend
pub mod api;

/// Session-scoped dependency wiring
pub mod context;

/// Stateful data-entry forms
pub mod forms;

/// Read-only presentation of journal data
pub mod views;

pub use journal_core::models;
pub use journal_core::units;
pub use journal_metrics as metrics;
