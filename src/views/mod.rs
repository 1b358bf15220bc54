// ABOUTME: Read-only presentation of journal data in the user's preferred units
// ABOUTME: Day navigation, the daily journal rendering, and the charts summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Views
//!
//! Views render to plain text. Stored values are canonical and converted
//! here; derived metrics are recomputed from the canonical inputs rather
//! than trusted from the backend.

/// Placeholder charts page with the dashboard summary
pub mod charts;
/// Daily journal rendering
pub mod journal;
/// Day-by-day date navigation
pub mod navigation;

pub use charts::ChartsView;
pub use journal::JournalView;
pub use navigation::DateNavigator;
