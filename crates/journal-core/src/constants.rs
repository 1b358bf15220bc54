// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Conversion factors, API paths, cache keys, and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Unit conversion factors
///
/// These are the approximations historical entries were recorded with.
/// They must not be replaced by more precise values.
pub mod units {
    /// Pounds to kilograms
    pub const LBS_TO_KG: f64 = 0.453_592;
    /// Kilograms to pounds
    pub const KG_TO_LBS: f64 = 2.204_62;
    /// Inches to centimeters
    pub const INCHES_TO_CM: f64 = 2.54;
    /// Centimeters to inches
    pub const CM_TO_INCHES: f64 = 0.393_701;
    /// Inches to meters
    pub const INCHES_TO_METERS: f64 = 0.0254;
}

/// Display labels shared by formatters and views
pub mod labels {
    /// Shown for an absent raw measurement
    pub const NOT_RECORDED: &str = "Not recorded";
    /// Shown for a derived metric that cannot be computed
    pub const NOT_AVAILABLE: &str = "Not available";
}

/// REST API paths
pub mod endpoints {
    /// Path prefix every backend resource lives under
    pub const API_BASE: &str = "/api";
    /// Body-composition resource
    pub const BODY_COMPOSITION: &str = "/body-composition";
    /// Exercise catalog
    pub const EXERCISES: &str = "/exercise/exercises";
    /// Workouts
    pub const WORKOUTS: &str = "/exercise/workouts";
    /// Individual exercises attached to a workout
    pub const WORKOUT_EXERCISES: &str = "/exercise/workout-exercises";
    /// Daily step/walk tracking
    pub const DAILY_ACTIVITIES: &str = "/exercise/daily-activities";
    /// Journal queries
    pub const JOURNAL: &str = "/journal";
    /// Aggregate analytics
    pub const ANALYTICS: &str = "/analytics";
}

/// Default values
pub mod defaults {
    /// Backend base URL used when none is configured
    pub const API_URL: &str = "http://localhost:8000";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Lookback window for trend and progress queries
    pub const TREND_DAYS: u32 = 30;
}

/// Local persistent cache
pub mod cache {
    /// Key holding the JSON-encoded unit preferences
    pub const UNIT_PREFERENCES_KEY: &str = "fitness-journal-units";
    /// Application directory name under the platform config dir
    pub const APP_DIR_NAME: &str = "fitness-journal";
}

/// Service identification for logging
pub mod service_names {
    /// CLI / client service name
    pub const FITNESS_JOURNAL: &str = "fitness-journal";
}
