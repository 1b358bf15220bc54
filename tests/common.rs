// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, fixed dates, seeded mock backends, and sample measurements
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitness_journal`

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use fitness_journal::{
    api::MockJournalBackend,
    models::BodyComposition,
    preferences::{MemoryCache, UnitPreferenceStore, UnitPreferences},
    units::{LengthUnit, WeightUnit},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed day used across tests
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
}

/// Preferences with everything metric
pub const fn metric_preferences() -> UnitPreferences {
    UnitPreferences {
        body_weight: WeightUnit::Kilograms,
        exercise_weight: WeightUnit::Kilograms,
        length: LengthUnit::Centimeters,
    }
}

/// Store over a fresh in-memory cache
pub fn memory_store() -> UnitPreferenceStore {
    UnitPreferenceStore::load(Arc::new(MemoryCache::new()))
}

/// Mock backend with a small strength catalog
///
/// Ids: 1 Bench Press, 2 Back Squat, 3 Deadlift, 4 Overhead Press
pub fn seeded_backend() -> MockJournalBackend {
    init_test_logging();
    MockJournalBackend::new()
        .with_exercise("Bench Press", "strength")
        .with_exercise("Back Squat", "strength")
        .with_exercise("Deadlift", "strength")
        .with_exercise("Overhead Press", "strength")
}

/// Reference measurement: 154 lbs, 68 in tall, 34 in waist, 15 in neck
pub fn sample_measurement(is_male: bool) -> BodyComposition {
    BodyComposition {
        id: 0,
        date: test_date(),
        weight_pounds: 154.0,
        height_inches: Some(68.0),
        waist_inches: Some(34.0),
        neck_inches: Some(15.0),
        bmi: None,
        body_fat_percentage: None,
        is_male,
        notes: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}
