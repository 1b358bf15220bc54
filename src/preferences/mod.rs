// ABOUTME: Session-wide unit preferences with persistence to a local cache
// ABOUTME: Getters, per-axis setters and togglers, merge-over-defaults rehydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit preference store
//!
//! The store owns the three display-unit selections. Every mutation writes
//! the full record to the cache under [`cache::UNIT_PREFERENCES_KEY`]. A
//! failed write is logged and the in-memory value is kept.

/// Cache backends
pub mod cache;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

pub use self::cache::{FileCache, MemoryCache, PreferenceCache};
use crate::constants::cache::UNIT_PREFERENCES_KEY;
use crate::units::{LengthUnit, WeightUnit};

/// Display-unit selections for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPreferences {
    /// Unit for body weight
    pub body_weight: WeightUnit,
    /// Unit for exercise loads
    pub exercise_weight: WeightUnit,
    /// Unit for height and circumferences
    pub length: LengthUnit,
}

impl UnitPreferences {
    /// Decode a cached record, keeping every field that parses
    ///
    /// Fields that are missing or hold an unknown unit fall back to their
    /// default. Returns `None` when the payload is not a JSON object.
    #[must_use]
    pub fn from_cached(raw: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring malformed unit preferences in cache: {e}");
                return None;
            }
        };
        let Value::Object(fields) = value else {
            warn!("Ignoring unit preferences that are not a JSON object");
            return None;
        };

        let defaults = Self::default();
        Some(Self {
            body_weight: field_or(&fields, "bodyWeight", defaults.body_weight),
            exercise_weight: field_or(&fields, "exerciseWeight", defaults.exercise_weight),
            length: field_or(&fields, "length", defaults.length),
        })
    }
}

impl fmt::Display for UnitPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "body weight: {}, exercise weight: {}, length: {}",
            self.body_weight, self.exercise_weight, self.length
        )
    }
}

fn field_or<T: DeserializeOwned>(fields: &serde_json::Map<String, Value>, key: &str, default: T) -> T {
    match fields.get(key) {
        None => default,
        Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|e| {
            warn!(field = key, "Unknown unit preference value, using default: {e}");
            default
        }),
    }
}

/// Unit preferences bound to their persistent cache
pub struct UnitPreferenceStore {
    preferences: UnitPreferences,
    cache: Arc<dyn PreferenceCache>,
}

impl fmt::Debug for UnitPreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitPreferenceStore")
            .field("preferences", &self.preferences)
            .finish_non_exhaustive()
    }
}

impl UnitPreferenceStore {
    /// Rehydrate preferences from `cache`, falling back to defaults
    ///
    /// Read failures and corrupt entries are logged; they never fail the load.
    pub fn load(cache: Arc<dyn PreferenceCache>) -> Self {
        let preferences = match cache.get(UNIT_PREFERENCES_KEY) {
            Ok(Some(raw)) => UnitPreferences::from_cached(&raw).unwrap_or_default(),
            Ok(None) => UnitPreferences::default(),
            Err(e) => {
                warn!("Could not read unit preferences, using defaults: {e}");
                UnitPreferences::default()
            }
        };
        debug!(%preferences, "Unit preferences loaded");
        Self { preferences, cache }
    }

    /// Store backed by a fresh in-memory cache
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Arc::new(MemoryCache::new()))
    }

    /// Current selections
    #[must_use]
    pub const fn preferences(&self) -> UnitPreferences {
        self.preferences
    }

    /// Unit for body weight
    #[must_use]
    pub const fn body_weight_unit(&self) -> WeightUnit {
        self.preferences.body_weight
    }

    /// Unit for exercise loads
    #[must_use]
    pub const fn exercise_weight_unit(&self) -> WeightUnit {
        self.preferences.exercise_weight
    }

    /// Unit for height and circumferences
    #[must_use]
    pub const fn length_unit(&self) -> LengthUnit {
        self.preferences.length
    }

    /// Select the body weight unit
    pub fn set_body_weight_unit(&mut self, unit: WeightUnit) {
        self.preferences.body_weight = unit;
        self.persist();
    }

    /// Select the exercise weight unit
    pub fn set_exercise_weight_unit(&mut self, unit: WeightUnit) {
        self.preferences.exercise_weight = unit;
        self.persist();
    }

    /// Select the length unit
    pub fn set_length_unit(&mut self, unit: LengthUnit) {
        self.preferences.length = unit;
        self.persist();
    }

    /// Switch body weight between pounds and kilograms
    pub fn toggle_body_weight_unit(&mut self) -> WeightUnit {
        self.set_body_weight_unit(self.preferences.body_weight.toggled());
        self.preferences.body_weight
    }

    /// Switch exercise weight between pounds and kilograms
    pub fn toggle_exercise_weight_unit(&mut self) -> WeightUnit {
        self.set_exercise_weight_unit(self.preferences.exercise_weight.toggled());
        self.preferences.exercise_weight
    }

    /// Switch length between inches and centimeters
    pub fn toggle_length_unit(&mut self) -> LengthUnit {
        self.set_length_unit(self.preferences.length.toggled());
        self.preferences.length
    }

    /// Restore the defaults (pounds, pounds, inches)
    pub fn reset(&mut self) {
        self.preferences = UnitPreferences::default();
        self.persist();
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.preferences) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode unit preferences: {e}");
                return;
            }
        };
        if let Err(e) = self.cache.set(UNIT_PREFERENCES_KEY, &encoded) {
            warn!("Failed to persist unit preferences, keeping them in memory: {e}");
        }
    }
}
