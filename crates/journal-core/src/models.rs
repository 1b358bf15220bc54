// ABOUTME: JSON wire models exchanged with the fitness journal backend
// ABOUTME: Body composition, exercises, workouts, daily activity, journal and analytics types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wire models
//!
//! All measurements travel in canonical units: weights in pounds, lengths in
//! inches. Field names follow the backend's snake_case JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-date (de)serialization tolerant of full timestamps
///
/// The backend returns some dates as `YYYY-MM-DD` and others as ISO-8601
/// datetimes; only the calendar day is kept.
pub mod journal_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Wire format for outgoing dates
    pub const FORMAT: &str = "%Y-%m-%d";

    /// Parse the leading `YYYY-MM-DD` of a date or datetime string
    ///
    /// # Errors
    ///
    /// Returns a chrono parse error if the string does not start with a date
    pub fn parse(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, FORMAT)
    }

    /// Serialize a date as `YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Propagates serializer errors
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    /// Deserialize a date or datetime string into its calendar day
    ///
    /// # Errors
    ///
    /// Returns a custom error if the value is not a date string
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Optional variant used by create payloads
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serialize an optional date
        ///
        /// # Errors
        ///
        /// Propagates serializer errors
        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.collect_str(&date.format(super::FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserialize an optional date or datetime string
        ///
        /// # Errors
        ///
        /// Returns a custom error if a present value is not a date string
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::parse(&raw).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

// ============================================================================
// Body composition
// ============================================================================

/// A stored body-composition measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Backend identifier
    pub id: i64,
    /// Day of the measurement
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Body weight in pounds
    pub weight_pounds: f64,
    /// Height in inches
    #[serde(default)]
    pub height_inches: Option<f64>,
    /// Waist circumference in inches
    #[serde(default)]
    pub waist_inches: Option<f64>,
    /// Neck circumference in inches
    #[serde(default)]
    pub neck_inches: Option<f64>,
    /// BMI as stored by the backend
    #[serde(default)]
    pub bmi: Option<f64>,
    /// Body fat percentage as stored by the backend
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    /// Whether the male body-fat formula applies
    #[serde(default = "default_is_male")]
    pub is_male: bool,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the backend
    #[serde(default)]
    pub updated_at: String,
}

const fn default_is_male() -> bool {
    true
}

/// Payload creating a body-composition entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionCreate {
    /// Day of the measurement
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Body weight in pounds
    pub weight_pounds: f64,
    /// Height in inches
    pub height_inches: Option<f64>,
    /// Waist circumference in inches
    pub waist_inches: Option<f64>,
    /// Neck circumference in inches
    pub neck_inches: Option<f64>,
    /// Client-computed BMI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Client-computed body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Whether the male body-fat formula applies
    pub is_male: bool,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update of a body-composition entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionUpdate {
    /// Body weight in pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_pounds: Option<f64>,
    /// Height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    /// Waist circumference in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_inches: Option<f64>,
    /// Neck circumference in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neck_inches: Option<f64>,
    /// Client-computed BMI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Client-computed body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Whether the male body-fat formula applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_male: Option<bool>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Exercises and workouts
// ============================================================================

/// An exercise in the backend catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Backend identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Category (strength, cardio, flexibility)
    #[serde(default)]
    pub category: Option<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the backend
    #[serde(default)]
    pub updated_at: String,
}

/// Payload creating or renaming a catalog exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCreate {
    /// Display name
    pub name: String,
    /// Category (strength, cardio, flexibility)
    pub category: String,
}

/// Weight/reps/sets for one line of a workout exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetData {
    /// Load in pounds
    pub weight: f64,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
}

impl SetData {
    /// Total repetitions across all sets
    #[must_use]
    pub const fn total_reps(&self) -> u32 {
        self.reps.saturating_mul(self.sets)
    }
}

/// Lifecycle of a workout on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutStatus {
    /// Exercises are still being added
    #[default]
    InProgress,
    /// Workout was finished
    Completed,
    /// Workout was abandoned
    Cancelled,
}

/// An exercise performed as part of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Backend identifier of this workout line
    pub id: i64,
    /// Owning workout
    #[serde(default)]
    pub workout_id: i64,
    /// Catalog exercise
    pub exercise_id: i64,
    /// Catalog exercise name
    #[serde(default)]
    pub exercise_name: String,
    /// Performed sets
    pub sets_data: Vec<SetData>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the backend
    #[serde(default)]
    pub updated_at: String,
}

/// Payload adding an exercise to a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExerciseCreate {
    /// Catalog exercise
    pub exercise_id: i64,
    /// Performed sets, at least one
    pub sets_data: Vec<SetData>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A workout with its exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Backend identifier
    pub id: i64,
    /// Day of the workout
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<WorkoutStatus>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the backend
    #[serde(default)]
    pub updated_at: String,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

/// Payload creating a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCreate {
    /// Day of the workout
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Exercises to record immediately
    pub exercises: Vec<WorkoutExerciseCreate>,
}

/// Partial update of a workout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutUpdate {
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkoutStatus>,
}

// ============================================================================
// Daily activity
// ============================================================================

/// Steps and yes/no habits for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Backend identifier
    pub id: i64,
    /// Day of the activity
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Step count
    #[serde(default)]
    pub steps: Option<u32>,
    /// Whether a walk was taken
    #[serde(default)]
    pub walk_yes_no: Option<bool>,
    /// Whether a mobility session was done
    #[serde(default)]
    pub mobility_yes_no: Option<bool>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp as sent by the backend
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as sent by the backend
    #[serde(default)]
    pub updated_at: String,
}

/// Payload creating (or replacing) the activity of a day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivityCreate {
    /// Day of the activity, backend defaults to today
    #[serde(
        with = "journal_date::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub date: Option<NaiveDate>,
    /// Step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Whether a walk was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_yes_no: Option<bool>,
    /// Whether a mobility session was done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobility_yes_no: Option<bool>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update of a day's activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivityUpdate {
    /// Step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Whether a walk was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_yes_no: Option<bool>,
    /// Whether a mobility session was done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobility_yes_no: Option<bool>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Journal and analytics
// ============================================================================

/// Everything recorded on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The day
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Body-composition measurement, if one was taken
    #[serde(default)]
    pub body_composition: Option<BodyComposition>,
    /// Workouts logged that day
    #[serde(default)]
    pub workouts: Vec<Workout>,
}

/// One point of the body-weight trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Day of the measurement
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Weight in pounds
    pub weight: f64,
}

/// One point of the body-composition trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionTrend {
    /// Day of the measurement
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Weight in pounds
    pub weight: f64,
    /// Waist circumference in inches
    #[serde(default)]
    pub waist_circumference: Option<f64>,
}

/// Best load and volume for an exercise on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgress {
    /// Catalog exercise name
    pub exercise_name: String,
    /// Day of the workout
    #[serde(with = "journal_date")]
    pub date: NaiveDate,
    /// Heaviest load in pounds
    pub max_weight: f64,
    /// Repetitions across all sets
    pub total_reps: u32,
}

/// Workouts logged per period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutFrequency {
    /// Period label (day or week start)
    #[serde(alias = "week", alias = "date")]
    pub period: String,
    /// Workouts in the period
    pub count: u32,
}

/// Headline numbers for the dashboard and charts page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of body-composition entries
    #[serde(default)]
    pub total_measurements: u32,
    /// Number of workouts
    #[serde(default)]
    pub total_workouts: u32,
    /// Latest weight in pounds
    #[serde(default)]
    pub current_weight: Option<f64>,
    /// Weight change over 7 days in pounds
    #[serde(default)]
    pub weight_change_7d: Option<f64>,
    /// Weight change over 30 days in pounds
    #[serde(default)]
    pub weight_change_30d: Option<f64>,
}
