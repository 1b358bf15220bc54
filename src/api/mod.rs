// ABOUTME: REST API access to the fitness journal backend
// ABOUTME: Defines the JournalBackend seam used by forms and views plus its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Journal API
//!
//! Forms and views depend on [`JournalBackend`] rather than on the HTTP
//! client directly, so they can be driven by [`mock::MockJournalBackend`].

mod activity;
mod body_composition;
/// HTTP transport and error mapping
pub mod client;
mod exercise;
mod journal;
/// In-memory backend for tests and offline use
pub mod mock;

use async_trait::async_trait;
use chrono::NaiveDate;

pub use client::JournalApiClient;
pub use mock::MockJournalBackend;

use crate::errors::AppResult;
use crate::models::{
    BodyComposition, BodyCompositionCreate, BodyCompositionUpdate, DailyActivity,
    DailyActivityCreate, DailyEntry, DashboardSummary, Exercise, Workout, WorkoutCreate,
    WorkoutExercise, WorkoutExerciseCreate, WorkoutUpdate,
};

/// Backend operations the forms and views need
///
/// Every method has the same semantics as the matching [`JournalApiClient`]
/// method, including `None` for a day without recorded activity.
#[async_trait]
pub trait JournalBackend: Send + Sync {
    /// Record a new measurement
    async fn create_body_composition(&self, data: &BodyCompositionCreate)
        -> AppResult<BodyComposition>;

    /// Apply a partial measurement update
    async fn update_body_composition(
        &self,
        id: i64,
        data: &BodyCompositionUpdate,
    ) -> AppResult<BodyComposition>;

    /// Full exercise catalog
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>>;

    /// Create a workout
    async fn create_workout(&self, data: &WorkoutCreate) -> AppResult<Workout>;

    /// Workout by id
    async fn get_workout(&self, id: i64) -> AppResult<Workout>;

    /// Update notes or status
    async fn update_workout(&self, id: i64, data: &WorkoutUpdate) -> AppResult<Workout>;

    /// Delete a workout
    async fn delete_workout(&self, id: i64) -> AppResult<()>;

    /// Append an exercise line to a workout
    async fn add_workout_exercise(
        &self,
        workout_id: i64,
        data: &WorkoutExerciseCreate,
    ) -> AppResult<WorkoutExercise>;

    /// Remove an exercise line
    async fn delete_workout_exercise(&self, id: i64) -> AppResult<()>;

    /// Mark a workout completed
    async fn complete_workout(&self, id: i64) -> AppResult<Workout>;

    /// Activity for a day, `None` when absent
    async fn daily_activity_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyActivity>>;

    /// Create or replace the activity for a day
    async fn save_daily_activity(&self, data: &DailyActivityCreate) -> AppResult<DailyActivity>;

    /// Everything recorded on a day
    async fn daily_entry(&self, date: NaiveDate) -> AppResult<DailyEntry>;

    /// Dashboard headline numbers
    async fn dashboard_summary(&self) -> AppResult<DashboardSummary>;
}

#[async_trait]
impl JournalBackend for JournalApiClient {
    async fn create_body_composition(
        &self,
        data: &BodyCompositionCreate,
    ) -> AppResult<BodyComposition> {
        Self::create_body_composition(self, data).await
    }

    async fn update_body_composition(
        &self,
        id: i64,
        data: &BodyCompositionUpdate,
    ) -> AppResult<BodyComposition> {
        Self::update_body_composition(self, id, data).await
    }

    async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        Self::list_exercises(self).await
    }

    async fn create_workout(&self, data: &WorkoutCreate) -> AppResult<Workout> {
        Self::create_workout(self, data).await
    }

    async fn get_workout(&self, id: i64) -> AppResult<Workout> {
        Self::get_workout(self, id).await
    }

    async fn update_workout(&self, id: i64, data: &WorkoutUpdate) -> AppResult<Workout> {
        Self::update_workout(self, id, data).await
    }

    async fn delete_workout(&self, id: i64) -> AppResult<()> {
        Self::delete_workout(self, id).await
    }

    async fn add_workout_exercise(
        &self,
        workout_id: i64,
        data: &WorkoutExerciseCreate,
    ) -> AppResult<WorkoutExercise> {
        Self::add_workout_exercise(self, workout_id, data).await
    }

    async fn delete_workout_exercise(&self, id: i64) -> AppResult<()> {
        Self::delete_workout_exercise(self, id).await
    }

    async fn complete_workout(&self, id: i64) -> AppResult<Workout> {
        Self::complete_workout(self, id).await
    }

    async fn daily_activity_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyActivity>> {
        Self::daily_activity_by_date(self, date).await
    }

    async fn save_daily_activity(&self, data: &DailyActivityCreate) -> AppResult<DailyActivity> {
        Self::save_daily_activity(self, data).await
    }

    async fn daily_entry(&self, date: NaiveDate) -> AppResult<DailyEntry> {
        Self::daily_entry(self, date).await
    }

    async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        Self::dashboard_summary(self).await
    }
}
