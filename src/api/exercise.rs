// ABOUTME: Exercise catalog and workout endpoints of the journal API
// ABOUTME: Catalog CRUD and progress, workout lifecycle, and per-workout exercise lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use reqwest::Method;

use super::JournalApiClient;
use crate::constants::defaults::TREND_DAYS;
use crate::constants::endpoints::{EXERCISES, WORKOUTS, WORKOUT_EXERCISES};
use crate::errors::AppResult;
use crate::models::{
    Exercise, ExerciseCreate, ExerciseProgress, Workout, WorkoutCreate, WorkoutExercise,
    WorkoutExerciseCreate, WorkoutUpdate,
};

// ============================================================================
// Exercise catalog
// ============================================================================

impl JournalApiClient {
    /// Add an exercise to the catalog
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` or `InvalidInput` when the backend rejects the name
    pub async fn create_exercise(&self, data: &ExerciseCreate) -> AppResult<Exercise> {
        self.send_json(Method::POST, EXERCISES, data).await
    }

    /// Full exercise catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        self.get(EXERCISES).await
    }

    /// Rename or recategorize an exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise does not exist or the payload is rejected
    pub async fn update_exercise(&self, id: i64, data: &ExerciseCreate) -> AppResult<Exercise> {
        self.send_json(Method::PUT, &format!("{EXERCISES}/{id}"), data)
            .await
    }

    /// Remove an exercise from the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise does not exist or the request fails
    pub async fn delete_exercise(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("{EXERCISES}/{id}")).await
    }

    /// Best load and volume per day for one exercise
    ///
    /// `days` defaults to 30 when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the exercise has no history
    pub async fn exercise_progress(
        &self,
        id: i64,
        days: Option<u32>,
    ) -> AppResult<Vec<ExerciseProgress>> {
        let days = days.unwrap_or(TREND_DAYS);
        self.get_with_query(&format!("{EXERCISES}/{id}/progress"), &[("days", days)])
            .await
    }
}

// ============================================================================
// Workouts
// ============================================================================

impl JournalApiClient {
    /// Create a workout, optionally with exercises already attached
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload or is unreachable
    pub async fn create_workout(&self, data: &WorkoutCreate) -> AppResult<Workout> {
        self.send_json(Method::POST, WORKOUTS, data).await
    }

    /// All workouts
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.get(WORKOUTS).await
    }

    /// Workouts logged on `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn workouts_by_date(&self, date: NaiveDate) -> AppResult<Vec<Workout>> {
        self.get(&format!("{WORKOUTS}/date/{}", date.format("%Y-%m-%d")))
            .await
    }

    /// Workout by id, including its exercises
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get_workout(&self, id: i64) -> AppResult<Workout> {
        self.get(&format!("{WORKOUTS}/{id}")).await
    }

    /// Update notes or status
    ///
    /// # Errors
    ///
    /// Returns an error if the workout does not exist or the payload is rejected
    pub async fn update_workout(&self, id: i64, data: &WorkoutUpdate) -> AppResult<Workout> {
        self.send_json(Method::PUT, &format!("{WORKOUTS}/{id}"), data)
            .await
    }

    /// Delete a workout and its exercise lines
    ///
    /// # Errors
    ///
    /// Returns an error if the workout does not exist or the request fails
    pub async fn delete_workout(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("{WORKOUTS}/{id}")).await
    }

    /// Append one exercise line to a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the workout or exercise does not exist
    pub async fn add_workout_exercise(
        &self,
        workout_id: i64,
        data: &WorkoutExerciseCreate,
    ) -> AppResult<WorkoutExercise> {
        self.send_json(Method::POST, &format!("{WORKOUTS}/{workout_id}/exercises"), data)
            .await
    }

    /// Mark a workout as completed
    ///
    /// # Errors
    ///
    /// Returns an error if the workout does not exist or the request fails
    pub async fn complete_workout(&self, id: i64) -> AppResult<Workout> {
        self.post_empty(&format!("{WORKOUTS}/{id}/complete")).await
    }

    /// Remove one exercise line from its workout
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not exist or the request fails
    pub async fn delete_workout_exercise(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("{WORKOUT_EXERCISES}/{id}")).await
    }
}
