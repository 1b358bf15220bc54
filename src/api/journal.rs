// ABOUTME: Journal and analytics endpoints of the journal API
// ABOUTME: Per-day aggregates, date ranges, chart series, and the dashboard summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;

use super::JournalApiClient;
use crate::constants::endpoints::{ANALYTICS, JOURNAL};
use crate::errors::{AppError, AppResult};
use crate::models::{
    BodyCompositionTrend, DailyEntry, DashboardSummary, ExerciseProgress, WeightTrend,
    WorkoutFrequency,
};

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl JournalApiClient {
    /// Everything recorded on `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn daily_entry(&self, date: NaiveDate) -> AppResult<DailyEntry> {
        self.get(&format!("{JOURNAL}/daily/{}", iso(date))).await
    }

    /// One entry per day between `start` and `end`, inclusive
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `start` is after `end`, otherwise any request failure
    pub async fn journal_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DailyEntry>> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "Range start {start} is after end {end}"
            )));
        }
        self.get_with_query(
            &format!("{JOURNAL}/range"),
            &[("start_date", iso(start)), ("end_date", iso(end))],
        )
        .await
    }

    /// Weight series for the last `days` days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn weight_trend(&self, days: u32) -> AppResult<Vec<WeightTrend>> {
        self.get_with_query(&format!("{ANALYTICS}/charts/weight-trend"), &[("days", days)])
            .await
    }

    /// Weight and waist series for the last `days` days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn body_composition_chart(&self, days: u32) -> AppResult<Vec<BodyCompositionTrend>> {
        self.get_with_query(
            &format!("{ANALYTICS}/charts/body-composition"),
            &[("days", days)],
        )
        .await
    }

    /// Load and volume series for one exercise
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn exercise_progress_chart(
        &self,
        exercise_id: i64,
        days: u32,
    ) -> AppResult<Vec<ExerciseProgress>> {
        self.get_with_query(
            &format!("{ANALYTICS}/charts/exercise-progress/{exercise_id}"),
            &[("days", days)],
        )
        .await
    }

    /// Workouts per period for the last `days` days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn workout_frequency(&self, days: u32) -> AppResult<Vec<WorkoutFrequency>> {
        self.get_with_query(
            &format!("{ANALYTICS}/charts/workout-frequency"),
            &[("days", days)],
        )
        .await
    }

    /// Headline numbers for the dashboard
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        self.get(&format!("{ANALYTICS}/summary/dashboard")).await
    }
}
