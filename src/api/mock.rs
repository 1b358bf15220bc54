// ABOUTME: In-memory journal backend implementing JournalBackend without network calls
// ABOUTME: Supports seeded catalogs, injected per-exercise failures or stalls, and call recording for tests

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::collections::HashSet;
use std::future::pending;

use async_trait::async_trait;
use chrono::{Local, NaiveDate, Utc};
use tokio::sync::Mutex;

use super::JournalBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{
    BodyComposition, BodyCompositionCreate, BodyCompositionUpdate, DailyActivity,
    DailyActivityCreate, DailyEntry, DashboardSummary, Exercise, Workout, WorkoutCreate,
    WorkoutExercise, WorkoutExerciseCreate, WorkoutStatus, WorkoutUpdate,
};

#[derive(Debug, Default)]
struct MockState {
    next_id: i64,
    body_compositions: Vec<BodyComposition>,
    exercises: Vec<Exercise>,
    workouts: Vec<Workout>,
    activities: Vec<DailyActivity>,
    failing_exercise_ids: HashSet<i64>,
    stalled_exercise_ids: HashSet<i64>,
    unavailable: bool,
    calls: Vec<String>,
}

impl MockState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, call: impl Into<String>) -> AppResult<()> {
        self.calls.push(call.into());
        if self.unavailable {
            return Err(AppError::unavailable("mock backend is offline"));
        }
        Ok(())
    }

    fn workout_mut(&mut self, id: i64) -> AppResult<&mut Workout> {
        self.workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::http_status(404, format!("Workout {id} not found")))
    }
}

/// Mock journal backend for testing (no API calls)
#[derive(Debug, Default)]
pub struct MockJournalBackend {
    state: Mutex<MockState>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

impl MockJournalBackend {
    /// Empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a catalog exercise; ids are assigned in insertion order starting at 1
    #[must_use]
    pub fn with_exercise(mut self, name: &str, category: &str) -> Self {
        let state = self.state.get_mut();
        let id = state.allocate_id();
        state.exercises.push(Exercise {
            id,
            name: name.to_owned(),
            category: Some(category.to_owned()),
            created_at: timestamp(),
            updated_at: timestamp(),
        });
        self
    }

    /// Make every attempt to add `exercise_id` to a workout fail with a 500
    #[must_use]
    pub fn with_failing_exercise(mut self, exercise_id: i64) -> Self {
        self.state.get_mut().failing_exercise_ids.insert(exercise_id);
        self
    }

    /// Seed a day's activity
    #[must_use]
    pub fn with_activity(mut self, date: NaiveDate, steps: Option<u32>, walked: Option<bool>) -> Self {
        let state = self.state.get_mut();
        let id = state.allocate_id();
        state.activities.push(DailyActivity {
            id,
            date,
            steps,
            walk_yes_no: walked,
            mobility_yes_no: None,
            notes: None,
            created_at: timestamp(),
            updated_at: timestamp(),
        });
        self
    }

    /// Seed a stored measurement
    #[must_use]
    pub fn with_body_composition(mut self, mut entry: BodyComposition) -> Self {
        let state = self.state.get_mut();
        entry.id = state.allocate_id();
        state.body_compositions.push(entry);
        self
    }

    /// Stop (or resume) answering; calls fail with `ExternalServiceUnavailable`
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().await.unavailable = unavailable;
    }

    /// Stop or resume failing additions of `exercise_id`
    pub async fn set_exercise_failing(&self, exercise_id: i64, failing: bool) {
        let mut state = self.state.lock().await;
        if failing {
            state.failing_exercise_ids.insert(exercise_id);
        } else {
            state.failing_exercise_ids.remove(&exercise_id);
        }
    }

    /// Never answer additions of `exercise_id` until switched back
    pub async fn set_exercise_stalled(&self, exercise_id: i64, stalled: bool) {
        let mut state = self.state.lock().await;
        if stalled {
            state.stalled_exercise_ids.insert(exercise_id);
        } else {
            state.stalled_exercise_ids.remove(&exercise_id);
        }
    }

    /// Names of the calls received so far, in order
    pub async fn calls(&self) -> Vec<String> {
        self.state.lock().await.calls.clone()
    }

    /// Current workouts
    pub async fn workouts(&self) -> Vec<Workout> {
        self.state.lock().await.workouts.clone()
    }

    /// Current measurements
    pub async fn body_compositions(&self) -> Vec<BodyComposition> {
        self.state.lock().await.body_compositions.clone()
    }

    /// Current daily activities
    pub async fn activities(&self) -> Vec<DailyActivity> {
        self.state.lock().await.activities.clone()
    }
}

#[async_trait]
impl JournalBackend for MockJournalBackend {
    async fn create_body_composition(
        &self,
        data: &BodyCompositionCreate,
    ) -> AppResult<BodyComposition> {
        let mut state = self.state.lock().await;
        state.record("create_body_composition")?;
        if data.weight_pounds <= 0.0 {
            return Err(AppError::http_status(422, "weight_pounds must be positive"));
        }
        let entry = BodyComposition {
            id: state.allocate_id(),
            date: data.date,
            weight_pounds: data.weight_pounds,
            height_inches: data.height_inches,
            waist_inches: data.waist_inches,
            neck_inches: data.neck_inches,
            bmi: data.bmi,
            body_fat_percentage: data.body_fat_percentage,
            is_male: data.is_male,
            notes: data.notes.clone(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        state.body_compositions.push(entry.clone());
        Ok(entry)
    }

    async fn update_body_composition(
        &self,
        id: i64,
        data: &BodyCompositionUpdate,
    ) -> AppResult<BodyComposition> {
        let mut state = self.state.lock().await;
        state.record(format!("update_body_composition:{id}"))?;
        let entry = state
            .body_compositions
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::http_status(404, format!("Measurement {id} not found")))?;

        if let Some(weight) = data.weight_pounds {
            entry.weight_pounds = weight;
        }
        entry.height_inches = data.height_inches.or(entry.height_inches);
        entry.waist_inches = data.waist_inches.or(entry.waist_inches);
        entry.neck_inches = data.neck_inches.or(entry.neck_inches);
        entry.bmi = data.bmi.or(entry.bmi);
        entry.body_fat_percentage = data.body_fat_percentage.or(entry.body_fat_percentage);
        if let Some(is_male) = data.is_male {
            entry.is_male = is_male;
        }
        if data.notes.is_some() {
            entry.notes.clone_from(&data.notes);
        }
        entry.updated_at = timestamp();
        Ok(entry.clone())
    }

    async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        let mut state = self.state.lock().await;
        state.record("list_exercises")?;
        Ok(state.exercises.clone())
    }

    async fn create_workout(&self, data: &WorkoutCreate) -> AppResult<Workout> {
        let mut state = self.state.lock().await;
        state.record("create_workout")?;
        let workout = Workout {
            id: state.allocate_id(),
            date: data.date,
            notes: data.notes.clone(),
            status: Some(WorkoutStatus::InProgress),
            created_at: timestamp(),
            updated_at: timestamp(),
            exercises: Vec::new(),
        };
        state.workouts.push(workout.clone());
        Ok(workout)
    }

    async fn get_workout(&self, id: i64) -> AppResult<Workout> {
        let mut state = self.state.lock().await;
        state.record(format!("get_workout:{id}"))?;
        state.workout_mut(id).map(|w| w.clone())
    }

    async fn update_workout(&self, id: i64, data: &WorkoutUpdate) -> AppResult<Workout> {
        let mut state = self.state.lock().await;
        state.record(format!("update_workout:{id}"))?;
        let workout = state.workout_mut(id)?;
        if data.notes.is_some() {
            workout.notes.clone_from(&data.notes);
        }
        if data.status.is_some() {
            workout.status = data.status;
        }
        workout.updated_at = timestamp();
        Ok(workout.clone())
    }

    async fn delete_workout(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.record(format!("delete_workout:{id}"))?;
        let before = state.workouts.len();
        state.workouts.retain(|w| w.id != id);
        if state.workouts.len() == before {
            return Err(AppError::http_status(404, format!("Workout {id} not found")));
        }
        Ok(())
    }

    async fn add_workout_exercise(
        &self,
        workout_id: i64,
        data: &WorkoutExerciseCreate,
    ) -> AppResult<WorkoutExercise> {
        let mut state = self.state.lock().await;
        state.record(format!("add_workout_exercise:{}", data.exercise_id))?;
        if state.stalled_exercise_ids.contains(&data.exercise_id) {
            drop(state);
            return pending().await;
        }

        if state.failing_exercise_ids.contains(&data.exercise_id) {
            return Err(AppError::http_status(500, "Internal Server Error"));
        }
        if data.sets_data.is_empty() {
            return Err(AppError::http_status(422, "sets_data must not be empty"));
        }
        let exercise_name = state
            .exercises
            .iter()
            .find(|e| e.id == data.exercise_id)
            .map(|e| e.name.clone())
            .ok_or_else(|| {
                AppError::http_status(404, format!("Exercise {} not found", data.exercise_id))
            })?;

        let id = state.allocate_id();
        let line = WorkoutExercise {
            id,
            workout_id,
            exercise_id: data.exercise_id,
            exercise_name,
            sets_data: data.sets_data.clone(),
            notes: data.notes.clone(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        state.workout_mut(workout_id)?.exercises.push(line.clone());
        Ok(line)
    }

    async fn delete_workout_exercise(&self, id: i64) -> AppResult<()> {
        let mut state = self.state.lock().await;
        state.record(format!("delete_workout_exercise:{id}"))?;
        let workout = state
            .workouts
            .iter_mut()
            .find(|w| w.exercises.iter().any(|e| e.id == id))
            .ok_or_else(|| AppError::http_status(404, format!("Workout exercise {id} not found")))?;
        workout.exercises.retain(|e| e.id != id);
        Ok(())
    }

    async fn complete_workout(&self, id: i64) -> AppResult<Workout> {
        let mut state = self.state.lock().await;
        state.record(format!("complete_workout:{id}"))?;
        let workout = state.workout_mut(id)?;
        workout.status = Some(WorkoutStatus::Completed);
        Ok(workout.clone())
    }

    async fn daily_activity_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyActivity>> {
        let mut state = self.state.lock().await;
        state.record("daily_activity_by_date")?;
        Ok(state.activities.iter().find(|a| a.date == date).cloned())
    }

    async fn save_daily_activity(&self, data: &DailyActivityCreate) -> AppResult<DailyActivity> {
        let mut state = self.state.lock().await;
        state.record("save_daily_activity")?;
        let date = data.date.unwrap_or_else(|| Local::now().date_naive());

        if let Some(existing) = state.activities.iter_mut().find(|a| a.date == date) {
            existing.steps = data.steps;
            existing.walk_yes_no = data.walk_yes_no;
            existing.mobility_yes_no = data.mobility_yes_no;
            existing.notes.clone_from(&data.notes);
            existing.updated_at = timestamp();
            return Ok(existing.clone());
        }

        let activity = DailyActivity {
            id: state.allocate_id(),
            date,
            steps: data.steps,
            walk_yes_no: data.walk_yes_no,
            mobility_yes_no: data.mobility_yes_no,
            notes: data.notes.clone(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        state.activities.push(activity.clone());
        Ok(activity)
    }

    async fn daily_entry(&self, date: NaiveDate) -> AppResult<DailyEntry> {
        let mut state = self.state.lock().await;
        state.record("daily_entry")?;
        Ok(DailyEntry {
            date,
            body_composition: state
                .body_compositions
                .iter()
                .find(|e| e.date == date)
                .cloned(),
            workouts: state
                .workouts
                .iter()
                .filter(|w| w.date == date)
                .cloned()
                .collect(),
        })
    }

    async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        let mut state = self.state.lock().await;
        state.record("dashboard_summary")?;
        let latest = state.body_compositions.iter().max_by_key(|e| e.date);
        Ok(DashboardSummary {
            total_measurements: state.body_compositions.len() as u32,
            total_workouts: state.workouts.len() as u32,
            current_weight: latest.map(|e| e.weight_pounds),
            weight_change_7d: None,
            weight_change_30d: None,
        })
    }
}
