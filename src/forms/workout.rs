// ABOUTME: Workout builder reconciling locally drafted exercise entries with the backend
// ABOUTME: Tracks per-entry save state, partial batch saves, and unit re-derivation of drafts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout builder
//!
//! A workout is created on the backend first, then exercise entries are
//! drafted locally and saved one by one. Each entry carries its own
//! [`EntryState`], so a batch can partially succeed: saved entries become
//! read-only while failed ones keep their values and can be fixed and
//! re-submitted.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::{non_blank, FormStatus};
use crate::api::JournalBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, SetData, Workout, WorkoutCreate, WorkoutExerciseCreate, WorkoutUpdate};
use crate::preferences::UnitPreferences;
use crate::units::{convert_weight, weight_for_display, WeightUnit};

/// Message for entries whose save was dropped before the backend answered
pub const INTERRUPTED_SAVE: &str = "Save was interrupted before the backend answered";

/// Save state of one exercise entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntryState {
    /// Local only, editable
    #[default]
    Draft,
    /// Submission in flight
    ///
    /// Only observable from outside when a [`WorkoutBuilder::save_pending`]
    /// future was dropped mid-request; the next builder operation turns it
    /// into [`EntryState::Failed`].
    Saving,
    /// Stored on the backend as this workout exercise
    Saved {
        /// Backend id of the workout exercise line
        workout_exercise_id: i64,
    },
    /// Last submission failed; editable and retried by the next save
    Failed {
        /// Error shown next to the entry
        message: String,
    },
}

impl EntryState {
    /// Whether the next [`WorkoutBuilder::save_pending`] will submit this entry
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Draft | Self::Failed { .. })
    }

    /// Whether the entry is stored on the backend
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// One exercise line being drafted
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseEntry {
    exercise_id: Option<i64>,
    exercise_name: String,
    weight: f64,
    unit: WeightUnit,
    reps: u32,
    sets: u32,
    notes: String,
    state: EntryState,
}

impl ExerciseEntry {
    fn draft(unit: WeightUnit) -> Self {
        Self {
            exercise_id: None,
            exercise_name: String::new(),
            weight: 0.0,
            unit,
            reps: 0,
            sets: 1,
            notes: String::new(),
            state: EntryState::Draft,
        }
    }

    /// Selected catalog exercise
    #[must_use]
    pub const fn exercise_id(&self) -> Option<i64> {
        self.exercise_id
    }

    /// Name of the selected exercise, empty until one is chosen
    #[must_use]
    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    /// Load in [`Self::unit`]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Unit the load was entered in
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Repetitions per set
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Number of sets
    #[must_use]
    pub const fn sets(&self) -> u32 {
        self.sets
    }

    /// Entry notes
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Save state
    #[must_use]
    pub const fn state(&self) -> &EntryState {
        &self.state
    }

    /// Load in canonical pounds
    #[must_use]
    pub fn weight_pounds(&self) -> f64 {
        convert_weight(Some(self.weight), self.unit, WeightUnit::Pounds)
    }

    /// Build the backend payload, or explain why the entry cannot be sent
    fn payload(&self) -> Result<WorkoutExerciseCreate, String> {
        let exercise_id = self
            .exercise_id
            .ok_or_else(|| "Select an exercise".to_owned())?;
        if self.weight.is_nan() || self.weight <= 0.0 {
            return Err("Weight must be greater than 0".to_owned());
        }
        if self.reps < 1 {
            return Err("Reps must be at least 1".to_owned());
        }
        if self.sets < 1 {
            return Err("Sets must be at least 1".to_owned());
        }

        Ok(WorkoutExerciseCreate {
            exercise_id,
            sets_data: vec![SetData {
                weight: self.weight_pounds(),
                reps: self.reps,
                sets: self.sets,
            }],
            notes: non_blank(&self.notes),
        })
    }
}

/// Per-entry result of [`WorkoutBuilder::save_pending`]
///
/// Indices refer to [`WorkoutBuilder::entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Entries now stored on the backend
    pub saved: Vec<usize>,
    /// Entries the backend rejected, with the error message
    pub failed: Vec<(usize, String)>,
    /// Entries not sent because they are incomplete, with the reason
    pub skipped: Vec<(usize, String)>,
}

impl BatchOutcome {
    /// Every pending entry was saved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }

    /// One-line summary for display
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} saved, {} failed, {} skipped",
            self.saved.len(),
            self.failed.len(),
            self.skipped.len()
        )
    }
}

/// Builds one workout: create, add exercises in batches, then complete or cancel
#[derive(Debug, Clone)]
pub struct WorkoutBuilder {
    date: NaiveDate,
    catalog: Vec<Exercise>,
    workout: Option<Workout>,
    notes: String,
    entries: Vec<ExerciseEntry>,
    weight_unit: WeightUnit,
    status: FormStatus,
}

impl WorkoutBuilder {
    /// Builder for a new workout on `date`
    #[must_use]
    pub fn new(date: NaiveDate, preferences: UnitPreferences) -> Self {
        Self {
            date,
            catalog: Vec::new(),
            workout: None,
            notes: String::new(),
            entries: Vec::new(),
            weight_unit: preferences.exercise_weight,
            status: FormStatus::Idle,
        }
    }

    /// Builder continuing an existing workout
    ///
    /// Its recorded exercises appear as saved entries, one per set group.
    /// Set groups of the same backend line share its `workout_exercise_id`.
    #[must_use]
    pub fn resume(workout: Workout, preferences: UnitPreferences) -> Self {
        let unit = preferences.exercise_weight;
        let entries = workout
            .exercises
            .iter()
            .flat_map(|line| {
                line.sets_data.iter().map(move |set| ExerciseEntry {
                    exercise_id: Some(line.exercise_id),
                    exercise_name: line.exercise_name.clone(),
                    weight: weight_for_display(Some(set.weight), unit).unwrap_or_default(),
                    unit,
                    reps: set.reps,
                    sets: set.sets,
                    notes: line.notes.clone().unwrap_or_default(),
                    state: EntryState::Saved {
                        workout_exercise_id: line.id,
                    },
                })
            })
            .collect();

        Self {
            date: workout.date,
            catalog: Vec::new(),
            notes: workout.notes.clone().unwrap_or_default(),
            workout: Some(workout),
            entries,
            weight_unit: unit,
            status: FormStatus::Idle,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Day of the workout
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Backend workout, once started
    #[must_use]
    pub const fn workout(&self) -> Option<&Workout> {
        self.workout.as_ref()
    }

    /// Workout notes as currently edited
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Edit the workout notes locally; see [`Self::update_notes`]
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    /// Unit new entries are drafted in
    #[must_use]
    pub const fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    /// Result of the last backend operation
    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Loaded exercise catalog
    #[must_use]
    pub fn catalog(&self) -> &[Exercise] {
        &self.catalog
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    /// Fetch the exercise catalog
    ///
    /// # Errors
    ///
    /// Returns the backend error; the previous catalog is kept
    pub async fn load_catalog(&mut self, backend: &dyn JournalBackend) -> AppResult<usize> {
        let catalog = backend.list_exercises().await?;
        debug!(count = catalog.len(), "Exercise catalog loaded");
        self.catalog = catalog;
        Ok(self.catalog.len())
    }

    /// Catalog exercises whose name contains `fragment`, ignoring case
    #[must_use]
    pub fn find_exercises(&self, fragment: &str) -> Vec<&Exercise> {
        let needle = fragment.trim().to_lowercase();
        self.catalog
            .iter()
            .filter(|exercise| exercise.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve a name fragment to exactly one catalog exercise
    ///
    /// An exact (case-insensitive) name match wins over partial matches.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing matches and `InvalidInput`
    /// when several exercises match
    pub fn resolve_exercise(&self, fragment: &str) -> AppResult<&Exercise> {
        let needle = fragment.trim().to_lowercase();
        if let Some(exact) = self
            .catalog
            .iter()
            .find(|exercise| exercise.name.to_lowercase() == needle)
        {
            return Ok(exact);
        }

        match self.find_exercises(fragment).as_slice() {
            [] => Err(AppError::not_found(format!("Exercise matching '{fragment}'"))),
            [only] => Ok(*only),
            many => Err(AppError::invalid_input(format!(
                "'{fragment}' matches several exercises: {}",
                many.iter()
                    .map(|exercise| exercise.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    // ------------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------------

    /// Append an empty draft entry and return its index
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(ExerciseEntry::draft(self.weight_unit));
        self.entries.len() - 1
    }

    /// Turn entries stuck in [`EntryState::Saving`] into failures
    ///
    /// Every builder operation holds `&mut self` across its requests, so a
    /// `Saving` entry seen here belongs to a save whose future was dropped.
    /// Returns the number of entries recovered.
    pub fn recover_interrupted(&mut self) -> usize {
        let mut recovered = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.state == EntryState::Saving)
        {
            entry.state = EntryState::Failed {
                message: INTERRUPTED_SAVE.to_owned(),
            };
            recovered += 1;
        }
        if recovered > 0 {
            warn!(recovered, "Recovered exercise entries from an interrupted save");
        }
        recovered
    }

    /// Entry that may be edited; a failed entry returns to draft
    fn editable_entry(&mut self, index: usize) -> AppResult<&mut ExerciseEntry> {
        self.recover_interrupted();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::not_found(format!("Exercise entry {}", index + 1)))?;
        match entry.state {
            EntryState::Saved { .. } => Err(AppError::invalid_state(format!(
                "Exercise entry {} is already saved and cannot be edited",
                index + 1
            ))),
            EntryState::Saving => Err(AppError::invalid_state(format!(
                "Exercise entry {} is being saved",
                index + 1
            ))),
            EntryState::Failed { .. } => {
                entry.state = EntryState::Draft;
                Ok(entry)
            }
            EntryState::Draft => Ok(entry),
        }
    }

    /// Choose the catalog exercise for an entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the id is not in the loaded catalog,
    /// or `InvalidState` when the entry is saved
    pub fn select_exercise(&mut self, index: usize, exercise_id: i64) -> AppResult<()> {
        let name = self
            .catalog
            .iter()
            .find(|exercise| exercise.id == exercise_id)
            .map(|exercise| exercise.name.clone())
            .ok_or_else(|| AppError::not_found(format!("Exercise {exercise_id}")))?;
        let entry = self.editable_entry(index)?;
        entry.exercise_id = Some(exercise_id);
        entry.exercise_name = name;
        Ok(())
    }

    /// Choose an entry's exercise by name fragment
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_exercise`] and [`Self::select_exercise`]
    pub fn select_exercise_by_name(&mut self, index: usize, fragment: &str) -> AppResult<()> {
        let exercise_id = self.resolve_exercise(fragment)?.id;
        self.select_exercise(index, exercise_id)
    }

    /// Set an entry's load in the builder's current unit
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is missing or not editable
    pub fn set_weight(&mut self, index: usize, weight: f64) -> AppResult<()> {
        let unit = self.weight_unit;
        let entry = self.editable_entry(index)?;
        entry.weight = weight;
        entry.unit = unit;
        Ok(())
    }

    /// Set an entry's repetitions per set
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is missing or not editable
    pub fn set_reps(&mut self, index: usize, reps: u32) -> AppResult<()> {
        self.editable_entry(index)?.reps = reps;
        Ok(())
    }

    /// Set an entry's number of sets
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is missing or not editable
    pub fn set_sets(&mut self, index: usize, sets: u32) -> AppResult<()> {
        self.editable_entry(index)?.sets = sets;
        Ok(())
    }

    /// Set an entry's notes
    ///
    /// # Errors
    ///
    /// Returns an error when the entry is missing or not editable
    pub fn set_entry_notes(&mut self, index: usize, notes: impl Into<String>) -> AppResult<()> {
        self.editable_entry(index)?.notes = notes.into();
        Ok(())
    }

    /// Drop an unsaved entry
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` for saved entries; use [`Self::delete_saved_entry`]
    pub fn remove_entry(&mut self, index: usize) -> AppResult<ExerciseEntry> {
        self.editable_entry(index)?;
        Ok(self.entries.remove(index))
    }

    /// Delete a saved entry's backend line and drop it locally
    ///
    /// Every entry resumed from the same line goes with it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when the entry is not saved, or the backend error
    pub async fn delete_saved_entry(
        &mut self,
        backend: &dyn JournalBackend,
        index: usize,
    ) -> AppResult<()> {
        let Some(EntryState::Saved { workout_exercise_id }) =
            self.entries.get(index).map(|entry| entry.state.clone())
        else {
            return Err(AppError::invalid_state(format!(
                "Exercise entry {} is not saved",
                index + 1
            )));
        };

        backend.delete_workout_exercise(workout_exercise_id).await?;
        self.entries.retain(|entry| {
            entry.state
                != EntryState::Saved {
                    workout_exercise_id,
                }
        });
        if let Some(workout) = self.workout.as_mut() {
            workout.exercises.retain(|line| line.id != workout_exercise_id);
        }
        Ok(())
    }

    /// Switch the drafting unit and convert every unsaved entry into it
    ///
    /// Saved entries keep the unit they were recorded in. Returns the number
    /// of entries converted.
    pub fn rederive_units(&mut self, unit: WeightUnit) -> usize {
        self.recover_interrupted();
        self.weight_unit = unit;
        let mut converted = 0;
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.state.is_pending() && entry.unit != unit)
        {
            entry.weight = convert_weight(Some(entry.weight), entry.unit, unit);
            entry.unit = unit;
            converted += 1;
        }
        converted
    }

    // ------------------------------------------------------------------------
    // Backend operations
    // ------------------------------------------------------------------------

    fn workout_id(&self) -> AppResult<i64> {
        self.workout
            .as_ref()
            .map(|workout| workout.id)
            .ok_or_else(|| AppError::invalid_state("Please create a workout first"))
    }

    fn record<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        self.status = match &result {
            Ok(_) => FormStatus::Saved,
            Err(e) => FormStatus::Error(e.user_message()),
        };
        result
    }

    /// Create the workout on the backend with no exercises
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if already started, or the backend error
    pub async fn start(&mut self, backend: &dyn JournalBackend) -> AppResult<&Workout> {
        if self.workout.is_some() {
            return Err(AppError::invalid_state("A workout is already in progress"));
        }

        self.status = FormStatus::Submitting;
        let created = backend
            .create_workout(&WorkoutCreate {
                date: self.date,
                notes: non_blank(&self.notes),
                exercises: Vec::new(),
            })
            .await;
        let workout = self.record(created)?;
        info!(workout_id = workout.id, date = %workout.date, "Workout created");
        Ok(self.workout.insert(workout))
    }

    /// Submit every pending entry, one request each
    ///
    /// Incomplete entries are skipped. Successes become [`EntryState::Saved`];
    /// failures become [`EntryState::Failed`] and keep their values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` before [`Self::start`] and `InvalidInput` when
    /// there is nothing pending. Per-entry failures are reported in the
    /// outcome, not as an error.
    pub async fn save_pending(&mut self, backend: &dyn JournalBackend) -> AppResult<BatchOutcome> {
        let workout_id = self.workout_id()?;
        self.recover_interrupted();
        let pending: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.state.is_pending())
            .map(|(index, _)| index)
            .collect();
        if pending.is_empty() {
            let error = AppError::invalid_input("Please add at least one exercise");
            self.status = FormStatus::Error(error.user_message());
            return Err(error);
        }

        self.status = FormStatus::Submitting;
        let mut outcome = BatchOutcome::default();
        for index in pending {
            let payload = match self.entries[index].payload() {
                Ok(payload) => payload,
                Err(reason) => {
                    outcome.skipped.push((index, reason));
                    continue;
                }
            };

            self.entries[index].state = EntryState::Saving;
            match backend.add_workout_exercise(workout_id, &payload).await {
                Ok(line) => {
                    self.entries[index].state = EntryState::Saved {
                        workout_exercise_id: line.id,
                    };
                    if let Some(workout) = self.workout.as_mut() {
                        workout.exercises.push(line);
                    }
                    outcome.saved.push(index);
                }
                Err(e) => {
                    warn!(workout_id, entry = index + 1, "Failed to add exercise: {e}");
                    let message = e.user_message();
                    self.entries[index].state = EntryState::Failed {
                        message: message.clone(),
                    };
                    outcome.failed.push((index, message));
                }
            }
        }

        info!(workout_id, "{}", outcome.summary());
        self.status = if outcome.is_complete() {
            FormStatus::Saved
        } else {
            FormStatus::Error(outcome.summary())
        };
        Ok(outcome)
    }

    /// Send the locally edited notes
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` before [`Self::start`], or the backend error
    pub async fn update_notes(&mut self, backend: &dyn JournalBackend) -> AppResult<&Workout> {
        let workout_id = self.workout_id()?;
        let update = WorkoutUpdate {
            notes: non_blank(&self.notes),
            status: None,
        };
        let updated = backend.update_workout(workout_id, &update).await;
        let workout = self.record(updated)?;
        Ok(self.workout.insert(workout))
    }

    /// Mark the workout completed and reset the builder
    ///
    /// Unsaved drafts are discarded with a warning.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` before [`Self::start`], or the backend error
    /// (the builder is then left untouched)
    pub async fn complete(&mut self, backend: &dyn JournalBackend) -> AppResult<Workout> {
        let workout_id = self.workout_id()?;
        self.recover_interrupted();

        let completed = backend.complete_workout(workout_id).await;
        let workout = self.record(completed)?;
        let discarded = self.entries.iter().filter(|e| e.state.is_pending()).count();
        if discarded > 0 {
            warn!(workout_id, discarded, "Completed workout with unsaved exercise entries");
        }
        info!(workout_id, "Workout completed");
        self.reset();
        Ok(workout)
    }

    /// Delete the workout from the backend and reset the builder
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` before [`Self::start`], or the backend error
    pub async fn cancel(&mut self, backend: &dyn JournalBackend) -> AppResult<()> {
        let workout_id = self.workout_id()?;
        let deleted = backend.delete_workout(workout_id).await;
        self.record(deleted)?;
        info!(workout_id, "Workout cancelled and deleted");
        self.reset();
        Ok(())
    }

    /// Forget the current workout and all entries; the catalog is kept
    pub fn reset(&mut self) {
        self.workout = None;
        self.entries.clear();
        self.notes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: i64, name: &str) -> Exercise {
        Exercise {
            id,
            name: name.to_owned(),
            category: Some("strength".to_owned()),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn builder_with_catalog() -> WorkoutBuilder {
        let mut builder = WorkoutBuilder::new(
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            UnitPreferences::default(),
        );
        builder.catalog = vec![
            exercise(1, "Bench Press"),
            exercise(2, "Incline Bench Press"),
            exercise(3, "Deadlift"),
        ];
        builder
    }

    #[test]
    fn test_resolve_exercise_prefers_exact_match() {
        let builder = builder_with_catalog();
        assert_eq!(builder.resolve_exercise("bench press").unwrap().id, 1);
        assert_eq!(builder.resolve_exercise("DEAD").unwrap().id, 3);
        assert!(builder.resolve_exercise("bench").is_err());
        assert!(builder.resolve_exercise("squat").is_err());
    }

    #[test]
    fn test_payload_converts_to_pounds() {
        let mut builder = builder_with_catalog();
        builder.rederive_units(WeightUnit::Kilograms);
        let index = builder.add_entry();
        builder.select_exercise(index, 3).unwrap();
        builder.set_weight(index, 100.0).unwrap();
        builder.set_reps(index, 5).unwrap();

        let payload = builder.entries()[index].payload().unwrap();
        assert!((payload.sets_data[0].weight - 220.462).abs() < 1e-9);
        assert_eq!(payload.sets_data[0].sets, 1);
    }

    #[test]
    fn test_incomplete_entry_payload_reasons() {
        let mut builder = builder_with_catalog();
        let index = builder.add_entry();
        assert_eq!(
            builder.entries()[index].payload().unwrap_err(),
            "Select an exercise"
        );
        builder.select_exercise(index, 1).unwrap();
        builder.set_weight(index, 95.0).unwrap();
        assert_eq!(
            builder.entries()[index].payload().unwrap_err(),
            "Reps must be at least 1"
        );
    }
}
