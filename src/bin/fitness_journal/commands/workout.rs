// ABOUTME: Workout commands for the fitness-journal CLI
// ABOUTME: Drives the workout builder to start, extend, annotate, complete, cancel, and log workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitness_journal::{
    context::SessionContext,
    errors::{AppError, AppResult},
    forms::{BatchOutcome, WorkoutBuilder},
};
use tracing::{info, warn};

use crate::helpers::{
    day_or_today,
    display::{display_batch_outcome, display_workout},
};

/// One exercise to add, weight in the exercise unit
pub struct ExerciseLine {
    pub name: String,
    pub weight: f64,
    pub reps: u32,
    pub sets: u32,
    pub notes: Option<String>,
}

impl ExerciseLine {
    /// Parse `NAME:WEIGHT:REPS[:SETS]`
    fn parse(raw: &str) -> AppResult<Self> {
        let invalid = || {
            AppError::invalid_input(format!(
                "Invalid exercise '{raw}', expected NAME:WEIGHT:REPS[:SETS]"
            ))
        };
        let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
        let (name, weight, reps, sets) = match parts.as_slice() {
            [name, weight, reps] => (*name, *weight, *reps, "1"),
            [name, weight, reps, sets] => (*name, *weight, *reps, *sets),
            _ => return Err(invalid()),
        };
        Ok(Self {
            name: name.to_owned(),
            weight: weight.parse().map_err(|_| invalid())?,
            reps: reps.parse().map_err(|_| invalid())?,
            sets: sets.parse().map_err(|_| invalid())?,
            notes: None,
        })
    }

    fn fill(self, builder: &mut WorkoutBuilder) -> AppResult<()> {
        let index = builder.add_entry();
        let filled = builder
            .select_exercise_by_name(index, &self.name)
            .and_then(|()| builder.set_weight(index, self.weight))
            .and_then(|()| builder.set_reps(index, self.reps))
            .and_then(|()| builder.set_sets(index, self.sets))
            .and_then(|()| builder.set_entry_notes(index, self.notes.unwrap_or_default()));
        if filled.is_err() {
            builder.remove_entry(index)?;
        }
        filled
    }
}

async fn resume(session: &SessionContext, workout_id: i64) -> AppResult<WorkoutBuilder> {
    let workout = session.backend().get_workout(workout_id).await?;
    Ok(WorkoutBuilder::resume(workout, session.preferences()))
}

/// Create an empty workout
pub async fn start(
    session: &SessionContext,
    date: Option<NaiveDate>,
    notes: Option<String>,
) -> AppResult<()> {
    let mut builder = WorkoutBuilder::new(day_or_today(date), session.preferences());
    builder.set_notes(notes.unwrap_or_default());
    let workout = builder.start(session.backend()).await?;
    println!("Started workout #{} on {}", workout.id, workout.date);
    Ok(())
}

/// Add one exercise to an existing workout
pub async fn add(session: &SessionContext, workout_id: i64, line: ExerciseLine) -> AppResult<()> {
    let backend = session.backend();
    let mut builder = resume(session, workout_id).await?;
    builder.load_catalog(backend).await?;
    line.fill(&mut builder)?;

    let outcome = builder.save_pending(backend).await?;
    display_batch_outcome(&builder, &outcome);
    match outcome.failed.first() {
        Some((_, message)) => Err(AppError::invalid_state(message.clone())),
        None => Ok(()),
    }
}

/// Replace a workout's notes
pub async fn notes(session: &SessionContext, workout_id: i64, text: String) -> AppResult<()> {
    let mut builder = resume(session, workout_id).await?;
    builder.set_notes(text);
    let workout = builder.update_notes(session.backend()).await?;
    display_workout(workout, session.preferences());
    Ok(())
}

/// Mark a workout completed
pub async fn complete(session: &SessionContext, workout_id: i64) -> AppResult<()> {
    let mut builder = resume(session, workout_id).await?;
    let workout = builder.complete(session.backend()).await?;
    display_workout(&workout, session.preferences());
    Ok(())
}

/// Delete a workout
pub async fn cancel(session: &SessionContext, workout_id: i64) -> AppResult<()> {
    let mut builder = resume(session, workout_id).await?;
    builder.cancel(session.backend()).await?;
    println!("Cancelled workout #{workout_id}");
    Ok(())
}

/// List workouts, optionally for one day
pub async fn list(session: &SessionContext, date: Option<NaiveDate>) -> AppResult<()> {
    let client = session.client();
    let mut workouts = match date {
        Some(date) => client.workouts_by_date(date).await?,
        None => client.list_workouts().await?,
    };
    if workouts.is_empty() {
        println!("No workouts found");
        return Ok(());
    }

    workouts.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    for workout in &workouts {
        display_workout(workout, session.preferences());
    }
    Ok(())
}

/// Show one workout
pub async fn show(session: &SessionContext, workout_id: i64) -> AppResult<()> {
    let workout = session.backend().get_workout(workout_id).await?;
    display_workout(&workout, session.preferences());
    Ok(())
}

/// Remove one exercise line
pub async fn delete_exercise(session: &SessionContext, workout_exercise_id: i64) -> AppResult<()> {
    session
        .backend()
        .delete_workout_exercise(workout_exercise_id)
        .await?;
    println!("Deleted workout exercise #{workout_exercise_id}");
    Ok(())
}

/// Create a workout, add every exercise, and optionally complete it
///
/// Exercise names are resolved before anything is created, so a typo never
/// leaves an empty workout behind.
pub async fn log(
    session: &SessionContext,
    date: Option<NaiveDate>,
    notes: Option<String>,
    exercises: &[String],
    complete: bool,
) -> AppResult<()> {
    let backend = session.backend();
    let mut builder = WorkoutBuilder::new(day_or_today(date), session.preferences());
    builder.set_notes(notes.unwrap_or_default());
    builder.load_catalog(backend).await?;
    for raw in exercises {
        ExerciseLine::parse(raw)?.fill(&mut builder)?;
    }

    let workout_id = builder.start(backend).await?.id;
    let outcome = builder.save_pending(backend).await?;
    display_batch_outcome(&builder, &outcome);

    if !outcome.is_complete() {
        warn!(workout_id, "Workout left in progress with unsaved exercises");
        println!("\nRetry the missing exercises with `workout add {workout_id}`");
        return Err(incomplete_log_error(workout_id, &outcome));
    }

    if complete {
        let workout = builder.complete(backend).await?;
        info!(workout_id, "Workout logged and completed");
        display_workout(&workout, session.preferences());
    } else {
        println!("\nWorkout #{workout_id} saved");
    }
    Ok(())
}

/// Error returned when `workout log` could not save every exercise
fn incomplete_log_error(workout_id: i64, outcome: &BatchOutcome) -> AppError {
    AppError::invalid_state(format!(
        "Workout #{workout_id} left in progress ({})",
        outcome.summary()
    ))
    .with_resource_id(workout_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_journal::errors::ErrorCode;

    #[test]
    fn test_parse_exercise_line() {
        let line = ExerciseLine::parse("Bench Press:80:8:3").unwrap();
        assert_eq!(line.name, "Bench Press");
        assert!((line.weight - 80.0).abs() < f64::EPSILON);
        assert_eq!((line.reps, line.sets), (8, 3));

        let line = ExerciseLine::parse("squat:100.5:5").unwrap();
        assert_eq!(line.sets, 1);

        assert!(ExerciseLine::parse("squat:heavy:5").is_err());
        assert!(ExerciseLine::parse("squat").is_err());
    }

    #[test]
    fn test_incomplete_log_is_an_error() {
        let outcome = BatchOutcome {
            saved: vec![0],
            failed: vec![(1, "Internal Server Error".to_owned())],
            skipped: Vec::new(),
        };
        let err = incomplete_log_error(42, &outcome);
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert_eq!(err.context.resource_id.as_deref(), Some("42"));
        assert!(err.message.contains("1 saved, 1 failed, 0 skipped"));
    }
}
