// ABOUTME: Integration tests for the workout builder against the mock backend
// ABOUTME: Partial batches, retry of failed entries, unit re-derivation, and lifecycle rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use fitness_journal::api::{JournalBackend, MockJournalBackend};
use fitness_journal::errors::ErrorCode;
use fitness_journal::forms::{EntryState, FormStatus, WorkoutBuilder, INTERRUPTED_SAVE};
use fitness_journal::models::{SetData, WorkoutExerciseCreate, WorkoutStatus};
use fitness_journal::preferences::UnitPreferences;
use fitness_journal::units::WeightUnit;

const BENCH: i64 = 1;
const SQUAT: i64 = 2;
const DEADLIFT: i64 = 3;

fn fill(builder: &mut WorkoutBuilder, exercise_id: i64, weight: f64, reps: u32, sets: u32) -> usize {
    let index = builder.add_entry();
    builder.select_exercise(index, exercise_id).unwrap();
    builder.set_weight(index, weight).unwrap();
    builder.set_reps(index, reps).unwrap();
    builder.set_sets(index, sets).unwrap();
    index
}

async fn started_builder(backend: &MockJournalBackend) -> WorkoutBuilder {
    let mut builder = WorkoutBuilder::new(common::test_date(), UnitPreferences::default());
    builder.load_catalog(backend).await.unwrap();
    builder.start(backend).await.unwrap();
    builder
}

#[tokio::test]
async fn test_save_requires_started_workout() {
    let backend = common::seeded_backend();
    let mut builder = WorkoutBuilder::new(common::test_date(), UnitPreferences::default());
    builder.load_catalog(&backend).await.unwrap();
    fill(&mut builder, BENCH, 135.0, 8, 3);

    let err = builder.save_pending(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidState);
    assert_eq!(err.message, "Please create a workout first");
}

#[tokio::test]
async fn test_save_requires_pending_entries() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;

    let err = builder.save_pending(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(builder.status().error_message(), Some("Please add at least one exercise"));
}

#[tokio::test]
async fn test_start_twice_is_rejected() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let err = builder.start(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidState);
    assert_eq!(backend.workouts().await.len(), 1);
}

#[tokio::test]
async fn test_partial_batch_keeps_failed_entries() {
    let backend = common::seeded_backend().with_failing_exercise(SQUAT);
    let mut builder = started_builder(&backend).await;
    let bench = fill(&mut builder, BENCH, 135.0, 8, 3);
    let squat = fill(&mut builder, SQUAT, 225.0, 5, 5);
    let deadlift = fill(&mut builder, DEADLIFT, 315.0, 3, 1);

    let outcome = builder.save_pending(&backend).await.unwrap();

    assert_eq!(outcome.saved, vec![bench, deadlift]);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, squat);
    assert!(!outcome.is_complete());
    assert_eq!(outcome.summary(), "2 saved, 1 failed, 0 skipped");

    let entries = builder.entries();
    assert!(entries[bench].state().is_saved());
    assert!(matches!(entries[squat].state(), EntryState::Failed { .. }));
    assert!(entries[deadlift].state().is_saved());
    assert!(matches!(builder.status(), FormStatus::Error(_)));

    // One request per entry, in order
    let adds: Vec<String> = backend
        .calls()
        .await
        .into_iter()
        .filter(|call| call.starts_with("add_workout_exercise"))
        .collect();
    assert_eq!(
        adds,
        vec![
            "add_workout_exercise:1",
            "add_workout_exercise:2",
            "add_workout_exercise:3"
        ]
    );
    assert_eq!(backend.workouts().await[0].exercises.len(), 2);
}

#[tokio::test]
async fn test_failed_entry_can_be_retried() {
    let backend = common::seeded_backend().with_failing_exercise(SQUAT);
    let mut builder = started_builder(&backend).await;
    fill(&mut builder, BENCH, 135.0, 8, 3);
    let squat = fill(&mut builder, SQUAT, 225.0, 5, 5);
    builder.save_pending(&backend).await.unwrap();

    backend.set_exercise_failing(SQUAT, false).await;
    builder.set_reps(squat, 4).unwrap();
    assert_eq!(builder.entries()[squat].state(), &EntryState::Draft);

    let outcome = builder.save_pending(&backend).await.unwrap();
    assert_eq!(outcome.saved, vec![squat]);
    assert!(outcome.is_complete());
    assert_eq!(builder.status(), &FormStatus::Saved);

    let lines = &backend.workouts().await[0].exercises;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].sets_data[0].reps, 4);
}

#[tokio::test]
async fn test_incomplete_entries_are_skipped() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let no_exercise = builder.add_entry();
    builder.set_weight(no_exercise, 50.0).unwrap();
    builder.set_reps(no_exercise, 10).unwrap();
    let no_weight = builder.add_entry();
    builder.select_exercise(no_weight, BENCH).unwrap();
    builder.set_reps(no_weight, 10).unwrap();
    let valid = fill(&mut builder, DEADLIFT, 200.0, 5, 1);

    let outcome = builder.save_pending(&backend).await.unwrap();
    assert_eq!(outcome.saved, vec![valid]);
    assert_eq!(
        outcome.skipped,
        vec![
            (no_exercise, "Select an exercise".to_owned()),
            (no_weight, "Weight must be greater than 0".to_owned())
        ]
    );
    assert_eq!(builder.entries()[no_exercise].state(), &EntryState::Draft);
}

#[tokio::test]
async fn test_saved_entries_reject_edits() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let bench = fill(&mut builder, BENCH, 135.0, 8, 3);
    builder.save_pending(&backend).await.unwrap();

    for err in [
        builder.set_weight(bench, 140.0).unwrap_err(),
        builder.set_reps(bench, 10).unwrap_err(),
        builder.select_exercise(bench, SQUAT).unwrap_err(),
        builder.remove_entry(bench).unwrap_err(),
    ] {
        assert_eq!(err.code, ErrorCode::InvalidState);
    }
    assert_eq!(builder.entries()[bench].weight(), 135.0);
}

#[tokio::test]
async fn test_rederive_changes_only_unsaved_entries() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let saved = fill(&mut builder, BENCH, 100.0, 5, 5);
    builder.save_pending(&backend).await.unwrap();
    let draft = fill(&mut builder, SQUAT, 220.462, 5, 5);

    assert_eq!(builder.rederive_units(WeightUnit::Kilograms), 1);

    assert_eq!(builder.weight_unit(), WeightUnit::Kilograms);
    let entries = builder.entries();
    assert_eq!(entries[saved].unit(), WeightUnit::Pounds);
    assert_eq!(entries[saved].weight(), 100.0);
    assert_eq!(entries[draft].unit(), WeightUnit::Kilograms);
    assert!((entries[draft].weight() - 100.0).abs() < 1e-3);

    // Re-deriving into the same unit is a no-op
    assert_eq!(builder.rederive_units(WeightUnit::Kilograms), 0);
}

#[tokio::test]
async fn test_weights_are_sent_in_pounds() {
    let backend = common::seeded_backend();
    let mut builder = WorkoutBuilder::new(common::test_date(), common::metric_preferences());
    builder.load_catalog(&backend).await.unwrap();
    builder.start(&backend).await.unwrap();
    fill(&mut builder, BENCH, 100.0, 5, 5);
    builder.save_pending(&backend).await.unwrap();

    let sent = backend.workouts().await[0].exercises[0].sets_data[0];
    assert!((sent.weight - 220.462).abs() < 1e-6);
}

#[tokio::test]
async fn test_complete_resets_builder() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    fill(&mut builder, BENCH, 135.0, 8, 3);
    builder.save_pending(&backend).await.unwrap();
    fill(&mut builder, SQUAT, 0.0, 0, 1);

    let completed = builder.complete(&backend).await.unwrap();
    assert_eq!(completed.status, Some(WorkoutStatus::Completed));
    assert!(builder.workout().is_none());
    assert!(builder.entries().is_empty());
    assert!(!builder.catalog().is_empty());
}

#[tokio::test]
async fn test_cancel_deletes_workout() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    fill(&mut builder, BENCH, 135.0, 8, 3);
    builder.save_pending(&backend).await.unwrap();

    builder.cancel(&backend).await.unwrap();
    assert!(backend.workouts().await.is_empty());
    assert!(builder.workout().is_none());
}

#[tokio::test]
async fn test_backend_outage_keeps_builder_state() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    fill(&mut builder, BENCH, 135.0, 8, 3);
    backend.set_unavailable(true).await;

    let outcome = builder.save_pending(&backend).await.unwrap();
    assert_eq!(outcome.failed.len(), 1);
    let err = builder.complete(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(builder.workout().is_some());
    assert_eq!(builder.entries().len(), 1);
}

#[tokio::test]
async fn test_resume_and_delete_saved_entry() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    fill(&mut builder, BENCH, 135.0, 8, 3);
    fill(&mut builder, SQUAT, 225.0, 5, 5);
    builder.save_pending(&backend).await.unwrap();
    let workout_id = builder.workout().unwrap().id;

    let workout = backend.workouts().await.remove(0);
    let mut resumed = WorkoutBuilder::resume(workout, UnitPreferences::default());
    assert_eq!(resumed.workout().unwrap().id, workout_id);
    assert!(resumed.entries().iter().all(|entry| entry.state().is_saved()));

    resumed.delete_saved_entry(&backend, 0).await.unwrap();
    assert_eq!(resumed.entries().len(), 1);
    assert_eq!(backend.workouts().await[0].exercises.len(), 1);
    assert_eq!(resumed.entries()[0].exercise_name(), "Back Squat");
}

#[tokio::test]
async fn test_deleting_resumed_line_drops_every_set_group() {
    let backend = common::seeded_backend();
    let builder = started_builder(&backend).await;
    let workout_id = builder.workout().unwrap().id;

    let bench = backend
        .add_workout_exercise(
            workout_id,
            &WorkoutExerciseCreate {
                exercise_id: BENCH,
                sets_data: vec![
                    SetData { weight: 135.0, reps: 8, sets: 3 },
                    SetData { weight: 155.0, reps: 5, sets: 2 },
                ],
                notes: None,
            },
        )
        .await
        .unwrap();
    backend
        .add_workout_exercise(
            workout_id,
            &WorkoutExerciseCreate {
                exercise_id: SQUAT,
                sets_data: vec![SetData { weight: 225.0, reps: 5, sets: 5 }],
                notes: None,
            },
        )
        .await
        .unwrap();

    let workout = backend.get_workout(workout_id).await.unwrap();
    let mut resumed = WorkoutBuilder::resume(workout, UnitPreferences::default());
    assert_eq!(resumed.entries().len(), 3);
    assert_eq!(
        resumed.entries()[1].state(),
        &EntryState::Saved { workout_exercise_id: bench.id }
    );

    resumed.delete_saved_entry(&backend, 0).await.unwrap();
    assert_eq!(resumed.entries().len(), 1);
    assert_eq!(resumed.entries()[0].exercise_name(), "Back Squat");
    assert_eq!(resumed.workout().unwrap().exercises.len(), 1);
    assert_eq!(backend.get_workout(workout_id).await.unwrap().exercises.len(), 1);
}

#[tokio::test]
async fn test_dropped_save_leaves_entries_recoverable() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    fill(&mut builder, BENCH, 135.0, 8, 3);
    let stuck = fill(&mut builder, SQUAT, 225.0, 5, 5);
    backend.set_exercise_stalled(SQUAT, true).await;

    let dropped = tokio::time::timeout(Duration::from_millis(50), builder.save_pending(&backend)).await;
    assert!(dropped.is_err());
    assert!(builder.entries()[0].state().is_saved());
    assert_eq!(builder.entries()[stuck].state(), &EntryState::Saving);

    assert_eq!(builder.recover_interrupted(), 1);
    assert_eq!(
        builder.entries()[stuck].state(),
        &EntryState::Failed { message: INTERRUPTED_SAVE.to_owned() }
    );
    assert!(builder.entries()[stuck].state().is_pending());

    builder.set_reps(stuck, 6).unwrap();
    backend.set_exercise_stalled(SQUAT, false).await;
    let outcome = builder.save_pending(&backend).await.unwrap();
    assert_eq!(outcome.saved, vec![stuck]);
    assert!(outcome.is_complete());
}

#[tokio::test]
async fn test_complete_after_dropped_save() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let stuck = fill(&mut builder, DEADLIFT, 315.0, 3, 1);
    backend.set_exercise_stalled(DEADLIFT, true).await;

    let dropped = tokio::time::timeout(Duration::from_millis(50), builder.save_pending(&backend)).await;
    assert!(dropped.is_err());
    assert_eq!(builder.entries()[stuck].state(), &EntryState::Saving);

    let workout = builder.complete(&backend).await.unwrap();
    assert_eq!(workout.status, Some(WorkoutStatus::Completed));
    assert!(builder.workout().is_none());
}

#[tokio::test]
async fn test_dropped_save_entry_can_be_removed() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let stuck = fill(&mut builder, BENCH, 135.0, 8, 3);
    backend.set_exercise_stalled(BENCH, true).await;

    let dropped = tokio::time::timeout(Duration::from_millis(50), builder.save_pending(&backend)).await;
    assert!(dropped.is_err());

    let removed = builder.remove_entry(stuck).unwrap();
    assert_eq!(removed.exercise_id(), Some(BENCH));
    assert!(builder.entries().is_empty());
}

#[tokio::test]
async fn test_select_exercise_by_name_fragment() {
    let backend = common::seeded_backend();
    let mut builder = started_builder(&backend).await;
    let index = builder.add_entry();

    builder.select_exercise_by_name(index, "dead").unwrap();
    assert_eq!(builder.entries()[index].exercise_id(), Some(DEADLIFT));

    let err = builder.select_exercise_by_name(index, "press").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    let err = builder.select_exercise_by_name(index, "curl").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
