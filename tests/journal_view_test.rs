// ABOUTME: Integration tests for the journal and charts views
// ABOUTME: Display-unit rendering, recomputed metrics, the female body fat note, and empty days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitness_journal::api::{JournalBackend, MockJournalBackend};
use fitness_journal::models::{
    DailyActivity, DailyEntry, SetData, Workout, WorkoutExercise, WorkoutStatus,
};
use fitness_journal::preferences::UnitPreferences;
use fitness_journal::views::{ChartsView, JournalView};
use fitness_journal::units::WeightUnit;

fn workout() -> Workout {
    Workout {
        id: 7,
        date: common::test_date(),
        notes: Some("push day".to_owned()),
        status: Some(WorkoutStatus::Completed),
        created_at: String::new(),
        updated_at: String::new(),
        exercises: vec![WorkoutExercise {
            id: 70,
            workout_id: 7,
            exercise_id: 1,
            exercise_name: "Bench Press".to_owned(),
            sets_data: vec![SetData {
                weight: 220.462,
                reps: 5,
                sets: 3,
            }],
            notes: None,
            created_at: String::new(),
            updated_at: String::new(),
        }],
    }
}

fn activity() -> DailyActivity {
    DailyActivity {
        id: 3,
        date: common::test_date(),
        steps: Some(10_250),
        walk_yes_no: Some(true),
        mobility_yes_no: None,
        notes: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn test_renders_in_display_units() {
    let entry = DailyEntry {
        date: common::test_date(),
        body_composition: Some(common::sample_measurement(true)),
        workouts: vec![workout()],
    };
    let activity = activity();
    let text = JournalView::new(&entry, common::metric_preferences())
        .with_activity(Some(&activity))
        .render();

    assert!(text.contains("Journal for 2025-05-05"));
    assert!(text.contains("Weight:   69.9 kg"));
    assert!(text.contains("Height:   172.7 cm"));
    assert!(text.contains("BMI:      23.4 (Normal weight)"));
    assert!(text.contains("Workout #7 (completed)"));
    assert!(text.contains("Bench Press: 3 x 5 @ 100.0 kg"));
    assert!(text.contains("Steps:    10250"));
    assert!(text.contains("Mobility: Not recorded"));
}

#[test]
fn test_metrics_recomputed_from_inputs() {
    let mut measurement = common::sample_measurement(true);
    // Stale values from the backend must not be shown
    measurement.bmi = Some(99.0);
    measurement.body_fat_percentage = Some(1.0);
    let entry = DailyEntry {
        date: common::test_date(),
        body_composition: Some(measurement),
        workouts: Vec::new(),
    };

    let text = JournalView::new(&entry, UnitPreferences::default()).render();
    assert!(text.contains("Weight:   154.0 lbs"));
    assert!(text.contains("BMI:      23.4"));
    assert!(!text.contains("99.0"));
    assert!(!text.contains("Body fat: 1.0%"));
}

#[test]
fn test_female_entry_explains_missing_body_fat() {
    let entry = DailyEntry {
        date: common::test_date(),
        body_composition: Some(common::sample_measurement(false)),
        workouts: Vec::new(),
    };
    let text = JournalView::new(&entry, UnitPreferences::default()).render();
    assert!(text.contains("Body fat: Not available"));
    assert!(text.contains("hip measurement"));
}

#[test]
fn test_empty_day() {
    let entry = DailyEntry {
        date: common::test_date(),
        body_composition: None,
        workouts: Vec::new(),
    };
    let view = JournalView::new(&entry, UnitPreferences::default());
    assert!(view.is_empty());
    assert!(view.render().contains("Nothing logged for this day."));
}

#[tokio::test]
async fn test_day_from_backend() {
    let backend = common::seeded_backend().with_body_composition(common::sample_measurement(true));
    let entry = backend.daily_entry(common::test_date()).await.unwrap();
    let text = JournalView::new(&entry, UnitPreferences::default()).render();
    assert!(text.contains("Workouts (0)"));
    assert!(text.contains("Neck:     15.0 in"));
}

#[tokio::test]
async fn test_charts_summary_in_body_weight_unit() {
    let backend = MockJournalBackend::new().with_body_composition(common::sample_measurement(true));
    let summary = backend.dashboard_summary().await.unwrap();
    let text = ChartsView::new(&summary, WeightUnit::Kilograms).render();
    assert!(text.contains("Charts coming soon"));
    assert!(text.contains("Measurements:   1"));
    assert!(text.contains("Current weight: 69.9 kg"));
}
