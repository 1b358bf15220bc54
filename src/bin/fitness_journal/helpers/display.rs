// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for the fitness-journal CLI
// ABOUTME: Tables and summaries for measurements, workouts, exercises, and batch results

use fitness_journal::{
    forms::{BatchOutcome, EntryState, WorkoutBuilder},
    metrics::{DerivedMetrics, Measurement},
    models::{BodyComposition, Exercise, Workout},
    preferences::UnitPreferences,
    units::{format_weight, weight_for_display},
    views::journal::{body_composition_lines, workout_lines},
};

/// Print a measurement with derived metrics
pub fn display_body_composition(entry: &BodyComposition, preferences: UnitPreferences) {
    println!("\nMeasurement #{} on {}", entry.id, entry.date);
    println!("{}", "=".repeat(40));
    for line in body_composition_lines(entry, preferences) {
        println!("{line}");
    }
}

/// Print measurements as a table
pub fn display_body_composition_table(entries: &[BodyComposition], preferences: UnitPreferences) {
    if entries.is_empty() {
        println!("No measurements recorded");
        return;
    }

    println!(
        "{:<6} {:<12} {:<12} {:<24} {:<20}",
        "ID", "Date", "Weight", "BMI", "Body fat"
    );
    println!("{}", "-".repeat(78));
    for entry in entries {
        let metrics = DerivedMetrics::from_measurement(&Measurement::from(entry));
        println!(
            "{:<6} {:<12} {:<12} {:<24} {:<20}",
            entry.id,
            entry.date.to_string(),
            format_weight(
                weight_for_display(Some(entry.weight_pounds), preferences.body_weight),
                preferences.body_weight
            ),
            metrics.bmi_label(),
            metrics.body_fat_label()
        );
    }
}

/// Print a workout with its exercises
pub fn display_workout(workout: &Workout, preferences: UnitPreferences) {
    println!("\n{}", workout.date);
    for line in workout_lines(workout, preferences) {
        println!("{line}");
    }
}

/// Print the catalog
pub fn display_exercises(exercises: &[&Exercise]) {
    if exercises.is_empty() {
        println!("No exercises found");
        return;
    }

    println!("{:<6} {:<30} {:<15}", "ID", "Name", "Category");
    println!("{}", "-".repeat(51));
    for exercise in exercises {
        println!(
            "{:<6} {:<30} {:<15}",
            exercise.id,
            exercise.name,
            exercise.category.as_deref().unwrap_or("-")
        );
    }
}

/// Print the result of saving a batch of exercise entries
pub fn display_batch_outcome(builder: &WorkoutBuilder, outcome: &BatchOutcome) {
    println!("\n{}", outcome.summary());
    for (index, entry) in builder.entries().iter().enumerate() {
        let name = if entry.exercise_name().is_empty() {
            "(no exercise)"
        } else {
            entry.exercise_name()
        };
        let state = match entry.state() {
            EntryState::Draft => "draft".to_owned(),
            EntryState::Saving => "saving".to_owned(),
            EntryState::Saved {
                workout_exercise_id,
            } => format!("saved as #{workout_exercise_id}"),
            EntryState::Failed { message } => format!("failed: {message}"),
        };
        println!("  {}. {name}: {state}", index + 1);
    }
    for (index, reason) in &outcome.skipped {
        println!("  {}. skipped: {reason}", index + 1);
    }
}
