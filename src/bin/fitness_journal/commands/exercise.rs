// ABOUTME: Exercise catalog commands for the fitness-journal CLI
// ABOUTME: List, create, delete catalog exercises and show per-exercise progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_journal::{
    context::SessionContext,
    errors::AppResult,
    forms::WorkoutBuilder,
    models::ExerciseCreate,
    units::{format_weight, weight_for_display},
};

use crate::helpers::{day_or_today, display::display_exercises};

/// List the catalog, optionally filtered by a name fragment
pub async fn list(session: &SessionContext, search: Option<&str>) -> AppResult<()> {
    let mut builder = WorkoutBuilder::new(day_or_today(None), session.preferences());
    builder.load_catalog(session.backend()).await?;
    let matches = builder.find_exercises(search.unwrap_or_default());
    display_exercises(&matches);
    Ok(())
}

/// Add a catalog exercise
pub async fn create(session: &SessionContext, name: String, category: String) -> AppResult<()> {
    let exercise = session
        .client()
        .create_exercise(&ExerciseCreate { name, category })
        .await?;
    println!("Created exercise #{} ({})", exercise.id, exercise.name);
    Ok(())
}

/// Remove a catalog exercise
pub async fn delete(session: &SessionContext, id: i64) -> AppResult<()> {
    session.client().delete_exercise(id).await?;
    println!("Deleted exercise #{id}");
    Ok(())
}

/// Print best load and reps per day
pub async fn progress(session: &SessionContext, id: i64, days: Option<u32>) -> AppResult<()> {
    let points = session.client().exercise_progress(id, days).await?;
    let Some(first) = points.first() else {
        println!("No history for exercise #{id}");
        return Ok(());
    };

    let unit = session.preferences().exercise_weight;
    println!("{}", first.exercise_name);
    println!("{:<12} {:<12} {:<10}", "Date", "Max weight", "Reps");
    for point in &points {
        println!(
            "{:<12} {:<12} {:<10}",
            point.date.to_string(),
            format_weight(weight_for_display(Some(point.max_weight), unit), unit),
            point.total_reps
        );
    }
    Ok(())
}
