// ABOUTME: Text rendering of one journal day in the user's display units
// ABOUTME: Body composition with recomputed metrics, workouts with sets, and daily activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::labels::NOT_RECORDED;
use crate::metrics::{DerivedMetrics, Measurement};
use crate::models::{
    BodyComposition, DailyActivity, DailyEntry, SetData, Workout, WorkoutExercise, WorkoutStatus,
};
use crate::preferences::UnitPreferences;
use crate::units::{format_length, format_weight, length_for_display, weight_for_display};

/// One rendered day
#[derive(Debug, Clone, Copy)]
pub struct JournalView<'a> {
    entry: &'a DailyEntry,
    activity: Option<&'a DailyActivity>,
    preferences: UnitPreferences,
}

impl<'a> JournalView<'a> {
    /// View over a day's entry
    #[must_use]
    pub const fn new(entry: &'a DailyEntry, preferences: UnitPreferences) -> Self {
        Self {
            entry,
            activity: None,
            preferences,
        }
    }

    /// Include the day's activity
    #[must_use]
    pub const fn with_activity(mut self, activity: Option<&'a DailyActivity>) -> Self {
        self.activity = activity;
        self
    }

    /// Whether nothing was logged that day
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.body_composition.is_none()
            && self.entry.workouts.is_empty()
            && self.activity.is_none()
    }

    /// Render the whole day
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![format!("Journal for {}", self.entry.date)];

        if self.is_empty() {
            lines.push("Nothing logged for this day.".to_owned());
            return lines.join("\n");
        }

        lines.push(String::new());
        lines.push("Body composition".to_owned());
        match &self.entry.body_composition {
            Some(entry) => lines.extend(body_composition_lines(entry, self.preferences)),
            None => lines.push(format!("  {NOT_RECORDED}")),
        }

        lines.push(String::new());
        lines.push(format!("Workouts ({})", self.entry.workouts.len()));
        if self.entry.workouts.is_empty() {
            lines.push("  No workouts".to_owned());
        }
        for workout in &self.entry.workouts {
            lines.extend(workout_lines(workout, self.preferences));
        }

        lines.push(String::new());
        lines.push("Activity".to_owned());
        match self.activity {
            Some(activity) => lines.extend(activity_lines(activity)),
            None => lines.push(format!("  {NOT_RECORDED}")),
        }

        lines.join("\n")
    }
}

/// Measurement lines with BMI and body fat recomputed from canonical inputs
#[must_use]
pub fn body_composition_lines(entry: &BodyComposition, preferences: UnitPreferences) -> Vec<String> {
    let length = |inches: Option<f64>| {
        format_length(length_for_display(inches, preferences.length), preferences.length)
    };
    let metrics = DerivedMetrics::from_measurement(&Measurement::from(entry));

    let mut lines = vec![
        format!(
            "  Weight:   {}",
            format_weight(
                weight_for_display(Some(entry.weight_pounds), preferences.body_weight),
                preferences.body_weight
            )
        ),
        format!("  Height:   {}", length(entry.height_inches)),
        format!("  Waist:    {}", length(entry.waist_inches)),
        format!("  Neck:     {}", length(entry.neck_inches)),
        format!("  BMI:      {}", metrics.bmi_label()),
        format!("  Body fat: {}", metrics.body_fat_label()),
    ];
    if let Some(reason) = metrics.body_fat_unavailable_reason() {
        lines.push(format!("            ({reason})"));
    }
    if let Some(notes) = &entry.notes {
        lines.push(format!("  Notes:    {notes}"));
    }
    lines
}

/// Workout heading followed by one line per exercise
#[must_use]
pub fn workout_lines(workout: &Workout, preferences: UnitPreferences) -> Vec<String> {
    let status = match workout.status.unwrap_or_default() {
        WorkoutStatus::InProgress => "in progress",
        WorkoutStatus::Completed => "completed",
        WorkoutStatus::Cancelled => "cancelled",
    };
    let mut lines = vec![format!("  Workout #{} ({status})", workout.id)];
    if let Some(notes) = &workout.notes {
        lines.push(format!("    Notes: {notes}"));
    }
    if workout.exercises.is_empty() {
        lines.push("    No exercises".to_owned());
    }
    for exercise in &workout.exercises {
        lines.push(exercise_line(exercise, preferences));
    }
    lines
}

fn exercise_line(exercise: &WorkoutExercise, preferences: UnitPreferences) -> String {
    let sets = exercise
        .sets_data
        .iter()
        .map(|set| set_label(set, preferences))
        .collect::<Vec<_>>()
        .join(", ");
    let mut line = format!("    - {}: {sets}", exercise.exercise_name);
    if let Some(notes) = &exercise.notes {
        line.push_str(&format!(" ({notes})"));
    }
    line
}

/// `3 x 10 @ 45.4 kg` in the exercise weight unit
#[must_use]
pub fn set_label(set: &SetData, preferences: UnitPreferences) -> String {
    let unit = preferences.exercise_weight;
    format!(
        "{} x {} @ {}",
        set.sets,
        set.reps,
        format_weight(weight_for_display(Some(set.weight), unit), unit)
    )
}

/// Steps, habits, and notes
#[must_use]
pub fn activity_lines(activity: &DailyActivity) -> Vec<String> {
    let yes_no = |flag: Option<bool>| match flag {
        Some(true) => "Yes",
        Some(false) => "No",
        None => NOT_RECORDED,
    };
    let mut lines = vec![
        format!(
            "  Steps:    {}",
            activity
                .steps
                .map_or_else(|| NOT_RECORDED.to_owned(), |steps| steps.to_string())
        ),
        format!("  Walk:     {}", yes_no(activity.walk_yes_no)),
        format!("  Mobility: {}", yes_no(activity.mobility_yes_no)),
    ];
    if let Some(notes) = &activity.notes {
        lines.push(format!("  Notes:    {notes}"));
    }
    lines
}
