// ABOUTME: Body composition commands for the fitness-journal CLI
// ABOUTME: Add, edit, list, show, delete measurements and print the weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitness_journal::{
    context::SessionContext,
    errors::{AppError, AppResult},
    forms::BodyCompositionForm,
    units::{format_length, format_weight, length_for_display, weight_for_display},
};
use tracing::info;

use crate::helpers::{
    day_or_today,
    display::{display_body_composition, display_body_composition_table},
};

/// Values typed on the command line, in display units
pub struct MeasurementInput {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub waist: Option<f64>,
    pub neck: Option<f64>,
    pub notes: Option<String>,
}

impl MeasurementInput {
    fn apply(self, form: &mut BodyCompositionForm) {
        if self.weight.is_some() {
            form.weight = self.weight;
        }
        if self.height.is_some() {
            form.height = self.height;
        }
        if self.waist.is_some() {
            form.waist = self.waist;
        }
        if self.neck.is_some() {
            form.neck = self.neck;
        }
        if let Some(notes) = self.notes {
            form.notes = notes;
        }
    }
}

/// Record a new measurement
pub async fn add(
    session: &SessionContext,
    date: Option<NaiveDate>,
    input: MeasurementInput,
    is_male: bool,
) -> AppResult<()> {
    let mut form = BodyCompositionForm::new(day_or_today(date), session.preferences());
    form.is_male = is_male;
    input.apply(&mut form);
    submit(session, &mut form).await
}

/// Change a stored measurement
pub async fn edit(session: &SessionContext, id: i64, input: MeasurementInput) -> AppResult<()> {
    let stored = session.client().get_body_composition(id).await?;
    let mut form = BodyCompositionForm::edit(&stored, session.preferences());
    input.apply(&mut form);
    submit(session, &mut form).await
}

async fn submit(session: &SessionContext, form: &mut BodyCompositionForm) -> AppResult<()> {
    if let Some(preview) = form.preview() {
        println!("BMI:      {}", preview.bmi_label());
        println!("Body fat: {}", preview.body_fat_label());
    }
    let saved = form.submit(session.backend()).await?;
    info!(id = saved.id, date = %saved.date, "Measurement saved");
    display_body_composition(&saved, session.preferences());
    Ok(())
}

/// List measurements, newest first
pub async fn list(session: &SessionContext, limit: usize) -> AppResult<()> {
    let mut entries = session.client().list_body_compositions().await?;
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    display_body_composition_table(&entries, session.preferences());
    Ok(())
}

/// Show the most recent measurement
pub async fn latest(session: &SessionContext) -> AppResult<()> {
    let entry = session.client().latest_body_composition().await?;
    display_body_composition(&entry, session.preferences());
    Ok(())
}

/// Show one measurement by ID or by date
pub async fn show(
    session: &SessionContext,
    id: Option<i64>,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let client = session.client();
    let entry = match (id, date) {
        (Some(id), _) => client.get_body_composition(id).await?,
        (None, Some(date)) => client.body_composition_by_date(date).await?,
        (None, None) => {
            return Err(AppError::missing_field("Measurement ID or --date"));
        }
    };
    display_body_composition(&entry, session.preferences());
    Ok(())
}

/// Delete a measurement
pub async fn delete(session: &SessionContext, id: i64) -> AppResult<()> {
    session.client().delete_body_composition(id).await?;
    println!("Deleted measurement #{id}");
    Ok(())
}

/// Print weight and waist over the last `days`
pub async fn trends(session: &SessionContext, days: u32) -> AppResult<()> {
    let points = session.client().body_composition_trends(days).await?;
    if points.is_empty() {
        println!("No measurements in the last {days} days");
        return Ok(());
    }

    let preferences = session.preferences();
    println!("{:<12} {:<12} {:<12}", "Date", "Weight", "Waist");
    for point in points {
        println!(
            "{:<12} {:<12} {:<12}",
            point.date.to_string(),
            format_weight(
                weight_for_display(Some(point.weight), preferences.body_weight),
                preferences.body_weight
            ),
            format_length(
                length_for_display(point.waist_circumference, preferences.length),
                preferences.length
            )
        );
    }
    Ok(())
}
