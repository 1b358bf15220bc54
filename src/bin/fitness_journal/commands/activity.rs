// ABOUTME: Daily activity commands for the fitness-journal CLI
// ABOUTME: Show, set, and delete a day's steps, walk, mobility, and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitness_journal::{
    context::SessionContext,
    errors::{AppError, AppResult},
    forms::{ActivityField, DailyActivityForm},
    views::journal::activity_lines,
};
use tracing::debug;

use crate::helpers::day_or_today;

/// Values typed on the command line; `None` leaves the stored value alone
pub struct ActivityInput {
    pub steps: Option<u32>,
    pub walk: Option<bool>,
    pub mobility: Option<bool>,
    pub notes: Option<String>,
}

/// Print a day's activity
pub async fn show(session: &SessionContext, date: Option<NaiveDate>) -> AppResult<()> {
    let date = day_or_today(date);
    let form = DailyActivityForm::load(session.backend(), date).await?;
    println!("Activity for {date}");
    match form.current() {
        Some(activity) => {
            for line in activity_lines(activity) {
                println!("{line}");
            }
        }
        None => println!("  Nothing recorded"),
    }
    Ok(())
}

/// Record activity values, saving only the fields that changed
pub async fn set(
    session: &SessionContext,
    date: Option<NaiveDate>,
    input: ActivityInput,
) -> AppResult<()> {
    let backend = session.backend();
    let mut form = DailyActivityForm::load(backend, day_or_today(date)).await?;
    if input.steps.is_some() {
        form.set_steps(input.steps);
    }
    if input.walk.is_some() {
        form.set_walked(input.walk);
    }
    if input.mobility.is_some() {
        form.set_mobility(input.mobility);
    }
    if let Some(notes) = input.notes {
        form.set_notes(notes);
    }

    let dirty = form.dirty_fields();
    if dirty.is_empty() {
        println!("No changes to save");
        return Ok(());
    }
    debug!(?dirty, "Saving daily activity");

    let saved = if dirty == ActivityField::STEPS {
        form.save_steps(backend).await?
    } else if dirty == ActivityField::WALK {
        form.save_walk(backend).await?
    } else if dirty == ActivityField::MOBILITY {
        form.save_mobility(backend).await?
    } else {
        form.save_all(backend).await?
    };

    println!("Activity for {}", saved.date);
    for line in activity_lines(saved) {
        println!("{line}");
    }
    Ok(())
}

/// Delete a day's activity
pub async fn delete(session: &SessionContext, date: Option<NaiveDate>) -> AppResult<()> {
    let date = day_or_today(date);
    let client = session.client();
    let activity = client
        .daily_activity_by_date(date)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Activity for {date}")))?;
    client.delete_daily_activity(activity.id).await?;
    println!("Deleted activity for {date}");
    Ok(())
}
