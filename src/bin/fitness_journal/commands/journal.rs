// ABOUTME: Journal commands for the fitness-journal CLI
// ABOUTME: Renders one day with navigation, or every day in a date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitness_journal::{
    context::SessionContext,
    errors::AppResult,
    views::{DateNavigator, JournalView},
};

/// Render one day, optionally shifted by a day
pub async fn day(
    session: &SessionContext,
    date: Option<NaiveDate>,
    previous: bool,
    next: bool,
) -> AppResult<()> {
    let mut navigator = date.map_or_else(DateNavigator::today, DateNavigator::at);
    if previous {
        navigator.previous_day();
    } else if next {
        navigator.next_day();
    }

    let backend = session.backend();
    let date = navigator.current();
    let entry = backend.daily_entry(date).await?;
    let activity = backend.daily_activity_by_date(date).await?;

    println!("{}", navigator.label());
    println!(
        "{}",
        JournalView::new(&entry, session.preferences())
            .with_activity(activity.as_ref())
            .render()
    );
    Ok(())
}

/// Render every day between `start` and `end`
pub async fn range(session: &SessionContext, start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    let entries = session.client().journal_range(start, end).await?;
    if entries.is_empty() {
        println!("Nothing logged between {start} and {end}");
        return Ok(());
    }

    for entry in &entries {
        println!("{}\n", JournalView::new(entry, session.preferences()).render());
    }
    Ok(())
}
