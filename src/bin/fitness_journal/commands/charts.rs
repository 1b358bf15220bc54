// ABOUTME: Charts command for the fitness-journal CLI
// ABOUTME: Prints the dashboard summary followed by the weight trend and workout frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_journal::{
    context::SessionContext,
    errors::AppResult,
    units::{format_weight, weight_for_display},
    views::ChartsView,
};
use tracing::warn;

/// Print the summary and the last `days` of weight
pub async fn show(session: &SessionContext, days: u32) -> AppResult<()> {
    let client = session.client();
    let unit = session.preferences().body_weight;

    let summary = session.backend().dashboard_summary().await?;
    println!("{}", ChartsView::new(&summary, unit).render());

    // The summary is still useful when the trend endpoint fails
    match client.weight_trend(days).await {
        Ok(points) if !points.is_empty() => {
            println!("\nWeight trend ({days} days)");
            for point in points {
                println!(
                    "  {}  {}",
                    point.date,
                    format_weight(weight_for_display(Some(point.weight), unit), unit)
                );
            }
        }
        Ok(_) => println!("\nNo weight entries in the last {days} days"),
        Err(e) => warn!("Failed to load weight trend: {e}"),
    }

    match client.workout_frequency(days).await {
        Ok(periods) if !periods.is_empty() => {
            println!("\nWorkouts per period");
            for period in periods {
                println!("  {:<12} {}", period.period, period.count);
            }
        }
        Ok(_) => {}
        Err(e) => warn!("Failed to load workout frequency: {e}"),
    }
    Ok(())
}
