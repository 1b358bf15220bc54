// ABOUTME: Charts page placeholder showing the dashboard summary
// ABOUTME: Current weight and 7/30-day change rendered in the body weight unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::DashboardSummary;
use crate::units::{format_weight, weight_for_display, WeightUnit};

/// Notice shown until real charts exist
pub const COMING_SOON: &str = "Charts coming soon";

/// Charts page
#[derive(Debug, Clone)]
pub struct ChartsView<'a> {
    summary: &'a DashboardSummary,
    unit: WeightUnit,
}

impl<'a> ChartsView<'a> {
    /// View over the dashboard summary in `unit`
    #[must_use]
    pub const fn new(summary: &'a DashboardSummary, unit: WeightUnit) -> Self {
        Self { summary, unit }
    }

    /// Render the notice and summary
    #[must_use]
    pub fn render(&self) -> String {
        [
            COMING_SOON.to_owned(),
            String::new(),
            format!("Measurements:   {}", self.summary.total_measurements),
            format!("Workouts:       {}", self.summary.total_workouts),
            format!(
                "Current weight: {}",
                format_weight(
                    weight_for_display(self.summary.current_weight, self.unit),
                    self.unit
                )
            ),
            format!("7-day change:   {}", self.change(self.summary.weight_change_7d)),
            format!("30-day change:  {}", self.change(self.summary.weight_change_30d)),
        ]
        .join("\n")
    }

    /// Signed change, e.g. `-1.2 kg`
    fn change(&self, pounds: Option<f64>) -> String {
        match weight_for_display(pounds, self.unit) {
            Some(delta) if delta > 0.0 => format!("+{}", format_weight(Some(delta), self.unit)),
            other => format_weight(other, self.unit),
        }
    }
}
