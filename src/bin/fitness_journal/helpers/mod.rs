// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for the fitness-journal CLI
// ABOUTME: Argument parsers and display formatting utilities

pub mod display;

use chrono::{Local, NaiveDate};
use fitness_journal::views::navigation::parse_date;

/// clap value parser for `YYYY-MM-DD`, `today`, and `yesterday`
pub fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| e.user_message())
}

/// The given day, or today
pub fn day_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
