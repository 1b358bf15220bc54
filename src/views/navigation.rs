// ABOUTME: Date navigation for the journal view
// ABOUTME: Tracks the selected day with previous/next/today moves and ISO date parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{Days, Local, NaiveDate};

use crate::errors::{AppError, AppResult};
use crate::models::journal_date;

/// Selected day of the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNavigator {
    current: NaiveDate,
    today: NaiveDate,
}

impl DateNavigator {
    /// Start on today's local date
    #[must_use]
    pub fn today() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Start on `today`, an explicit reference day
    #[must_use]
    pub const fn with_today(today: NaiveDate) -> Self {
        Self {
            current: today,
            today,
        }
    }

    /// Start on `date`
    #[must_use]
    pub fn at(date: NaiveDate) -> Self {
        let mut navigator = Self::today();
        navigator.current = date;
        navigator
    }

    /// Selected day
    #[must_use]
    pub const fn current(&self) -> NaiveDate {
        self.current
    }

    /// Whether the selected day is today
    #[must_use]
    pub fn is_today(&self) -> bool {
        self.current == self.today
    }

    /// Move one day back
    pub fn previous_day(&mut self) -> NaiveDate {
        self.current = self
            .current
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.current);
        self.current
    }

    /// Move one day forward
    pub fn next_day(&mut self) -> NaiveDate {
        self.current = self
            .current
            .checked_add_days(Days::new(1))
            .unwrap_or(self.current);
        self.current
    }

    /// Jump back to today
    pub fn go_to_today(&mut self) -> NaiveDate {
        self.current = self.today;
        self.current
    }

    /// Jump to `date`
    pub fn go_to(&mut self, date: NaiveDate) {
        self.current = date;
    }

    /// Heading such as `Monday, May 5, 2025`
    #[must_use]
    pub fn label(&self) -> String {
        self.current.format("%A, %B %-d, %Y").to_string()
    }
}

/// Parse a `YYYY-MM-DD` date, also accepting `today` and `yesterday`
///
/// # Errors
///
/// Returns `InvalidInput` when the value is not a date
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let raw = raw.trim();
    let today = Local::now().date_naive();
    match raw.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => {
            return today
                .checked_sub_days(Days::new(1))
                .ok_or_else(|| AppError::invalid_input("Date out of range"));
        }
        _ => {}
    }

    if raw.len() != 10 {
        return Err(AppError::invalid_input(format!(
            "Invalid date '{raw}', expected YYYY-MM-DD"
        )));
    }
    journal_date::parse(raw)
        .map_err(|e| AppError::invalid_input(format!("Invalid date '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_next_and_today() {
        let mut nav = DateNavigator::with_today(day(2025, 3, 1));
        assert!(nav.is_today());
        assert_eq!(nav.previous_day(), day(2025, 2, 28));
        assert!(!nav.is_today());
        assert_eq!(nav.next_day(), day(2025, 3, 1));
        assert_eq!(nav.next_day(), day(2025, 3, 2));
        assert_eq!(nav.go_to_today(), day(2025, 3, 1));
    }

    #[test]
    fn test_label() {
        let nav = DateNavigator::with_today(day(2025, 5, 5));
        assert_eq!(nav.label(), "Monday, May 5, 2025");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29").unwrap(), day(2024, 2, 29));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-02-29T10:00:00").is_err());
        assert!(parse_date("yesterday").is_ok());
    }
}
