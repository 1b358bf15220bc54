// ABOUTME: U.S. Navy tape-test body fat estimation and classification
// ABOUTME: Male circumference formula, plausibility window, and ACE-style category bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use journal_core::constants::labels::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};

/// Male Navy formula coefficient on `log10(waist - neck)`
const MALE_ABDOMEN_COEFFICIENT: f64 = 86.010;
/// Male Navy formula coefficient on `log10(height)`
const MALE_HEIGHT_COEFFICIENT: f64 = 70.041;
/// Male Navy formula constant term
const MALE_CONSTANT: f64 = 36.76;

/// Results outside this window are treated as measurement errors
const PLAUSIBLE_MIN: f64 = 0.0;
const PLAUSIBLE_MAX: f64 = 50.0;

/// Body fat classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    /// Minimum fat needed for basic physiology
    EssentialFat,
    /// Typical of competitive athletes
    Athlete,
    /// Fit, non-athlete range
    Fitness,
    /// Population average
    Average,
    /// Above the average band
    Obese,
}

impl BodyFatCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EssentialFat => "Essential fat",
            Self::Athlete => "Athlete",
            Self::Fitness => "Fitness",
            Self::Average => "Average",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimate body fat percentage with the Navy tape test
///
/// Formula (male):
/// `BF% = 86.010 × log10(waist − neck) − 70.041 × log10(height) + 36.76`
///
/// All measurements are in inches. Returns `None` when any measurement is
/// absent or not positive, when `waist <= neck`, or when the estimate falls
/// outside `[0, 50]`. Valid results are rounded to one decimal place.
///
/// The female formula needs hip circumference, which is not recorded, so
/// `is_male == false` always yields `None`.
#[must_use]
pub fn calculate_body_fat(
    waist_inches: Option<f64>,
    neck_inches: Option<f64>,
    height_inches: Option<f64>,
    is_male: bool,
) -> Option<f64> {
    let positive = |v: Option<f64>| v.filter(|x| *x > 0.0);
    let waist = positive(waist_inches)?;
    let neck = positive(neck_inches)?;
    let height = positive(height_inches)?;

    if !is_male {
        return None;
    }

    if waist <= neck {
        return None;
    }

    let body_fat = MALE_ABDOMEN_COEFFICIENT * (waist - neck).log10()
        - MALE_HEIGHT_COEFFICIENT * height.log10()
        + MALE_CONSTANT;

    if !(PLAUSIBLE_MIN..=PLAUSIBLE_MAX).contains(&body_fat) {
        return None;
    }

    Some((body_fat * 10.0).round() / 10.0)
}

/// Classify a body fat percentage
///
/// Male bands: `<6` essential, `<14` athlete, `<18` fitness, `<25` average.
/// Female bands: `<14` essential, `<21` athlete, `<25` fitness, `<32` average.
#[must_use]
pub fn body_fat_category(body_fat: f64, is_male: bool) -> BodyFatCategory {
    let (essential, athlete, fitness, average) = if is_male {
        (6.0, 14.0, 18.0, 25.0)
    } else {
        (14.0, 21.0, 25.0, 32.0)
    };

    if body_fat < essential {
        BodyFatCategory::EssentialFat
    } else if body_fat < athlete {
        BodyFatCategory::Athlete
    } else if body_fat < fitness {
        BodyFatCategory::Fitness
    } else if body_fat < average {
        BodyFatCategory::Average
    } else {
        BodyFatCategory::Obese
    }
}

/// Format a body fat percentage as `"17.5% (Fitness)"`, or `"Not available"`
#[must_use]
pub fn format_body_fat(body_fat: Option<f64>, is_male: bool) -> String {
    body_fat.map_or_else(
        || NOT_AVAILABLE.to_owned(),
        |value| format!("{value:.1}% ({})", body_fat_category(value, is_male)),
    )
}
