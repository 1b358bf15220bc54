// ABOUTME: Body Mass Index calculation and classification
// ABOUTME: Converts canonical pounds/inches to SI units and applies the standard WHO bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use journal_core::constants::labels::NOT_AVAILABLE;
use journal_core::constants::units::{INCHES_TO_METERS, LBS_TO_KG};
use serde::{Deserialize, Serialize};

/// BMI classification band
///
/// Bands are inclusive at the low end and exclusive at the high end:
/// `[0, 18.5)`, `[18.5, 25)`, `[25, 30)`, `[30, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    NormalWeight,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute BMI from canonical weight and height
///
/// Formula: `BMI = weight_kg / height_m²` with `weight_kg = lbs × 0.453592`
/// and `height_m = in × 0.0254`. The result is not rounded.
///
/// Returns `None` when the height is absent, zero, negative or NaN, or when
/// the weight is not positive.
#[must_use]
pub fn calculate_bmi(weight_pounds: f64, height_inches: Option<f64>) -> Option<f64> {
    let height_inches = height_inches.filter(|h| *h > 0.0)?;
    if weight_pounds.is_nan() || weight_pounds <= 0.0 {
        return None;
    }

    let height_meters = height_inches * INCHES_TO_METERS;
    let weight_kg = weight_pounds * LBS_TO_KG;

    Some(weight_kg / (height_meters * height_meters))
}

/// Classify a BMI value
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Format a BMI as `"23.4 (Normal weight)"`, or `"Not available"`
#[must_use]
pub fn format_bmi(bmi: Option<f64>) -> String {
    bmi.map_or_else(
        || NOT_AVAILABLE.to_owned(),
        |value| format!("{value:.1} ({})", bmi_category(value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bmi() {
        let bmi = calculate_bmi(154.0, Some(68.0)).unwrap();
        assert!((bmi - 23.4).abs() < 0.05, "got {bmi}");
        assert_eq!(bmi_category(bmi), BmiCategory::NormalWeight);
        assert_eq!(format_bmi(Some(bmi)), "23.4 (Normal weight)");
    }

    #[test]
    fn test_missing_or_invalid_inputs() {
        assert_eq!(calculate_bmi(180.0, None), None);
        assert_eq!(calculate_bmi(0.0, Some(70.0)), None);
        assert_eq!(calculate_bmi(-5.0, Some(70.0)), None);
        assert_eq!(calculate_bmi(180.0, Some(0.0)), None);
        assert_eq!(calculate_bmi(180.0, Some(-70.0)), None);
        assert_eq!(calculate_bmi(180.0, Some(f64::NAN)), None);
        assert_eq!(calculate_bmi(f64::NAN, Some(70.0)), None);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(bmi_category(18.499), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.999), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
        assert_eq!(bmi_category(55.0), BmiCategory::Obese);
    }

    #[test]
    fn test_format_absent() {
        assert_eq!(format_bmi(None), "Not available");
    }
}
