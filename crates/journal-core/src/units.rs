// ABOUTME: Display units for body weight, exercise weight, and body measurements
// ABOUTME: Pure conversion and formatting functions between canonical and display units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit conversion library
//!
//! Canonical storage units are pounds and inches. Every other unit is a
//! display projection computed here and never sent to the backend.
//!
//! Conversion never fails: an absent or NaN input converts to `0.0`, the
//! "no measurement" sentinel callers already treat as empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::labels::NOT_RECORDED;
use crate::constants::units::{CM_TO_INCHES, INCHES_TO_CM, KG_TO_LBS, LBS_TO_KG};
use crate::errors::AppError;

/// Mass unit for body weight and exercise load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeightUnit {
    /// Pounds (canonical)
    #[default]
    #[serde(rename = "lbs")]
    Pounds,
    /// Kilograms
    #[serde(rename = "kg")]
    Kilograms,
}

impl WeightUnit {
    /// Unit symbol shown after a formatted value
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Pounds => "lbs",
            Self::Kilograms => "kg",
        }
    }

    /// The other weight unit
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pounds => Self::Kilograms,
            Self::Kilograms => Self::Pounds,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lbs" | "lb" | "pounds" | "pound" => Ok(Self::Pounds),
            "kg" | "kgs" | "kilograms" | "kilogram" => Ok(Self::Kilograms),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit '{other}' (expected lbs or kg)"
            ))),
        }
    }
}

/// Length unit for height and circumference measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LengthUnit {
    /// Inches (canonical)
    #[default]
    #[serde(rename = "inches")]
    Inches,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
}

impl LengthUnit {
    /// Unit symbol shown after a formatted value
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
        }
    }

    /// The other length unit
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Inches => Self::Centimeters,
            Self::Centimeters => Self::Inches,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            other => Err(AppError::invalid_input(format!(
                "Unknown length unit '{other}' (expected in or cm)"
            ))),
        }
    }
}

/// Present, finite-or-infinite, non-NaN value
fn recorded(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Convert a weight between units
///
/// Returns `0.0` when `value` is absent or NaN.
#[must_use]
pub fn convert_weight(value: Option<f64>, from: WeightUnit, to: WeightUnit) -> f64 {
    let Some(value) = recorded(value) else {
        return 0.0;
    };

    match (from, to) {
        (WeightUnit::Pounds, WeightUnit::Kilograms) => value * LBS_TO_KG,
        (WeightUnit::Kilograms, WeightUnit::Pounds) => value * KG_TO_LBS,
        _ => value,
    }
}

/// Convert a length between units
///
/// Returns `0.0` when `value` is absent or NaN.
#[must_use]
pub fn convert_length(value: Option<f64>, from: LengthUnit, to: LengthUnit) -> f64 {
    let Some(value) = recorded(value) else {
        return 0.0;
    };

    match (from, to) {
        (LengthUnit::Inches, LengthUnit::Centimeters) => value * INCHES_TO_CM,
        (LengthUnit::Centimeters, LengthUnit::Inches) => value * CM_TO_INCHES,
        _ => value,
    }
}

/// Convert a canonical (pounds) weight for display, keeping absence explicit
#[must_use]
pub fn weight_for_display(pounds: Option<f64>, unit: WeightUnit) -> Option<f64> {
    recorded(pounds).map(|v| convert_weight(Some(v), WeightUnit::Pounds, unit))
}

/// Convert a display weight back to canonical pounds, keeping absence explicit
#[must_use]
pub fn weight_to_canonical(value: Option<f64>, unit: WeightUnit) -> Option<f64> {
    recorded(value).map(|v| convert_weight(Some(v), unit, WeightUnit::Pounds))
}

/// Convert a canonical (inches) length for display, keeping absence explicit
#[must_use]
pub fn length_for_display(inches: Option<f64>, unit: LengthUnit) -> Option<f64> {
    recorded(inches).map(|v| convert_length(Some(v), LengthUnit::Inches, unit))
}

/// Convert a display length back to canonical inches, keeping absence explicit
#[must_use]
pub fn length_to_canonical(value: Option<f64>, unit: LengthUnit) -> Option<f64> {
    recorded(value).map(|v| convert_length(Some(v), unit, LengthUnit::Inches))
}

/// Format a weight with one decimal place and its unit symbol
#[must_use]
pub fn format_weight(value: Option<f64>, unit: WeightUnit) -> String {
    recorded(value).map_or_else(
        || NOT_RECORDED.to_owned(),
        |v| format!("{v:.1} {}", unit.symbol()),
    )
}

/// Format a length with one decimal place and its unit symbol
#[must_use]
pub fn format_length(value: Option<f64>, unit: LengthUnit) -> String {
    recorded(value).map_or_else(
        || NOT_RECORDED.to_owned(),
        |v| format!("{v:.1} {}", unit.symbol()),
    )
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const WEIGHTS: [WeightUnit; 2] = [WeightUnit::Pounds, WeightUnit::Kilograms];
    const LENGTHS: [LengthUnit; 2] = [LengthUnit::Inches, LengthUnit::Centimeters];

    #[test]
    fn test_identity_conversion() {
        for unit in WEIGHTS {
            for x in [0.0, 1.5, 154.0, 1e6, -3.0] {
                assert_eq!(convert_weight(Some(x), unit, unit), x);
            }
        }
        for unit in LENGTHS {
            assert_eq!(convert_length(Some(68.0), unit, unit), 68.0);
        }
    }

    #[test]
    fn test_fixed_factors() {
        let kg = convert_weight(Some(100.0), WeightUnit::Pounds, WeightUnit::Kilograms);
        assert!((kg - 45.3592).abs() < 1e-9);
        let lbs = convert_weight(Some(100.0), WeightUnit::Kilograms, WeightUnit::Pounds);
        assert!((lbs - 220.462).abs() < 1e-9);
        let cm = convert_length(Some(10.0), LengthUnit::Inches, LengthUnit::Centimeters);
        assert!((cm - 25.4).abs() < 1e-9);
        let inches = convert_length(Some(100.0), LengthUnit::Centimeters, LengthUnit::Inches);
        assert!((inches - 39.3701).abs() < 1e-9);
    }

    #[test]
    fn test_absent_values_convert_to_zero() {
        assert_eq!(
            convert_weight(None, WeightUnit::Pounds, WeightUnit::Kilograms),
            0.0
        );
        assert_eq!(
            convert_weight(Some(f64::NAN), WeightUnit::Kilograms, WeightUnit::Pounds),
            0.0
        );
        assert_eq!(
            convert_length(None, LengthUnit::Inches, LengthUnit::Centimeters),
            0.0
        );
        assert_eq!(
            convert_length(Some(f64::NAN), LengthUnit::Inches, LengthUnit::Inches),
            0.0
        );
    }

    #[test]
    fn test_optional_projection_keeps_absence() {
        assert_eq!(weight_for_display(None, WeightUnit::Kilograms), None);
        assert_eq!(length_to_canonical(Some(f64::NAN), LengthUnit::Centimeters), None);
        let cm = length_for_display(Some(70.0), LengthUnit::Centimeters);
        assert_eq!(cm, Some(70.0 * 2.54));
    }

    #[test]
    fn test_format_weight_and_length() {
        assert_eq!(format_weight(None, WeightUnit::Pounds), "Not recorded");
        assert_eq!(format_weight(Some(f64::NAN), WeightUnit::Kilograms), "Not recorded");
        assert_eq!(format_weight(Some(72.34), WeightUnit::Kilograms), "72.3 kg");
        assert_eq!(format_weight(Some(180.0), WeightUnit::Pounds), "180.0 lbs");
        assert_eq!(format_length(Some(34.06), LengthUnit::Inches), "34.1 in");
        assert_eq!(format_length(None, LengthUnit::Centimeters), "Not recorded");
    }

    #[test]
    fn test_symbols_and_toggle() {
        assert_eq!(WeightUnit::Pounds.symbol(), "lbs");
        assert_eq!(WeightUnit::Kilograms.symbol(), "kg");
        assert_eq!(LengthUnit::Inches.symbol(), "in");
        assert_eq!(LengthUnit::Centimeters.symbol(), "cm");
        assert_eq!(WeightUnit::Pounds.toggled().toggled(), WeightUnit::Pounds);
        assert_eq!(LengthUnit::Inches.toggled(), LengthUnit::Centimeters);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("KG".parse::<WeightUnit>().ok(), Some(WeightUnit::Kilograms));
        assert_eq!("lb".parse::<WeightUnit>().ok(), Some(WeightUnit::Pounds));
        assert_eq!("inches".parse::<LengthUnit>().ok(), Some(LengthUnit::Inches));
        assert_eq!(" cm ".parse::<LengthUnit>().ok(), Some(LengthUnit::Centimeters));
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&(WeightUnit::Kilograms, LengthUnit::Inches))
            .unwrap_or_default();
        assert_eq!(json, r#"["kg","inches"]"#);
    }
}
