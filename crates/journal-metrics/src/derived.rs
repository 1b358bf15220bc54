// ABOUTME: Combined derived metrics for a single body measurement
// ABOUTME: Computes BMI and body fat together and explains why a metric is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use journal_core::models::BodyComposition;
use serde::{Deserialize, Serialize};

use crate::bmi::{calculate_bmi, format_bmi};
use crate::body_fat::{calculate_body_fat, format_body_fat};

/// Raw inputs in canonical units (pounds, inches)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Body weight in pounds
    pub weight_pounds: f64,
    /// Height in inches
    pub height_inches: Option<f64>,
    /// Waist circumference in inches
    pub waist_inches: Option<f64>,
    /// Neck circumference in inches
    pub neck_inches: Option<f64>,
    /// Whether the male body-fat formula applies
    pub is_male: bool,
}

impl Measurement {
    /// Height, waist, and neck are all positive with the waist larger than the neck
    #[must_use]
    pub fn has_tape_inputs(&self) -> bool {
        let positive = |v: Option<f64>| v.filter(|x| *x > 0.0);
        match (
            positive(self.height_inches),
            positive(self.waist_inches),
            positive(self.neck_inches),
        ) {
            (Some(_), Some(waist), Some(neck)) => waist > neck,
            _ => false,
        }
    }
}

impl From<&BodyComposition> for Measurement {
    fn from(entry: &BodyComposition) -> Self {
        Self {
            weight_pounds: entry.weight_pounds,
            height_inches: entry.height_inches,
            waist_inches: entry.waist_inches,
            neck_inches: entry.neck_inches,
            is_male: entry.is_male,
        }
    }
}

/// Metrics derived from a [`Measurement`]
///
/// Never stored on its own; recompute whenever an input changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Body Mass Index
    pub bmi: Option<f64>,
    /// Body fat percentage
    pub body_fat_percentage: Option<f64>,
    is_male: bool,
    #[serde(default)]
    tape_inputs_usable: bool,
}

impl DerivedMetrics {
    /// Compute every derived metric for a measurement
    #[must_use]
    pub fn from_measurement(measurement: &Measurement) -> Self {
        Self {
            bmi: calculate_bmi(measurement.weight_pounds, measurement.height_inches),
            body_fat_percentage: calculate_body_fat(
                measurement.waist_inches,
                measurement.neck_inches,
                measurement.height_inches,
                measurement.is_male,
            ),
            is_male: measurement.is_male,
            tape_inputs_usable: measurement.has_tape_inputs(),
        }
    }

    /// BMI display string
    #[must_use]
    pub fn bmi_label(&self) -> String {
        format_bmi(self.bmi)
    }

    /// Body fat display string
    #[must_use]
    pub fn body_fat_label(&self) -> String {
        format_body_fat(self.body_fat_percentage, self.is_male)
    }

    /// Explanation shown next to a missing body fat value
    ///
    /// The female case has a structural cause. For men the estimate is
    /// missing either because the tape inputs are incomplete or because it
    /// fell outside the plausible 0-50% window.
    #[must_use]
    pub const fn body_fat_unavailable_reason(&self) -> Option<&'static str> {
        match (self.body_fat_percentage, self.is_male, self.tape_inputs_usable) {
            (Some(_), _, _) => None,
            (None, false, _) => {
                Some("Body fat estimate for women requires a hip measurement, which is not tracked")
            }
            (None, true, false) => {
                Some("Requires height, waist, and neck with waist larger than neck")
            }
            (None, true, true) => {
                Some("Estimate fell outside the plausible 0-50% range; re-check the measurements")
            }
        }
    }
}
