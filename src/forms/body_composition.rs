// ABOUTME: Body composition form accepting display-unit inputs with live derived metrics
// ABOUTME: Converts to canonical pounds/inches on submit and creates or updates the measurement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{non_blank, FormStatus};
use crate::api::JournalBackend;
use crate::errors::{AppError, AppResult};
use crate::metrics::{DerivedMetrics, Measurement};
use crate::models::{BodyComposition, BodyCompositionCreate, BodyCompositionUpdate};
use crate::preferences::UnitPreferences;
use crate::units::{
    convert_length, convert_weight, length_for_display, length_to_canonical, weight_for_display,
    weight_to_canonical, LengthUnit, WeightUnit,
};

/// Create or edit one body-composition measurement
///
/// `weight` is in [`Self::weight_unit`]; `height`, `waist`, and `neck` are in
/// [`Self::length_unit`]. Length inputs that are zero or negative count as
/// not measured.
#[derive(Debug, Clone)]
pub struct BodyCompositionForm {
    date: NaiveDate,
    /// Body weight in the display unit
    pub weight: Option<f64>,
    /// Height in the display unit
    pub height: Option<f64>,
    /// Waist circumference in the display unit
    pub waist: Option<f64>,
    /// Neck circumference in the display unit
    pub neck: Option<f64>,
    /// Whether the male body-fat formula applies
    pub is_male: bool,
    /// Free-form notes
    pub notes: String,
    weight_unit: WeightUnit,
    length_unit: LengthUnit,
    editing_id: Option<i64>,
    status: FormStatus,
}

impl BodyCompositionForm {
    /// Empty form for a new measurement on `date`
    #[must_use]
    pub fn new(date: NaiveDate, preferences: UnitPreferences) -> Self {
        Self {
            date,
            weight: None,
            height: None,
            waist: None,
            neck: None,
            is_male: true,
            notes: String::new(),
            weight_unit: preferences.body_weight,
            length_unit: preferences.length,
            editing_id: None,
            status: FormStatus::Idle,
        }
    }

    /// Form pre-filled from a stored measurement, projected into display units
    #[must_use]
    pub fn edit(entry: &BodyComposition, preferences: UnitPreferences) -> Self {
        let length_unit = preferences.length;
        Self {
            date: entry.date,
            weight: weight_for_display(Some(entry.weight_pounds), preferences.body_weight),
            height: length_for_display(entry.height_inches, length_unit),
            waist: length_for_display(entry.waist_inches, length_unit),
            neck: length_for_display(entry.neck_inches, length_unit),
            is_male: entry.is_male,
            notes: entry.notes.clone().unwrap_or_default(),
            weight_unit: preferences.body_weight,
            length_unit,
            editing_id: Some(entry.id),
            status: FormStatus::Idle,
        }
    }

    /// Day of the measurement
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Id of the entry being edited, `None` for a new measurement
    #[must_use]
    pub const fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// Unit of [`Self::weight`]
    #[must_use]
    pub const fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    /// Unit of the length inputs
    #[must_use]
    pub const fn length_unit(&self) -> LengthUnit {
        self.length_unit
    }

    /// Result of the last submission
    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Re-project the entered values after a preference change
    pub fn apply_units(&mut self, preferences: UnitPreferences) {
        let (from_w, to_w) = (self.weight_unit, preferences.body_weight);
        let (from_l, to_l) = (self.length_unit, preferences.length);

        self.weight = self.weight.map(|v| convert_weight(Some(v), from_w, to_w));
        for value in [&mut self.height, &mut self.waist, &mut self.neck] {
            *value = value.map(|v| convert_length(Some(v), from_l, to_l));
        }
        self.weight_unit = to_w;
        self.length_unit = to_l;
    }

    /// Entered values in canonical units, `None` until a positive weight is entered
    #[must_use]
    pub fn measurement(&self) -> Option<Measurement> {
        let weight_pounds = weight_to_canonical(self.weight, self.weight_unit).filter(|w| *w > 0.0)?;
        Some(Measurement {
            weight_pounds,
            height_inches: self.canonical_length(self.height),
            waist_inches: self.canonical_length(self.waist),
            neck_inches: self.canonical_length(self.neck),
            is_male: self.is_male,
        })
    }

    /// Live BMI and body fat for the current inputs
    #[must_use]
    pub fn preview(&self) -> Option<DerivedMetrics> {
        self.measurement()
            .map(|measurement| DerivedMetrics::from_measurement(&measurement))
    }

    fn canonical_length(&self, value: Option<f64>) -> Option<f64> {
        length_to_canonical(value.filter(|v| *v > 0.0), self.length_unit)
    }

    /// Check the inputs and return them in canonical units
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` without a weight and `InvalidInput`
    /// when the weight is not positive
    pub fn validate(&self) -> AppResult<Measurement> {
        match self.weight {
            None => Err(AppError::missing_field("Weight")),
            Some(w) if w.is_nan() || w <= 0.0 => Err(AppError::invalid_input(format!(
                "Weight must be greater than 0 {}",
                self.weight_unit.symbol()
            ))),
            Some(_) => self
                .measurement()
                .ok_or_else(|| AppError::invalid_input("Weight must be greater than 0")),
        }
    }

    /// Validate, attach derived metrics, and save through `backend`
    ///
    /// A new measurement is created; an edited one is updated in place.
    /// On failure the inputs are kept and the message is stored in
    /// [`Self::status`].
    ///
    /// # Errors
    ///
    /// Returns the validation or backend error
    pub async fn submit(&mut self, backend: &dyn JournalBackend) -> AppResult<BodyComposition> {
        let measurement = match self.validate() {
            Ok(measurement) => measurement,
            Err(e) => {
                self.status = FormStatus::Error(e.user_message());
                return Err(e);
            }
        };
        let metrics = DerivedMetrics::from_measurement(&measurement);

        self.status = FormStatus::Submitting;
        let result = match self.editing_id {
            Some(id) => {
                backend
                    .update_body_composition(id, &self.update_payload(&measurement, &metrics))
                    .await
            }
            None => {
                backend
                    .create_body_composition(&self.create_payload(&measurement, &metrics))
                    .await
            }
        };

        match result {
            Ok(saved) => {
                info!(id = saved.id, date = %saved.date, "Body composition saved");
                self.editing_id = Some(saved.id);
                self.status = FormStatus::Saved;
                Ok(saved)
            }
            Err(e) => {
                warn!("Body composition submission failed: {e}");
                self.status = FormStatus::Error(e.user_message());
                Err(e)
            }
        }
    }

    fn create_payload(&self, m: &Measurement, metrics: &DerivedMetrics) -> BodyCompositionCreate {
        BodyCompositionCreate {
            date: self.date,
            weight_pounds: m.weight_pounds,
            height_inches: m.height_inches,
            waist_inches: m.waist_inches,
            neck_inches: m.neck_inches,
            bmi: metrics.bmi,
            body_fat_percentage: metrics.body_fat_percentage,
            is_male: m.is_male,
            notes: non_blank(&self.notes),
        }
    }

    fn update_payload(&self, m: &Measurement, metrics: &DerivedMetrics) -> BodyCompositionUpdate {
        BodyCompositionUpdate {
            weight_pounds: Some(m.weight_pounds),
            height_inches: m.height_inches,
            waist_inches: m.waist_inches,
            neck_inches: m.neck_inches,
            bmi: metrics.bmi,
            body_fat_percentage: metrics.body_fat_percentage,
            is_male: Some(m.is_male),
            notes: non_blank(&self.notes),
        }
    }
}
