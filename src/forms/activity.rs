// ABOUTME: Daily activity form for steps, walk, mobility, and notes on one day
// ABOUTME: Tracks unsaved fields with bitflags and saves per field or all at once via create-or-update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bitflags::bitflags;
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{non_blank, FormStatus};
use crate::api::JournalBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyActivity, DailyActivityCreate};

bitflags! {
    /// Fields of a day's activity
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ActivityField: u8 {
        /// Step count
        const STEPS = 1;
        /// Walk yes/no
        const WALK = 1 << 1;
        /// Mobility yes/no
        const MOBILITY = 1 << 2;
        /// Notes
        const NOTES = 1 << 3;
    }
}

/// Editor for one day's activity
///
/// Values are compared against the last loaded or saved record to decide
/// which fields have unsaved changes.
#[derive(Debug, Clone)]
pub struct DailyActivityForm {
    date: NaiveDate,
    steps: Option<u32>,
    walked: Option<bool>,
    mobility: Option<bool>,
    notes: String,
    current: Option<DailyActivity>,
    dirty: ActivityField,
    status: FormStatus,
}

impl DailyActivityForm {
    /// Empty form for `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            steps: None,
            walked: None,
            mobility: None,
            notes: String::new(),
            current: None,
            dirty: ActivityField::empty(),
            status: FormStatus::Idle,
        }
    }

    /// Load the stored activity for `date`; a day without a record gives an empty form
    ///
    /// # Errors
    ///
    /// Returns the backend error; the form is left unchanged
    pub async fn load(backend: &dyn JournalBackend, date: NaiveDate) -> AppResult<Self> {
        let mut form = Self::new(date);
        if let Some(activity) = backend.daily_activity_by_date(date).await? {
            form.apply_saved(activity);
        }
        Ok(form)
    }

    fn apply_saved(&mut self, activity: DailyActivity) {
        self.steps = activity.steps;
        self.walked = activity.walk_yes_no;
        self.mobility = activity.mobility_yes_no;
        self.notes = activity.notes.clone().unwrap_or_default();
        self.current = Some(activity);
        self.refresh_dirty();
    }

    /// Day being edited
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Last loaded or saved record
    #[must_use]
    pub const fn current(&self) -> Option<&DailyActivity> {
        self.current.as_ref()
    }

    /// Step count as edited
    #[must_use]
    pub const fn steps(&self) -> Option<u32> {
        self.steps
    }

    /// Walk flag as edited
    #[must_use]
    pub const fn walked(&self) -> Option<bool> {
        self.walked
    }

    /// Mobility flag as edited
    #[must_use]
    pub const fn mobility(&self) -> Option<bool> {
        self.mobility
    }

    /// Notes as edited
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Result of the last save
    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Fields that differ from the stored record
    #[must_use]
    pub const fn dirty_fields(&self) -> ActivityField {
        self.dirty
    }

    /// Whether any field differs from the stored record
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Edit the step count
    pub fn set_steps(&mut self, steps: Option<u32>) {
        self.steps = steps;
        self.refresh_dirty();
    }

    /// Edit the walk flag
    pub fn set_walked(&mut self, walked: Option<bool>) {
        self.walked = walked;
        self.refresh_dirty();
    }

    /// Edit the mobility flag
    pub fn set_mobility(&mut self, mobility: Option<bool>) {
        self.mobility = mobility;
        self.refresh_dirty();
    }

    /// Edit the notes
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
        self.refresh_dirty();
    }

    fn refresh_dirty(&mut self) {
        let saved = self.current.as_ref();
        let mut dirty = ActivityField::empty();
        // An unset local value never counts as a change
        dirty.set(
            ActivityField::STEPS,
            self.steps.is_some() && self.steps != saved.and_then(|a| a.steps),
        );
        dirty.set(
            ActivityField::WALK,
            self.walked.is_some() && self.walked != saved.and_then(|a| a.walk_yes_no),
        );
        dirty.set(
            ActivityField::MOBILITY,
            self.mobility.is_some() && self.mobility != saved.and_then(|a| a.mobility_yes_no),
        );
        dirty.set(
            ActivityField::NOTES,
            non_blank(&self.notes) != saved.and_then(|a| a.notes.as_deref().and_then(non_blank)),
        );
        self.dirty = dirty;
    }

    /// Payload taking `fields` from the form and everything else from the stored record
    fn payload(&self, fields: ActivityField) -> DailyActivityCreate {
        let saved = self.current.as_ref();
        let pick = |field: ActivityField| fields.contains(field);
        DailyActivityCreate {
            date: Some(self.date),
            steps: if pick(ActivityField::STEPS) {
                self.steps
            } else {
                saved.and_then(|a| a.steps)
            },
            walk_yes_no: if pick(ActivityField::WALK) {
                self.walked
            } else {
                saved.and_then(|a| a.walk_yes_no)
            },
            mobility_yes_no: if pick(ActivityField::MOBILITY) {
                self.mobility
            } else {
                saved.and_then(|a| a.mobility_yes_no)
            },
            notes: if pick(ActivityField::NOTES) {
                non_blank(&self.notes)
            } else {
                saved.and_then(|a| a.notes.clone())
            },
        }
    }

    /// Save only the step count
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when no step count is entered, or the backend error
    pub async fn save_steps(&mut self, backend: &dyn JournalBackend) -> AppResult<&DailyActivity> {
        if self.steps.is_none() {
            return Err(AppError::missing_field("Steps"));
        }
        self.save_fields(backend, ActivityField::STEPS).await
    }

    /// Save only the walk flag
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the flag is unset, or the backend error
    pub async fn save_walk(&mut self, backend: &dyn JournalBackend) -> AppResult<&DailyActivity> {
        if self.walked.is_none() {
            return Err(AppError::missing_field("Walk"));
        }
        self.save_fields(backend, ActivityField::WALK).await
    }

    /// Save only the mobility flag
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the flag is unset, or the backend error
    pub async fn save_mobility(&mut self, backend: &dyn JournalBackend) -> AppResult<&DailyActivity> {
        if self.mobility.is_none() {
            return Err(AppError::missing_field("Mobility"));
        }
        self.save_fields(backend, ActivityField::MOBILITY).await
    }

    /// Save every field
    ///
    /// # Errors
    ///
    /// Returns the backend error; edits are kept
    pub async fn save_all(&mut self, backend: &dyn JournalBackend) -> AppResult<&DailyActivity> {
        self.save_fields(backend, ActivityField::all()).await
    }

    async fn save_fields(
        &mut self,
        backend: &dyn JournalBackend,
        fields: ActivityField,
    ) -> AppResult<&DailyActivity> {
        self.status = FormStatus::Submitting;
        match backend.save_daily_activity(&self.payload(fields)).await {
            Ok(saved) => {
                debug!(date = %self.date, ?fields, "Daily activity saved");
                self.current = Some(saved);
                self.refresh_dirty();
                self.status = FormStatus::Saved;
                self.current
                    .as_ref()
                    .ok_or_else(|| AppError::internal("Saved activity missing after save"))
            }
            Err(e) => {
                warn!(date = %self.date, "Failed to save daily activity: {e}");
                self.status = FormStatus::Error(e.user_message());
                Err(e)
            }
        }
    }
}
