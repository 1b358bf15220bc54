// ABOUTME: Stateful data-entry forms driven through the JournalBackend seam
// ABOUTME: Body composition, workout builder, and daily activity editors with inline error state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forms
//!
//! Forms hold values in display units and convert to canonical units only
//! when talking to the backend. A failed submission leaves the draft intact
//! and records the message in the form's [`FormStatus`].

/// Daily activity editor
pub mod activity;
/// Body composition create and edit form
pub mod body_composition;
/// Workout builder with per-entry save state
pub mod workout;

pub use activity::{ActivityField, DailyActivityForm};
pub use body_composition::BodyCompositionForm;
pub use workout::{BatchOutcome, EntryState, ExerciseEntry, WorkoutBuilder, INTERRUPTED_SAVE};

/// Submission state shown next to a form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Nothing submitted yet, or edited since the last submission
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// The last submission succeeded
    Saved,
    /// The last submission failed with this message
    Error(String),
}

impl FormStatus {
    /// Inline error message, if the last submission failed
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Trimmed notes, `None` when blank
pub(crate) fn non_blank(notes: &str) -> Option<String> {
    let trimmed = notes.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
