// ABOUTME: Integration tests for the daily activity form
// ABOUTME: Loading, dirty tracking, per-field saves, save-all, and failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitness_journal::api::MockJournalBackend;
use fitness_journal::errors::ErrorCode;
use fitness_journal::forms::{ActivityField, DailyActivityForm, FormStatus};

#[tokio::test]
async fn test_missing_day_loads_empty_form() {
    common::init_test_logging();
    let backend = MockJournalBackend::new();
    let form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();

    assert!(form.current().is_none());
    assert_eq!(form.steps(), None);
    assert_eq!(form.walked(), None);
    assert!(form.notes().is_empty());
    assert!(!form.has_unsaved_changes());
}

#[tokio::test]
async fn test_existing_day_loads_values() {
    let backend =
        MockJournalBackend::new().with_activity(common::test_date(), Some(8000), Some(true));
    let form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();

    assert_eq!(form.steps(), Some(8000));
    assert_eq!(form.walked(), Some(true));
    assert!(!form.has_unsaved_changes());
}

#[tokio::test]
async fn test_edits_mark_fields_dirty() {
    let backend =
        MockJournalBackend::new().with_activity(common::test_date(), Some(8000), Some(true));
    let mut form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();

    form.set_steps(Some(9500));
    form.set_mobility(Some(true));
    assert_eq!(
        form.dirty_fields(),
        ActivityField::STEPS | ActivityField::MOBILITY
    );

    form.set_steps(Some(8000));
    assert_eq!(form.dirty_fields(), ActivityField::MOBILITY);
}

#[tokio::test]
async fn test_save_steps_requires_value() {
    let backend = MockJournalBackend::new();
    let mut form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();

    let err = form.save_steps(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    let err = form.save_walk(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(!backend.calls().await.contains(&"save_daily_activity".to_owned()));
}

#[tokio::test]
async fn test_save_steps_leaves_other_edits_unsaved() {
    let backend =
        MockJournalBackend::new().with_activity(common::test_date(), Some(8000), Some(false));
    let mut form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();
    form.set_steps(Some(12_000));
    form.set_walked(Some(true));

    let saved = form.save_steps(&backend).await.unwrap();
    assert_eq!(saved.steps, Some(12_000));
    assert_eq!(saved.walk_yes_no, Some(false));

    assert_eq!(form.dirty_fields(), ActivityField::WALK);
    assert_eq!(form.walked(), Some(true));

    form.save_walk(&backend).await.unwrap();
    assert!(!form.has_unsaved_changes());
    let stored = &backend.activities().await[0];
    assert_eq!(stored.steps, Some(12_000));
    assert_eq!(stored.walk_yes_no, Some(true));
}

#[tokio::test]
async fn test_save_all_creates_record() {
    let backend = MockJournalBackend::new();
    let mut form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();
    form.set_steps(Some(6543));
    form.set_walked(Some(true));
    form.set_mobility(Some(false));
    form.set_notes("  stretched after run  ");

    form.save_all(&backend).await.unwrap();

    assert!(!form.has_unsaved_changes());
    assert_eq!(form.status(), &FormStatus::Saved);
    let stored = backend.activities().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].date, common::test_date());
    assert_eq!(stored[0].notes.as_deref(), Some("stretched after run"));
    assert_eq!(stored[0].mobility_yes_no, Some(false));
}

#[tokio::test]
async fn test_failed_save_keeps_edits() {
    common::init_test_logging();
    let backend = MockJournalBackend::new();
    let mut form = DailyActivityForm::load(&backend, common::test_date()).await.unwrap();
    form.set_steps(Some(4000));
    backend.set_unavailable(true).await;

    let err = form.save_all(&backend).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(form.status().error_message().is_some());
    assert!(form.has_unsaved_changes());
    assert_eq!(form.steps(), Some(4000));
}
