// ABOUTME: HTTP-level tests for the journal API client against a local axum stub
// ABOUTME: URL layout, JSON decoding, status mapping, backend detail messages, and 404 handling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use fitness_journal::api::JournalApiClient;
use fitness_journal::config::environment::parse_api_url;
use fitness_journal::config::ClientConfig;
use fitness_journal::errors::ErrorCode;
use fitness_journal::models::{
    DailyActivityCreate, DailyActivityUpdate, ExerciseCreate, WorkoutCreate, WorkoutStatus,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;

fn measurement_json(id: i64) -> Value {
    json!({
        "id": id,
        "date": "2025-05-05T07:30:00",
        "weight_pounds": 154.0,
        "height_inches": 68.0,
        "waist_inches": null,
        "neck_inches": null,
        "bmi": 23.4,
        "body_fat_percentage": null,
        "is_male": true,
        "notes": null,
        "created_at": "2025-05-05T07:30:00",
        "updated_at": "2025-05-05T07:30:00"
    })
}

fn stub_router() -> Router {
    Router::new()
        .route(
            "/api/body-composition/latest",
            get(|| async { Json(measurement_json(11)) }),
        )
        .route(
            "/api/body-composition/:id",
            get(|Path(id): Path<i64>| async move {
                if id == 404 {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({"detail": "Body composition entry not found"})),
                    )
                } else {
                    (StatusCode::OK, Json(measurement_json(id)))
                }
            }),
        )
        .route(
            "/api/exercise/workouts",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "id": 5,
                    "date": body["date"],
                    "notes": body["notes"],
                    "status": "in_progress",
                    "exercises": []
                }))
            }),
        )
        .route(
            "/api/exercise/workouts/:id/complete",
            post(|Path(id): Path<i64>| async move {
                Json(json!({"id": id, "date": "2025-05-05", "status": "completed"}))
            }),
        )
        .route(
            "/api/exercise/daily-activities/date/:date",
            get(|Path(date): Path<String>| async move {
                if date == "2025-05-05" {
                    (
                        StatusCode::OK,
                        Json(json!({"id": 2, "date": date, "steps": 9000, "walk_yes_no": true})),
                    )
                } else {
                    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found"})))
                }
            }),
        )
        .route(
            "/api/exercise/daily-activities/:id",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(json!({
                    "id": id,
                    "date": "2025-05-04",
                    "steps": 500,
                    "mobility_yes_no": body["mobility_yes_no"]
                }))
            }),
        )
        .route(
            "/api/exercise/exercises/:id",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(json!({"id": id, "name": body["name"], "category": body["category"]}))
            }),
        )
        .route(
            "/api/body-composition/statistics/overview",
            get(|| async {
                Json(json!({"total_measurements": 12, "current_weight": 180.5}))
            }),
        )
        .route(
            "/api/analytics/charts/body-composition",
            get(|Query(params): Query<HashMap<String, u32>>| async move {
                let days = params.get("days").copied().unwrap_or_default();
                Json(json!([{"date": "2025-05-01", "weight": f64::from(days)}]))
            }),
        )
        .route(
            "/api/analytics/charts/exercise-progress/:id",
            get(|Path(id): Path<i64>| async move {
                Json(json!([{
                    "exercise_name": format!("Exercise {id}"),
                    "date": "2025-05-01T18:00:00",
                    "max_weight": 225.0,
                    "total_reps": 15
                }]))
            }),
        )
        .route(
            "/api/exercise/daily-activities",
            get(|| async {
                Json(json!([
                    {"id": 1, "date": "2025-05-04", "walk_yes_no": false},
                    {"id": 2, "date": "2025-05-05", "steps": 9000}
                ]))
            })
            .post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let request_id = headers
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                Json(json!({
                    "id": 3,
                    "date": body["date"],
                    "steps": body["steps"],
                    "notes": request_id
                }))
            }),
        )
        .route(
            "/api/journal/range",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!([{
                    "date": params.get("start_date"),
                    "body_composition": null,
                    "workouts": []
                }]))
            }),
        )
        .route(
            "/api/analytics/summary/dashboard",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route(
            "/api/exercise/exercises",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, Json(json!({"detail": "Slow down"}))) })
                .post(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"detail": [
                            {"loc": ["body", "name"], "msg": "field required"},
                            {"loc": ["body", "category"], "msg": "unknown category"}
                        ]})),
                    )
                }),
        )
        .route(
            "/api/journal/daily/:date",
            get(|| async { "definitely not json" }),
        )
}

async fn spawn_client() -> JournalApiClient {
    common::init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.unwrap();
    });
    let config = ClientConfig::new(parse_api_url(&format!("http://{addr}/")).unwrap());
    JournalApiClient::new(&config)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_decodes_datetime_as_calendar_day() {
    let client = spawn_client().await;
    let latest = client.latest_body_composition().await.unwrap();
    assert_eq!(latest.id, 11);
    assert_eq!(latest.date, day(2025, 5, 5));
    assert_eq!(latest.waist_inches, None);
}

#[tokio::test]
async fn test_not_found_carries_backend_detail() {
    let client = spawn_client().await;
    let err = client.get_body_composition(404).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.context.http_status, Some(404));
    assert!(err.message.contains("Body composition entry not found"));
    assert!(err.context.request_id.is_some());
}

#[tokio::test]
async fn test_validation_errors_map_to_invalid_input() {
    let client = spawn_client().await;
    let err = client
        .create_exercise(&ExerciseCreate {
            name: String::new(),
            category: "juggling".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.ends_with("field required; unknown category"));
}

#[tokio::test]
async fn test_workout_create_and_complete() {
    let client = spawn_client().await;
    let workout = client
        .create_workout(&WorkoutCreate {
            date: day(2025, 5, 5),
            notes: Some("legs".to_owned()),
            exercises: Vec::new(),
        })
        .await
        .unwrap();
    assert_eq!(workout.id, 5);
    assert_eq!(workout.notes.as_deref(), Some("legs"));
    assert_eq!(workout.status, Some(WorkoutStatus::InProgress));

    let completed = client.complete_workout(workout.id).await.unwrap();
    assert_eq!(completed.status, Some(WorkoutStatus::Completed));
}

#[tokio::test]
async fn test_activity_by_date_treats_404_as_absent() {
    let client = spawn_client().await;
    let found = client.daily_activity_by_date(day(2025, 5, 5)).await.unwrap();
    assert_eq!(found.unwrap().steps, Some(9000));
    let missing = client.daily_activity_by_date(day(2025, 5, 6)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_requests_carry_request_id() {
    let client = spawn_client().await;
    let saved = client
        .save_daily_activity(&DailyActivityCreate {
            date: Some(day(2025, 5, 5)),
            steps: Some(1234),
            ..DailyActivityCreate::default()
        })
        .await
        .unwrap();
    assert_eq!(saved.steps, Some(1234));
    let request_id = saved.notes.unwrap();
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_range_query_and_order_check() {
    let client = spawn_client().await;
    let entries = client
        .journal_range(day(2025, 5, 1), day(2025, 5, 7))
        .await
        .unwrap();
    assert_eq!(entries[0].date, day(2025, 5, 1));

    let err = client
        .journal_range(day(2025, 5, 7), day(2025, 5, 1))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_status_mapping() {
    let client = spawn_client().await;

    let err = client.dashboard_summary().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert!(err.code.is_retryable());

    let err = client.list_exercises().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalRateLimited);
    assert!(err.message.contains("Slow down"));

    let err = client.daily_entry(day(2025, 5, 5)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_unreachable_backend() {
    common::init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(parse_api_url(&format!("http://{addr}")).unwrap());
    let err = JournalApiClient::new(&config)
        .latest_body_composition()
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_secondary_endpoints() {
    let client = spawn_client().await;

    let renamed = client
        .update_exercise(
            7,
            &ExerciseCreate {
                name: "Front Squat".to_owned(),
                category: "strength".to_owned(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.id, 7);
    assert_eq!(renamed.name, "Front Squat");

    let activities = client.list_daily_activities().await.unwrap();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[1].steps, Some(9000));

    let updated = client
        .update_daily_activity(
            1,
            &DailyActivityUpdate {
                mobility_yes_no: Some(true),
                ..DailyActivityUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.mobility_yes_no, Some(true));

    let stats = client.body_composition_statistics().await.unwrap();
    assert_eq!(stats.total_measurements, 12);
    assert_eq!(stats.total_workouts, 0);

    let chart = client.body_composition_chart(90).await.unwrap();
    assert!((chart[0].weight - 90.0).abs() < f64::EPSILON);

    let progress = client.exercise_progress_chart(3, 30).await.unwrap();
    assert_eq!(progress[0].exercise_name, "Exercise 3");
    assert_eq!(progress[0].date, day(2025, 5, 1));
}
