// ABOUTME: Body composition endpoints of the journal API
// ABOUTME: CRUD for measurements plus latest, by-date, trend, and statistics queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use reqwest::Method;

use super::JournalApiClient;
use crate::constants::endpoints::BODY_COMPOSITION;
use crate::errors::AppResult;
use crate::models::{
    BodyComposition, BodyCompositionCreate, BodyCompositionTrend, BodyCompositionUpdate,
    DashboardSummary,
};

impl JournalApiClient {
    /// Record a new measurement
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the payload or is unreachable
    pub async fn create_body_composition(
        &self,
        data: &BodyCompositionCreate,
    ) -> AppResult<BodyComposition> {
        self.send_json(Method::POST, &format!("{BODY_COMPOSITION}/"), data)
            .await
    }

    /// All measurements, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_body_compositions(&self) -> AppResult<Vec<BodyComposition>> {
        self.get(&format!("{BODY_COMPOSITION}/")).await
    }

    /// Most recent measurement
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when nothing has been recorded yet
    pub async fn latest_body_composition(&self) -> AppResult<BodyComposition> {
        self.get(&format!("{BODY_COMPOSITION}/latest")).await
    }

    /// Measurement taken on `date`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when there is no measurement that day
    pub async fn body_composition_by_date(&self, date: NaiveDate) -> AppResult<BodyComposition> {
        self.get(&format!("{BODY_COMPOSITION}/date/{}", date.format("%Y-%m-%d")))
            .await
    }

    /// Measurement by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get_body_composition(&self, id: i64) -> AppResult<BodyComposition> {
        self.get(&format!("{BODY_COMPOSITION}/{id}")).await
    }

    /// Apply a partial update
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or the payload is rejected
    pub async fn update_body_composition(
        &self,
        id: i64,
        data: &BodyCompositionUpdate,
    ) -> AppResult<BodyComposition> {
        self.send_json(Method::PUT, &format!("{BODY_COMPOSITION}/{id}"), data)
            .await
    }

    /// Delete a measurement
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or the request fails
    pub async fn delete_body_composition(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("{BODY_COMPOSITION}/{id}")).await
    }

    /// Weight and waist over the last `days` days
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn body_composition_trends(&self, days: u32) -> AppResult<Vec<BodyCompositionTrend>> {
        self.get(&format!("{BODY_COMPOSITION}/trends/{days}")).await
    }

    /// Aggregate statistics over all measurements
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn body_composition_statistics(&self) -> AppResult<DashboardSummary> {
        self.get(&format!("{BODY_COMPOSITION}/statistics/overview"))
            .await
    }
}
