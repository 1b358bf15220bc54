// ABOUTME: Daily activity endpoints of the journal API
// ABOUTME: Steps and habit flags per day with create-or-update semantics

use chrono::NaiveDate;
use reqwest::Method;

use super::JournalApiClient;
use crate::constants::endpoints::DAILY_ACTIVITIES;
use crate::errors::{AppResult, ErrorCode};
use crate::models::{DailyActivity, DailyActivityCreate, DailyActivityUpdate};

impl JournalApiClient {
    /// Every recorded day
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn list_daily_activities(&self) -> AppResult<Vec<DailyActivity>> {
        self.get(DAILY_ACTIVITIES).await
    }

    /// Activity for `date`, or `None` when nothing was recorded
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than a 404
    pub async fn daily_activity_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyActivity>> {
        match self
            .get(&format!("{DAILY_ACTIVITIES}/date/{}", date.format("%Y-%m-%d")))
            .await
        {
            Ok(activity) => Ok(Some(activity)),
            Err(e) if e.code == ErrorCode::ResourceNotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create the day's record, or replace the existing one for that date
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is rejected or the request fails
    pub async fn save_daily_activity(&self, data: &DailyActivityCreate) -> AppResult<DailyActivity> {
        self.send_json(Method::POST, DAILY_ACTIVITIES, data).await
    }

    /// Partially update a record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the payload is rejected
    pub async fn update_daily_activity(
        &self,
        id: i64,
        data: &DailyActivityUpdate,
    ) -> AppResult<DailyActivity> {
        self.send_json(Method::PUT, &format!("{DAILY_ACTIVITIES}/{id}"), data)
            .await
    }

    /// Delete a record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the request fails
    pub async fn delete_daily_activity(&self, id: i64) -> AppResult<()> {
        self.delete(&format!("{DAILY_ACTIVITIES}/{id}")).await
    }
}
