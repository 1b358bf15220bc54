// ABOUTME: HTTP transport for the fitness journal REST API
// ABOUTME: Builds requests under /api, tags them with x-request-id, and maps failures to AppError

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Journal API client
//!
//! [`JournalApiClient`] is a thin typed wrapper: resource methods live in the
//! sibling modules and all go through [`JournalApiClient::execute`], which
//! owns request correlation, timing logs, and status mapping.
//!
//! # Example
//! ```rust,no_run
//! use fitness_journal::api::JournalApiClient;
//! use fitness_journal::config::ClientConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = JournalApiClient::new(&config);
//! let latest = client.latest_body_composition().await?;
//! println!("{} lbs on {}", latest.weight_pounds, latest.date);
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::constants::{endpoints, headers};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::utils::http_client::create_client_with_timeout;

/// Typed client for the journal backend
#[derive(Debug, Clone)]
pub struct JournalApiClient {
    base_url: String,
    http_client: Client,
}

impl JournalApiClient {
    /// Create a client for the configured backend
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let http_client =
            create_client_with_timeout(config.http_timeout_secs, config.connect_timeout_secs);
        Self::with_http_client(config, http_client)
    }

    /// Create a client reusing an existing `reqwest::Client`
    #[must_use]
    pub fn with_http_client(config: &ClientConfig, http_client: Client) -> Self {
        let base_url = format!(
            "{}{}",
            config.api_url.as_str().trim_end_matches('/'),
            endpoints::API_BASE
        );
        Self {
            base_url,
            http_client,
        }
    }

    /// Root of every endpoint, e.g. `http://localhost:8000/api`
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.execute(Method::GET, path, |request| request).await?;
        decode(response, path).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized + Sync,
    {
        let response = self
            .execute(Method::GET, path, |request| request.query(query))
            .await?;
        decode(response, path).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let response = self
            .execute(method, path, |request| request.json(body))
            .await?;
        decode(response, path).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.execute(Method::POST, path, |request| request).await?;
        decode(response, path).await
    }

    /// DELETE ignores whatever body the backend sends back
    pub(crate) async fn delete(&self, path: &str) -> AppResult<()> {
        self.execute(Method::DELETE, path, |request| request)
            .await
            .map(drop)
    }

    /// Send one request and turn any non-2xx answer into an error
    ///
    /// # Errors
    ///
    /// Returns `ExternalServiceUnavailable` when the backend cannot be reached
    /// and a status-derived code otherwise
    async fn execute<F>(&self, method: Method, path: &str, build: F) -> AppResult<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let request_id = Uuid::new_v4().to_string();
        let url = self.url(path);
        let started = Instant::now();

        let request = self
            .http_client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(headers::REQUEST_ID, request_id.as_str());

        let response = build(request).send().await.map_err(|e| {
            warn!(%method, path, %request_id, "Journal API unreachable: {e}");
            AppError::unavailable(format!("{method} {path}: {e}"))
                .with_request_id(request_id.clone())
                .with_source(e)
        })?;

        let status = response.status();
        debug!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            %request_id,
            "Journal API call"
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match backend_detail(&body) {
            Some(detail) => format!("{method} {path} failed with status {status}: {detail}"),
            None => format!("{method} {path} failed with status {status}"),
        };
        let error = AppError::http_status(status.as_u16(), message).with_request_id(request_id);
        if error.code == ErrorCode::ResourceNotFound {
            debug!(path, "Journal API resource not found");
        } else {
            warn!(path, status = status.as_u16(), "Journal API error: {}", error.message);
        }
        Err(error)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> AppResult<T> {
    let bytes = response.bytes().await.map_err(|e| {
        AppError::unavailable(format!("Failed to read response from {path}: {e}")).with_source(e)
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Unexpected response from {path}: {e}"),
        )
        .with_source(e)
    })
}

/// Extract the `detail` field the backend puts in error bodies
///
/// Validation failures carry a list of `{loc, msg}` objects instead of a string.
pub fn backend_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::parse_api_url;

    #[test]
    fn test_base_url_appends_api_prefix() {
        let config = ClientConfig::new(parse_api_url("http://journal.local:8000/").unwrap());
        let client = JournalApiClient::new(&config);
        assert_eq!(client.base_url(), "http://journal.local:8000/api");
        assert_eq!(
            client.url("/body-composition/latest"),
            "http://journal.local:8000/api/body-composition/latest"
        );
    }

    #[test]
    fn test_backend_detail_string_and_list() {
        assert_eq!(
            backend_detail(r#"{"detail":"Measurement not found"}"#).as_deref(),
            Some("Measurement not found")
        );
        assert_eq!(
            backend_detail(
                r#"{"detail":[{"loc":["body","weight_pounds"],"msg":"field required"}]}"#
            )
            .as_deref(),
            Some("field required")
        );
        assert_eq!(backend_detail("<html>Bad gateway</html>"), None);
    }
}
