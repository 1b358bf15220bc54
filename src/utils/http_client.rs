// ABOUTME: HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Builds the reqwest client used by the journal API client

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::warn;

use crate::constants::service_names;

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails (for example when the
/// TLS backend cannot initialize), logging the reason.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    create_custom_client(|builder| {
        builder
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
    })
}

/// Create a new HTTP client with custom configuration
///
/// Every client identifies itself with a `fitness-journal/<version>` user agent.
pub fn create_custom_client<F>(config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    let builder = ClientBuilder::new().user_agent(concat!(
        "fitness-journal/",
        env!("CARGO_PKG_VERSION")
    ));
    config_fn(builder).build().unwrap_or_else(|e| {
        warn!(
            service = service_names::FITNESS_JOURNAL,
            "Falling back to default HTTP client: {e}"
        );
        Client::new()
    })
}
