// ABOUTME: Environment configuration for the journal backend connection and local storage
// ABOUTME: Parses JOURNAL_* variables with defaults and validates the backend URL
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};
use url::Url;

use crate::constants::{cache, defaults, env_config};

/// Client configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend, without the `/api` prefix
    pub api_url: Url,
    /// Request timeout in seconds
    pub http_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Directory for the preference cache; platform config dir when unset
    pub config_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Configuration for the given backend with default timeouts
    #[must_use]
    pub const fn new(api_url: Url) -> Self {
        Self {
            api_url,
            http_timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
            config_dir: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL is malformed or a timeout is not
    /// a positive integer
    pub fn from_env() -> Result<Self> {
        let api_url = env_var_or(env_config::API_URL, defaults::API_URL);
        let api_url = parse_api_url(&api_url)
            .with_context(|| format!("Invalid {} value", env_config::API_URL))?;

        let http_timeout_secs = parse_timeout(
            env_config::HTTP_TIMEOUT_SECS,
            defaults::HTTP_TIMEOUT_SECS,
        )?;
        let connect_timeout_secs = parse_timeout(
            env_config::CONNECT_TIMEOUT_SECS,
            defaults::CONNECT_TIMEOUT_SECS,
        )?;

        let config_dir = env::var(env_config::CONFIG_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            api_url,
            http_timeout_secs,
            connect_timeout_secs,
            config_dir,
        };
        debug!(api_url = %config.api_url, "Loaded client configuration");
        Ok(config)
    }

    /// Replace the backend URL, e.g. from a command-line flag
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or not http(s)
    pub fn with_api_url(mut self, raw: &str) -> Result<Self> {
        self.api_url = parse_api_url(raw)?;
        Ok(self)
    }

    /// Directory holding the preference cache
    ///
    /// Falls back to `<platform config dir>/fitness-journal`. Returns `None`
    /// when neither is available, in which case preferences live in memory.
    #[must_use]
    pub fn preference_dir(&self) -> Option<PathBuf> {
        self.config_dir
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(cache::APP_DIR_NAME)))
    }
}

/// Parse and validate a backend base URL
///
/// Only `http` and `https` are accepted. A trailing slash is removed so paths
/// can be appended verbatim.
///
/// # Errors
///
/// Returns an error if the URL does not parse, has no host, or uses another scheme
pub fn parse_api_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("'{trimmed}' is not a valid URL"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(
            "Unsupported URL scheme '{}' (expected http or https)",
            url.scheme()
        ));
    }
    if url.host_str().is_none() {
        return Err(anyhow!("URL '{trimmed}' has no host"));
    }

    Ok(url)
}

/// Read a positive integer timeout, falling back to `default` when unset
fn parse_timeout(key: &str, default: u64) -> Result<u64> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid {key} value"))?;
    if secs == 0 {
        warn!("{key}=0 disables the timeout guard, using default of {default}s");
        return Ok(default);
    }
    Ok(secs)
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
