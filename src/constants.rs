// ABOUTME: Application constants for the fitness journal client
// ABOUTME: Re-exports shared constants and names the environment variables read at startup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Conversion factors, endpoint paths, and defaults come from `journal-core`.
//! This module adds the names of the environment variables and HTTP headers
//! that only the client uses.

pub use journal_core::constants::{cache, defaults, endpoints, labels, service_names, units};

/// Environment variable names
pub mod env_config {
    /// Base URL of the journal backend
    pub const API_URL: &str = "JOURNAL_API_URL";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "JOURNAL_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "JOURNAL_CONNECT_TIMEOUT_SECS";
    /// Override for the preference cache directory
    pub const CONFIG_DIR: &str = "JOURNAL_CONFIG_DIR";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// HTTP header names
pub mod headers {
    /// Correlation header sent with every request
    pub const REQUEST_ID: &str = "x-request-id";
}
