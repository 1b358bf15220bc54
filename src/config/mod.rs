// ABOUTME: Configuration module for the fitness journal client
// ABOUTME: Exposes the environment-driven client configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Configuration comes from environment variables only; there is no config
//! file. Command-line flags may override individual values after loading.

/// Environment and backend connection configuration
pub mod environment;

pub use environment::ClientConfig;
