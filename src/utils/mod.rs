// ABOUTME: Shared utility modules for the journal client
// ABOUTME: Currently HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client construction with configured timeouts
pub mod http_client;
