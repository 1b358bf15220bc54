// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for the fitness-journal CLI
// ABOUTME: One module per top-level subcommand

pub mod activity;
pub mod body;
pub mod charts;
pub mod exercise;
pub mod journal;
pub mod units;
pub mod workout;
