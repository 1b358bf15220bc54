// ABOUTME: Derived body metrics computed from canonical measurements
// ABOUTME: BMI, Navy-method body fat, category labels, and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Journal Metrics
//!
//! Pure, stateless computations over a body measurement. Inputs are always
//! canonical (pounds, inches). A metric that cannot be computed is `None`,
//! never an error.

/// Body Mass Index
pub mod bmi;

/// Navy tape-test body fat estimate
pub mod body_fat;

/// Combined metrics for one measurement
pub mod derived;

pub use bmi::{bmi_category, calculate_bmi, format_bmi, BmiCategory};
pub use body_fat::{body_fat_category, calculate_body_fat, format_body_fat, BodyFatCategory};
pub use derived::{DerivedMetrics, Measurement};
