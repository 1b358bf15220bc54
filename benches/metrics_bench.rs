// ABOUTME: Criterion benchmarks for unit conversion and derived body metrics
// ABOUTME: Measures BMI, Navy body fat, and display conversion over batches of measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for unit conversion and derived metrics.
//!
//! The journal view recomputes metrics for every entry it renders, so these
//! run over batches sized like a month and a year of daily measurements.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitness_journal::metrics::{calculate_bmi, calculate_body_fat, DerivedMetrics, Measurement};
use fitness_journal::units::{
    convert_length, convert_weight, format_weight, LengthUnit, WeightUnit,
};

/// Generate plausible measurements with slowly drifting values
fn generate_measurements(count: usize) -> Vec<Measurement> {
    (0..count)
        .map(|index| {
            let drift = (index % 60) as f64 * 0.1;
            Measurement {
                weight_pounds: 150.0 + drift,
                height_inches: Some(68.0),
                waist_inches: Some(32.0 + drift / 4.0),
                neck_inches: Some(15.0),
                is_male: index % 5 != 0,
            }
        })
        .collect()
}

fn bench_unit_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_conversion");

    group.bench_function("pounds_to_kilograms", |b| {
        b.iter(|| {
            convert_weight(
                black_box(Some(154.0)),
                WeightUnit::Pounds,
                WeightUnit::Kilograms,
            )
        });
    });

    group.bench_function("centimeters_to_inches", |b| {
        b.iter(|| {
            convert_length(
                black_box(Some(172.7)),
                LengthUnit::Centimeters,
                LengthUnit::Inches,
            )
        });
    });

    group.bench_function("format_weight_kg", |b| {
        b.iter(|| format_weight(black_box(Some(154.0)), WeightUnit::Kilograms));
    });

    group.finish();
}

fn bench_single_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    group.bench_function("bmi", |b| {
        b.iter(|| calculate_bmi(black_box(154.0), black_box(Some(68.0))));
    });

    group.bench_function("body_fat_male", |b| {
        b.iter(|| {
            calculate_body_fat(
                black_box(Some(34.0)),
                black_box(Some(15.0)),
                black_box(Some(70.0)),
                true,
            )
        });
    });

    group.finish();
}

fn bench_derived_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_metrics");

    for size in [30_usize, 365] {
        let measurements = generate_measurements(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &measurements,
            |b, measurements| {
                b.iter(|| {
                    measurements
                        .iter()
                        .map(DerivedMetrics::from_measurement)
                        .filter(|metrics| metrics.body_fat_percentage.is_some())
                        .count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_unit_conversion,
    bench_single_metrics,
    bench_derived_batches
);
criterion_main!(benches);
