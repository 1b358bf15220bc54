// ABOUTME: Unit preference commands for the fitness-journal CLI
// ABOUTME: Show, set, toggle, and reset the persisted display units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::ValueEnum;
use fitness_journal::{
    context::SessionContext,
    errors::AppResult,
    units::{LengthUnit, WeightUnit},
};
use tracing::info;

/// Which preference a units command changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitTarget {
    /// Body weight on measurements
    Body,
    /// Loads on workout exercises
    Exercise,
    /// Height and circumferences
    Length,
}

/// Print the current units
pub fn show(session: &SessionContext) {
    let units = session.units();
    println!("Body weight:     {}", units.body_weight_unit());
    println!("Exercise weight: {}", units.exercise_weight_unit());
    println!("Length:          {}", units.length_unit());
}

/// Set one unit from its name
pub fn set(session: &mut SessionContext, target: UnitTarget, unit: &str) -> AppResult<()> {
    let units = session.units_mut();
    match target {
        UnitTarget::Body => units.set_body_weight_unit(unit.parse::<WeightUnit>()?),
        UnitTarget::Exercise => units.set_exercise_weight_unit(unit.parse::<WeightUnit>()?),
        UnitTarget::Length => units.set_length_unit(unit.parse::<LengthUnit>()?),
    }
    info!(?target, unit, "Unit preference updated");
    show(session);
    Ok(())
}

/// Switch one unit to its alternative
pub fn toggle(session: &mut SessionContext, target: UnitTarget) {
    let units = session.units_mut();
    let now = match target {
        UnitTarget::Body => units.toggle_body_weight_unit().to_string(),
        UnitTarget::Exercise => units.toggle_exercise_weight_unit().to_string(),
        UnitTarget::Length => units.toggle_length_unit().to_string(),
    };
    println!("Now using {now}");
}

/// Restore the default units
pub fn reset(session: &mut SessionContext) {
    session.units_mut().reset();
    show(session);
}
