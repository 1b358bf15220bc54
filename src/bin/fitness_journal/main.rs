// ABOUTME: fitness-journal CLI - log body composition, workouts, and daily activity
// ABOUTME: Parses commands, starts a session against the journal API, and dispatches to command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show or change display units
//! fitness-journal units show
//! fitness-journal units set body kg
//!
//! # Record a measurement in the current units
//! fitness-journal body add --weight 82.5 --height 178 --waist 86 --neck 38
//!
//! # Log a whole workout in one go
//! fitness-journal workout log --exercise "bench:80:8:3" --exercise "squat:100:5:5" --complete
//!
//! # Today's journal
//! fitness-journal journal day
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitness_journal::{
    config::ClientConfig, context::SessionContext, errors::AppResult, logging::LoggingConfig,
};
use tracing::debug;

use commands::units::UnitTarget;
use helpers::parse_date_arg;

#[derive(Parser)]
#[command(
    name = "fitness-journal",
    version,
    about = "Personal fitness journal client",
    long_about = "Track body composition, workouts, and daily activity against the fitness journal API."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Journal API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Display unit preferences
    Units {
        #[command(subcommand)]
        action: UnitsCommand,
    },

    /// Body composition measurements
    Body {
        #[command(subcommand)]
        action: BodyCommand,
    },

    /// Workouts and their exercises
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Exercise catalog
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Steps, walk, and mobility for a day
    Activity {
        #[command(subcommand)]
        action: ActivityCommand,
    },

    /// Journal pages
    Journal {
        #[command(subcommand)]
        action: JournalCommand,
    },

    /// Dashboard summary and trends
    Charts {
        /// Days of trend data to show
        #[arg(long, default_value = "30")]
        days: u32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum UnitsCommand {
    /// Show the current units
    Show,

    /// Set one unit
    Set {
        /// Which measurement the unit applies to
        #[arg(value_enum)]
        target: UnitTarget,

        /// lbs, kg, in, or cm
        unit: String,
    },

    /// Switch one unit to its alternative
    Toggle {
        /// Which measurement to toggle
        #[arg(value_enum)]
        target: UnitTarget,
    },

    /// Restore lbs / lbs / in
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum BodyCommand {
    /// Record a measurement (values in the current display units)
    Add {
        /// Day of the measurement (YYYY-MM-DD, today, yesterday)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Body weight
        #[arg(long)]
        weight: f64,

        /// Height
        #[arg(long)]
        height: Option<f64>,

        /// Waist circumference
        #[arg(long)]
        waist: Option<f64>,

        /// Neck circumference
        #[arg(long)]
        neck: Option<f64>,

        /// Use the female body-fat rules
        #[arg(long)]
        female: bool,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Change a stored measurement
    Edit {
        /// Measurement ID
        id: i64,

        /// Body weight
        #[arg(long)]
        weight: Option<f64>,

        /// Height
        #[arg(long)]
        height: Option<f64>,

        /// Waist circumference
        #[arg(long)]
        waist: Option<f64>,

        /// Neck circumference
        #[arg(long)]
        neck: Option<f64>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List measurements, newest first
    List {
        /// Maximum rows to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show the most recent measurement
    Latest,

    /// Show one measurement by ID or date
    Show {
        /// Measurement ID
        id: Option<i64>,

        /// Day of the measurement
        #[arg(long, value_parser = parse_date_arg, conflicts_with = "id")]
        date: Option<NaiveDate>,
    },

    /// Delete a measurement
    Delete {
        /// Measurement ID
        id: i64,
    },

    /// Weight and waist trend
    Trends {
        /// Days to look back
        #[arg(long, default_value = "30")]
        days: u32,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Create an empty workout
    Start {
        /// Day of the workout
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Workout notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Add an exercise to a workout (weight in the exercise unit)
    Add {
        /// Workout ID
        workout_id: i64,

        /// Exercise name or unique fragment
        #[arg(long)]
        exercise: String,

        /// Load per rep
        #[arg(long)]
        weight: f64,

        /// Reps per set
        #[arg(long)]
        reps: u32,

        /// Number of sets
        #[arg(long, default_value = "1")]
        sets: u32,

        /// Notes for this exercise
        #[arg(long)]
        notes: Option<String>,
    },

    /// Replace a workout's notes
    Notes {
        /// Workout ID
        workout_id: i64,

        /// New notes (empty clears them)
        text: String,
    },

    /// Mark a workout completed
    Complete {
        /// Workout ID
        workout_id: i64,
    },

    /// Delete a workout and all its exercises
    Cancel {
        /// Workout ID
        workout_id: i64,
    },

    /// List workouts
    List {
        /// Only workouts on this day
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Show one workout
    Show {
        /// Workout ID
        workout_id: i64,
    },

    /// Remove one exercise line from a workout
    DeleteExercise {
        /// Workout exercise ID
        workout_exercise_id: i64,
    },

    /// Create a workout, add exercises, and optionally complete it
    Log {
        /// Day of the workout
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Workout notes
        #[arg(long)]
        notes: Option<String>,

        /// Exercise as NAME:WEIGHT:REPS[:SETS], repeatable
        #[arg(long = "exercise", required = true)]
        exercises: Vec<String>,

        /// Complete the workout when every exercise saved
        #[arg(long)]
        complete: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// List the catalog
    List {
        /// Only names containing this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Add an exercise to the catalog
    Create {
        /// Exercise name
        name: String,

        /// Category (strength, cardio, ...)
        #[arg(long, default_value = "strength")]
        category: String,
    },

    /// Remove an exercise from the catalog
    Delete {
        /// Exercise ID
        id: i64,
    },

    /// Best load and volume over time
    Progress {
        /// Exercise ID
        id: i64,

        /// Days to look back
        #[arg(long)]
        days: Option<u32>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ActivityCommand {
    /// Show a day's activity
    Show {
        /// Day (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Record steps, walk, mobility, or notes for a day
    Set {
        /// Day (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Step count
        #[arg(long)]
        steps: Option<u32>,

        /// Whether a walk was taken
        #[arg(long)]
        walk: Option<bool>,

        /// Whether a mobility session was done
        #[arg(long)]
        mobility: Option<bool>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a day's activity
    Delete {
        /// Day (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum JournalCommand {
    /// Everything logged on one day
    Day {
        /// Day (defaults to today)
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Show the day before
        #[arg(long, conflicts_with = "next")]
        previous: bool,

        /// Show the day after
        #[arg(long)]
        next: bool,
    },

    /// Days between two dates, inclusive
    Range {
        /// First day
        #[arg(value_parser = parse_date_arg)]
        start: NaiveDate,

        /// Last day
        #[arg(value_parser = parse_date_arg)]
        end: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays clean
    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url)?;
    }
    debug!(api_url = %config.api_url, "Configuration loaded");

    let mut session = SessionContext::start(config);
    let result = dispatch(cli.command, &mut session).await;
    session.end();

    result.map_err(Into::into)
}

async fn dispatch(
    command: Command,
    session: &mut SessionContext,
) -> AppResult<()> {
    match command {
        Command::Units { action } => match action {
            UnitsCommand::Show => {
                commands::units::show(session);
                Ok(())
            }
            UnitsCommand::Set { target, unit } => commands::units::set(session, target, &unit),
            UnitsCommand::Toggle { target } => {
                commands::units::toggle(session, target);
                Ok(())
            }
            UnitsCommand::Reset => {
                commands::units::reset(session);
                Ok(())
            }
        },
        Command::Body { action } => match action {
            BodyCommand::Add {
                date,
                weight,
                height,
                waist,
                neck,
                female,
                notes,
            } => {
                let input = commands::body::MeasurementInput {
                    weight: Some(weight),
                    height,
                    waist,
                    neck,
                    notes,
                };
                commands::body::add(session, date, input, !female).await
            }
            BodyCommand::Edit {
                id,
                weight,
                height,
                waist,
                neck,
                notes,
            } => {
                let input = commands::body::MeasurementInput {
                    weight,
                    height,
                    waist,
                    neck,
                    notes,
                };
                commands::body::edit(session, id, input).await
            }
            BodyCommand::List { limit } => commands::body::list(session, limit).await,
            BodyCommand::Latest => commands::body::latest(session).await,
            BodyCommand::Show { id, date } => commands::body::show(session, id, date).await,
            BodyCommand::Delete { id } => commands::body::delete(session, id).await,
            BodyCommand::Trends { days } => commands::body::trends(session, days).await,
        },
        Command::Workout { action } => dispatch_workout(action, session).await,
        Command::Exercise { action } => match action {
            ExerciseCommand::List { search } => {
                commands::exercise::list(session, search.as_deref()).await
            }
            ExerciseCommand::Create { name, category } => {
                commands::exercise::create(session, name, category).await
            }
            ExerciseCommand::Delete { id } => commands::exercise::delete(session, id).await,
            ExerciseCommand::Progress { id, days } => {
                commands::exercise::progress(session, id, days).await
            }
        },
        Command::Activity { action } => match action {
            ActivityCommand::Show { date } => commands::activity::show(session, date).await,
            ActivityCommand::Set {
                date,
                steps,
                walk,
                mobility,
                notes,
            } => {
                let input = commands::activity::ActivityInput {
                    steps,
                    walk,
                    mobility,
                    notes,
                };
                commands::activity::set(session, date, input).await
            }
            ActivityCommand::Delete { date } => commands::activity::delete(session, date).await,
        },
        Command::Journal { action } => match action {
            JournalCommand::Day {
                date,
                previous,
                next,
            } => commands::journal::day(session, date, previous, next).await,
            JournalCommand::Range { start, end } => {
                commands::journal::range(session, start, end).await
            }
        },
        Command::Charts { days } => commands::charts::show(session, days).await,
    }
}

async fn dispatch_workout(
    action: WorkoutCommand,
    session: &mut SessionContext,
) -> AppResult<()> {
    match action {
        WorkoutCommand::Start { date, notes } => commands::workout::start(session, date, notes).await,
        WorkoutCommand::Add {
            workout_id,
            exercise,
            weight,
            reps,
            sets,
            notes,
        } => {
            let line = commands::workout::ExerciseLine {
                name: exercise,
                weight,
                reps,
                sets,
                notes,
            };
            commands::workout::add(session, workout_id, line).await
        }
        WorkoutCommand::Notes { workout_id, text } => {
            commands::workout::notes(session, workout_id, text).await
        }
        WorkoutCommand::Complete { workout_id } => {
            commands::workout::complete(session, workout_id).await
        }
        WorkoutCommand::Cancel { workout_id } => commands::workout::cancel(session, workout_id).await,
        WorkoutCommand::List { date } => commands::workout::list(session, date).await,
        WorkoutCommand::Show { workout_id } => commands::workout::show(session, workout_id).await,
        WorkoutCommand::DeleteExercise {
            workout_exercise_id,
        } => commands::workout::delete_exercise(session, workout_exercise_id).await,
        WorkoutCommand::Log {
            date,
            notes,
            exercises,
            complete,
        } => commands::workout::log(session, date, notes, &exercises, complete).await,
    }
}
