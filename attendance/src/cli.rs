// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::env;
use std::io::IsTerminal as _;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::calculator::calculate;
use crate::core::chart::write_chart;
use crate::core::export::{DEFAULT_CSV_FILE_NAME, write_csv};
use crate::core::timetable::resolve_timetable;
use crate::models::{AbsenceInput, Weekday};
use crate::utils::{format_leave_hours, print_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Days absent on Mondays
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub monday: i64,

    /// Days absent on Tuesdays
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub tuesday: i64,

    /// Days absent on Wednesdays
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub wednesday: i64,

    /// Days absent on Thursdays
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub thursday: i64,

    /// Days absent on Fridays
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub friday: i64,

    /// Timetable file (defaults to the nearest timetable.toml, then the built-in timetable)
    #[arg(short, long)]
    pub timetable: Option<PathBuf>,

    /// Export the report as CSV (defaults to attendance_report.csv)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE_NAME)]
    pub csv: Option<PathBuf>,

    /// Write an SVG chart of the report
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Do not colour percentage cells
    #[arg(long)]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    #[must_use]
    pub fn absences(&self) -> AbsenceInput {
        AbsenceInput::new()
            .with(Weekday::Monday, self.monday)
            .with(Weekday::Tuesday, self.tuesday)
            .with(Weekday::Wednesday, self.wednesday)
            .with(Weekday::Thursday, self.thursday)
            .with(Weekday::Friday, self.friday)
    }
}

/// Runs one calculation: prints the report and writes the requested exports.
///
/// # Errors
///
/// This function may return an error if:
/// * The timetable file cannot be read or parsed
/// * The CSV report or the chart cannot be written
pub fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let timetable = resolve_timetable(args.timetable.as_deref(), &cwd)?;
    if timetable.is_empty() {
        warn!("timetable has no scheduled subjects");
    }

    let absences = args.absences();
    println!("{}", format_leave_hours(&absences));

    let reports = calculate(&timetable, &absences);
    info!(subjects = reports.len(), "attendance calculated");

    let color = !args.no_color && std::io::stdout().is_terminal();
    println!("Attendance Report:");
    print_report(&reports, color);

    if let Some(path) = &args.csv {
        write_csv(path, &reports)?;
        println!("Report saved to {}", path.display());
    }

    if let Some(path) = &args.chart {
        write_chart(path, &reports)?;
        println!("Chart saved to {}", path.display());
    }

    Ok(())
}
