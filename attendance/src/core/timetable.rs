// src/core/timetable.rs
use crate::models::{ScheduledSubject, Timetable, Weekday};
use anyhow::{Context as _, Result, anyhow, bail};
use toml::Value;

pub mod loader;

pub use loader::{
    TIMETABLE_FILE_NAME, find_timetable, load_or_builtin, load_timetable, resolve_timetable,
};

/// Parses a timetable written as TOML, one table per weekday:
///
/// ```toml
/// [Monday]
/// OOAD = 1
/// "NW LAB" = 4
/// ```
///
/// Subjects keep the order in which they are written. Weekdays that are
/// absent from the document have nothing scheduled.
///
/// # Errors
///
/// This function may return an error if:
/// * The content is not valid TOML
/// * A top-level key is not a weekday from Monday to Friday
/// * A weekday is not a table
/// * A period count is not a positive integer
pub fn parse_timetable(content: &str) -> Result<Timetable> {
    let document: toml::Table = toml::from_str(content).context("Invalid timetable TOML")?;
    let mut days = Vec::with_capacity(document.len());

    for (key, value) in &document {
        let day: Weekday = key.parse()?;
        let Value::Table(subjects) = value else {
            bail!("{day} must be a table of subject = periods entries");
        };

        let mut slots = Vec::with_capacity(subjects.len());
        for (subject, periods) in subjects {
            slots.push(ScheduledSubject::new(
                subject.as_str(),
                parse_periods(day, subject, periods)?,
            ));
        }
        days.push((day, slots));
    }

    Timetable::new(days)
}

fn parse_periods(day: Weekday, subject: &str, value: &Value) -> Result<u32> {
    let periods = value
        .as_integer()
        .ok_or_else(|| anyhow!("Periods for '{subject}' on {day} must be an integer"))?;
    match u32::try_from(periods) {
        Ok(periods) if periods > 0 => Ok(periods),
        _ => bail!("Periods for '{subject}' on {day} must be a positive integer, got {periods}"),
    }
}
