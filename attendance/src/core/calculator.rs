// src/core/calculator.rs
use crate::models::{AbsenceInput, Status, SubjectReport, Timetable, Weekday};
use std::collections::HashMap;
use tracing::debug;

/// Length of the term in weeks.
pub const TERM_WEEKS: u32 = 15;

/// Minimum attendance percentage needed to meet the requirement.
pub const REQUIRED_PERCENTAGE: f64 = 75.0;

/// Builds the attendance report for every subject in `timetable`.
///
/// Subjects are reported in the order they are first met when reading the
/// timetable from Monday to Friday, and within a day in declaration order.
/// The weekly period totals depend only on the timetable; absences only
/// affect the hours missed.
///
/// Absence counts are used as given. A count larger than the term length
/// (or a negative one) produces a percentage outside `0..=100`.
#[must_use]
pub fn calculate(timetable: &Timetable, absences: &AbsenceInput) -> Vec<SubjectReport> {
    weekly_periods(timetable)
        .into_iter()
        .map(|(subject, periods_per_week)| {
            let total_hours = periods_per_week.saturating_mul(TERM_WEEKS);
            let hours_missed = missed_hours(timetable, absences, subject);
            let percentage = calculate_percentage(total_hours, hours_missed);
            let status = if percentage >= REQUIRED_PERCENTAGE {
                Status::MetRequirement
            } else {
                Status::BelowRequirement
            };

            debug!(
                subject,
                periods_per_week, total_hours, hours_missed, percentage, "calculated attendance"
            );

            SubjectReport {
                subject: subject.to_owned(),
                periods_per_week,
                total_hours,
                hours_missed,
                percentage,
                status,
            }
        })
        .collect()
}

/// Total periods per week for each subject, in first-discovery order.
fn weekly_periods(timetable: &Timetable) -> Vec<(&str, u32)> {
    let mut totals: Vec<(&str, u32)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (_, slots) in timetable.iter() {
        for slot in slots {
            if let Some(total) = positions
                .get(slot.subject.as_str())
                .and_then(|&index| totals.get_mut(index))
            {
                total.1 = total.1.saturating_add(slot.periods);
            } else {
                positions.insert(slot.subject.as_str(), totals.len());
                totals.push((slot.subject.as_str(), slot.periods));
            }
        }
    }

    totals
}

/// Hours of `subject` lost to absences: each absent day costs the periods
/// the subject has on that weekday.
fn missed_hours(timetable: &Timetable, absences: &AbsenceInput, subject: &str) -> i64 {
    Weekday::ALL.into_iter().fold(0_i64, |acc, day| {
        let periods = i64::from(timetable.periods_on(day, subject));
        acc.saturating_add(absences.get(day).saturating_mul(periods))
    })
}

/// Share of the scheduled hours actually attended, as a percentage.
///
/// Not clamped: missing more hours than scheduled gives a negative value.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "hour counts stay far below 2^52")]
pub fn calculate_percentage(total_hours: u32, hours_missed: i64) -> f64 {
    if total_hours == 0 {
        return 0.0;
    }
    let attended = i64::from(total_hours).saturating_sub(hours_missed);
    (attended as f64 / f64::from(total_hours)) * 100.0
}
