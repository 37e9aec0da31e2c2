// tests/integration_tests/calculation_test.rs
use super::common::{alternate_timetable, find};
use anyhow::{Context as _, Result};
use attendance::{
    AbsenceInput, ScheduledSubject, Severity, Status, TERM_WEEKS, Timetable, Weekday, calculate,
};

#[test]
fn test_weekly_periods_match_timetable_total() {
    let timetable = Timetable::sample();
    let reports = calculate(&timetable, &AbsenceInput::new());

    let reported: u32 = reports.iter().map(|report| report.periods_per_week).sum();
    assert_eq!(reported, timetable.total_periods());
    assert_eq!(reported, 35);

    for report in &reports {
        assert_eq!(report.total_hours, report.periods_per_week * TERM_WEEKS);
        assert!(report.total_hours > 0);
    }
}

#[test]
fn test_subject_set_is_independent_of_absences() {
    let timetable = Timetable::sample();
    let idle = calculate(&timetable, &AbsenceInput::new());
    let busy = calculate(
        &timetable,
        &AbsenceInput::new()
            .with(Weekday::Tuesday, 4)
            .with(Weekday::Thursday, 9),
    );

    let subjects = |reports: &[attendance::SubjectReport]| -> Vec<(String, u32, u32)> {
        reports
            .iter()
            .map(|r| (r.subject.clone(), r.periods_per_week, r.total_hours))
            .collect()
    };
    assert_eq!(subjects(&idle), subjects(&busy));
}

#[test]
fn test_calculate_is_idempotent() {
    let timetable = Timetable::sample();
    let absences = AbsenceInput::new()
        .with(Weekday::Monday, 2)
        .with(Weekday::Friday, 1);

    assert_eq!(
        calculate(&timetable, &absences),
        calculate(&timetable, &absences)
    );
}

#[test]
fn test_more_absences_never_raise_attendance() {
    let timetable = Timetable::sample();
    let base = AbsenceInput::new()
        .with(Weekday::Monday, 1)
        .with(Weekday::Tuesday, 2)
        .with(Weekday::Thursday, 1);
    let before = calculate(&timetable, &base);

    for day in Weekday::ALL {
        let bumped = base.clone().with(day, base.get(day) + 1);
        let after = calculate(&timetable, &bumped);

        for (old, new) in before.iter().zip(&after) {
            assert_eq!(old.subject, new.subject);
            if timetable.periods_on(day, &old.subject) > 0 {
                assert!(
                    new.percentage < old.percentage,
                    "{} should drop after another {day} absence",
                    old.subject
                );
            } else {
                assert!(
                    (new.percentage - old.percentage).abs() < f64::EPSILON,
                    "{} is not held on {day}",
                    old.subject
                );
            }
        }
    }
}

#[test]
fn test_alternate_timetable() -> Result<()> {
    let timetable = alternate_timetable()?;
    let absences = AbsenceInput::new()
        .with(Weekday::Monday, 3)
        .with(Weekday::Wednesday, 4);
    let reports = calculate(&timetable, &absences);

    let subjects: Vec<&str> = reports.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["DATA STRUCTURES", "MATHS", "OS LAB"]);

    // 3 periods a week, 45 hours, 3 Mondays of 2 periods missed.
    let ds = find(&reports, "DATA STRUCTURES").context("DATA STRUCTURES missing")?;
    assert_eq!(ds.total_hours, 45);
    assert_eq!(ds.hours_missed, 6);
    assert_eq!(ds.formatted_percentage(), "86.67%");
    assert_eq!(ds.status, Status::MetRequirement);

    // 3 periods a week, 45 hours, 3 + 8 missed.
    let maths = find(&reports, "MATHS").context("MATHS missing")?;
    assert_eq!(maths.hours_missed, 11);
    assert_eq!(maths.formatted_percentage(), "75.56%");
    assert_eq!(maths.status, Status::MetRequirement);

    // 3 periods a week, 45 hours, 12 missed.
    let lab = find(&reports, "OS LAB").context("OS LAB missing")?;
    assert_eq!(lab.hours_missed, 12);
    assert_eq!(lab.formatted_percentage(), "73.33%");
    assert_eq!(lab.status, Status::BelowRequirement);

    Ok(())
}

#[test]
fn test_whole_term_missed_is_zero_percent() -> Result<()> {
    let timetable = alternate_timetable()?;
    // OS LAB only runs on Wednesdays.
    let absences = AbsenceInput::new().with(Weekday::Wednesday, i64::from(TERM_WEEKS));
    let reports = calculate(&timetable, &absences);

    let lab = find(&reports, "OS LAB").context("OS LAB missing")?;
    assert_eq!(lab.hours_missed, i64::from(lab.total_hours));
    assert_eq!(lab.formatted_percentage(), "0.00%");
    assert_eq!(lab.status, Status::BelowRequirement);
    Ok(())
}

#[test]
fn test_band_matches_displayed_percentage() -> Result<()> {
    let timetable = Timetable::new([
        (Weekday::Monday, vec![ScheduledSubject::new("BIG", 1)]),
        (Weekday::Tuesday, vec![ScheduledSubject::new("BIG", 1999)]),
    ])?;
    // 30000 hours in the term, 3001 missed: 89.9967%.
    let absences = AbsenceInput::new().with(Weekday::Monday, 3001);
    let reports = calculate(&timetable, &absences);

    let big = find(&reports, "BIG").context("BIG missing")?;
    assert!(big.percentage < 90.0);
    assert_eq!(big.formatted_percentage(), "90.00%");
    assert_eq!(big.severity(), Severity::Excellent);
    Ok(())
}
