// tests/integration_tests/export_test.rs
use anyhow::Result;
use attendance::{AbsenceInput, Timetable, Weekday, calculate, render_chart, to_csv, write_chart, write_csv};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize)]
struct ParsedRow {
    #[serde(rename = "Subject")]
    subject: String,
    #[serde(rename = "Periods/Week")]
    periods_per_week: u32,
    #[serde(rename = "Total Hours")]
    total_hours: u32,
    #[serde(rename = "Days Absent")]
    hours_missed: i64,
    #[serde(rename = "Attendance Percentage")]
    percentage: String,
    #[serde(rename = "Status")]
    status: String,
}

#[test]
fn test_csv_round_trip() -> Result<()> {
    let absences = AbsenceInput::new()
        .with(Weekday::Monday, 1)
        .with(Weekday::Tuesday, 3)
        .with(Weekday::Friday, 6);
    let reports = calculate(&Timetable::sample(), &absences);
    let bytes = to_csv(&reports)?;

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let rows: Vec<ParsedRow> = reader.deserialize().collect::<Result<_, _>>()?;

    assert_eq!(rows.len(), reports.len());
    for (row, report) in rows.iter().zip(&reports) {
        assert_eq!(row.subject, report.subject);
        assert_eq!(row.periods_per_week, report.periods_per_week);
        assert_eq!(row.total_hours, report.total_hours);
        assert_eq!(row.hours_missed, report.hours_missed);
        assert_eq!(row.status, report.status.label());

        let percentage: f64 = row.percentage.trim_end_matches('%').parse()?;
        assert!(
            (percentage - report.percentage).abs() <= 0.01,
            "{}: {percentage} vs {}",
            row.subject,
            report.percentage
        );
    }

    Ok(())
}

#[test]
fn test_write_csv_to_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(attendance::DEFAULT_CSV_FILE_NAME);
    let reports = calculate(&Timetable::sample(), &AbsenceInput::new());

    write_csv(&path, &reports)?;

    let written = fs::read(&path)?;
    assert_eq!(written, to_csv(&reports)?);
    let text = String::from_utf8(written)?;
    assert!(text.starts_with("Subject,Periods/Week,Total Hours,Days Absent,Attendance Percentage,Status\n"));
    assert!(text.contains("NW LAB,4,60,0,100.00%,Met Requirement"));
    Ok(())
}

#[test]
fn test_write_csv_to_missing_directory_fails() {
    let reports = calculate(&Timetable::sample(), &AbsenceInput::new());
    let result = write_csv(
        std::path::Path::new("/nonexistent/dir/attendance_report.csv"),
        &reports,
    );
    assert!(result.is_err());
}

#[test]
fn test_write_chart_to_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("attendance.svg");
    let reports = calculate(&Timetable::sample(), &AbsenceInput::new().with(Weekday::Thursday, 5));

    write_chart(&path, &reports)?;

    let svg = fs::read_to_string(&path)?;
    assert_eq!(svg, render_chart(&reports)?);
    assert!(svg.contains("CT LAB"));
    Ok(())
}
