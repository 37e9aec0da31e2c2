// src/core/export.rs
use crate::models::SubjectReport;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tabled::Tabled;
use tracing::info;

/// File name offered for the exported report.
pub const DEFAULT_CSV_FILE_NAME: &str = "attendance_report.csv";

/// Media type of the exported report.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Column headers of the report, in order.
pub const HEADERS: [&str; 6] = [
    "Subject",
    "Periods/Week",
    "Total Hours",
    "Days Absent",
    "Attendance Percentage",
    "Status",
];

/// One report row as exported to CSV and printed in the terminal table.
#[derive(Debug, Serialize, Tabled)]
pub struct ReportRow<'a> {
    #[serde(rename = "Subject")]
    #[tabled(rename = "Subject")]
    pub subject: &'a str,
    #[serde(rename = "Periods/Week")]
    #[tabled(rename = "Periods/Week")]
    pub periods_per_week: u32,
    #[serde(rename = "Total Hours")]
    #[tabled(rename = "Total Hours")]
    pub total_hours: u32,
    #[serde(rename = "Days Absent")]
    #[tabled(rename = "Days Absent")]
    pub hours_missed: i64,
    #[serde(rename = "Attendance Percentage")]
    #[tabled(rename = "Attendance Percentage")]
    pub percentage: String,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

impl<'a> From<&'a SubjectReport> for ReportRow<'a> {
    fn from(report: &'a SubjectReport) -> Self {
        Self {
            subject: &report.subject,
            periods_per_week: report.periods_per_week,
            total_hours: report.total_hours,
            hours_missed: report.hours_missed,
            percentage: report.formatted_percentage(),
            status: report.status.label(),
        }
    }
}

/// Serializes the report as UTF-8 CSV with a header row.
///
/// Fields holding commas, quotes or line breaks are quoted.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized.
pub fn to_csv(reports: &[SubjectReport]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if reports.is_empty() {
        writer.write_record(HEADERS)?;
    }

    for report in reports {
        writer
            .serialize(ReportRow::from(report))
            .with_context(|| format!("Failed to serialize row for {}", report.subject))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
}

/// Writes the CSV export of `reports` to `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_csv(path: &Path, reports: &[SubjectReport]) -> Result<()> {
    let bytes = to_csv(reports)?;
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write CSV report: {}", path.display()))?;
    info!(path = %path.display(), rows = reports.len(), "wrote {CSV_MIME_TYPE} report");
    Ok(())
}
