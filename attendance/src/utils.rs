// src/utils.rs
use crate::core::export::ReportRow;
use crate::models::{ANSI_RESET, AbsenceInput, SubjectReport};
use tabled::Table;
use tabled::settings::object::{Cell, Columns};
use tabled::settings::{Alignment, Color, Style};

const PERCENTAGE_COLUMN: usize = 4;

/// Echo of the absences entered for this run.
#[must_use]
pub fn format_leave_hours(absences: &AbsenceInput) -> String {
    format!("Updated Leave Hours: {absences}")
}

/// Renders the report as a text table.
///
/// With `color` set, the percentage cell gets the background colour of its
/// severity band.
#[must_use]
pub fn render_report(reports: &[SubjectReport], color: bool) -> String {
    let mut table = Table::new(reports.iter().map(ReportRow::from));
    table
        .with(Style::psql())
        .modify(Columns::new(1..=PERCENTAGE_COLUMN), Alignment::right());

    if color {
        // Row 0 is the header.
        for (row, report) in reports.iter().enumerate() {
            let band = Color::new(report.severity().ansi_background(), ANSI_RESET);
            table.modify(Cell::new(row + 1, PERCENTAGE_COLUMN), band);
        }
    }

    table.to_string()
}

pub fn print_report(reports: &[SubjectReport], color: bool) {
    println!("{}", render_report(reports, color));
}
