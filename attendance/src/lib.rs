// src/lib.rs
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::calculator::{REQUIRED_PERCENTAGE, TERM_WEEKS, calculate, calculate_percentage};
pub use crate::core::chart::{render_chart, write_chart};
pub use crate::core::classifier::classify;
pub use crate::core::export::{CSV_MIME_TYPE, DEFAULT_CSV_FILE_NAME, HEADERS, to_csv, write_csv};
pub use crate::core::timetable::{
    TIMETABLE_FILE_NAME, find_timetable, load_or_builtin, load_timetable, parse_timetable,
    resolve_timetable,
};
pub use models::{AbsenceInput, ScheduledSubject, Severity, Status, SubjectReport, Timetable, Weekday};
pub use utils::{format_leave_hours, render_report};
