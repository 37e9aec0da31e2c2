// src/models.rs
pub mod absence_input;
pub mod severity;
pub mod subject_report;
pub mod timetable;
pub mod weekday;

pub use absence_input::AbsenceInput;
pub use severity::{ANSI_RESET, Severity};
pub use subject_report::{Status, SubjectReport};
pub use timetable::{ScheduledSubject, Timetable};
pub use weekday::Weekday;
