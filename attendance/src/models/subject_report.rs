// src/models/subject_report.rs
use crate::core::classifier::classify;
use crate::models::Severity;
use std::fmt;

/// Whether a subject reaches the required attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    MetRequirement,
    BelowRequirement,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MetRequirement => "Met Requirement",
            Self::BelowRequirement => "Below Requirement",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the attendance report.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectReport {
    pub subject: String,
    pub periods_per_week: u32,
    /// Scheduled hours over the whole term.
    pub total_hours: u32,
    /// Shown under the "Days Absent" heading.
    pub hours_missed: i64,
    pub percentage: f64,
    pub status: Status,
}

impl SubjectReport {
    #[inline]
    #[must_use]
    pub fn hours_attended(&self) -> i64 {
        i64::from(self.total_hours).saturating_sub(self.hours_missed)
    }

    /// The percentage as shown to users, e.g. `97.78%`.
    #[inline]
    #[must_use]
    pub fn formatted_percentage(&self) -> String {
        format!("{:.2}%", self.percentage)
    }

    /// Band of the percentage as displayed, so a cell reading `90.00%` is
    /// coloured as excellent even if the exact value is just below 90.
    #[inline]
    #[must_use]
    pub fn severity(&self) -> Severity {
        classify((self.percentage * 100.0).round() / 100.0)
    }
}
