// tests/integration_tests/common.rs
use anyhow::Result;
use attendance::{SubjectReport, Timetable, parse_timetable};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub const ALTERNATE_TIMETABLE: &str = r#"
[Monday]
"DATA STRUCTURES" = 2
MATHS = 1

[Wednesday]
MATHS = 2
"OS LAB" = 3

[Friday]
"DATA STRUCTURES" = 1
"#;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn alternate_timetable() -> Result<Timetable> {
    parse_timetable(ALTERNATE_TIMETABLE)
}

pub fn find<'a>(reports: &'a [SubjectReport], subject: &str) -> Option<&'a SubjectReport> {
    reports.iter().find(|report| report.subject == subject)
}
