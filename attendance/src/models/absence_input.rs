// src/models/absence_input.rs
use crate::models::Weekday;
use std::collections::BTreeMap;
use std::fmt;

/// Number of days missed per weekday. Missing weekdays count as zero.
///
/// Counts are not validated: negative values and values larger than the
/// term length are kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceInput {
    counts: BTreeMap<Weekday, i64>,
}

impl AbsenceInput {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, day: Weekday, count: i64) -> Self {
        self.set(day, count);
        self
    }

    #[inline]
    pub fn set(&mut self, day: Weekday, count: i64) {
        self.counts.insert(day, count);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, day: Weekday) -> i64 {
        self.counts.get(&day).copied().unwrap_or(0)
    }
}

impl FromIterator<(Weekday, i64)> for AbsenceInput {
    fn from_iter<T: IntoIterator<Item = (Weekday, i64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Renders every weekday, including the ones left at zero:
/// `{Monday: 1, Tuesday: 0, ...}`.
impl fmt::Display for AbsenceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, day) in Weekday::ALL.into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{day}: {}", self.get(day))?;
        }
        f.write_str("}")
    }
}
