// src/models/timetable.rs
use crate::models::Weekday;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

/// One subject slot on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSubject {
    pub subject: String,
    pub periods: u32,
}

impl ScheduledSubject {
    #[inline]
    #[must_use]
    pub fn new(subject: impl Into<String>, periods: u32) -> Self {
        Self {
            subject: subject.into(),
            periods,
        }
    }
}

/// The weekly timetable: for every weekday, the subjects held that day in
/// the order they were declared.
///
/// A `Timetable` is built once and never mutated afterwards. Every subject
/// it contains has at least one period somewhere in the week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    days: BTreeMap<Weekday, Vec<ScheduledSubject>>,
}

impl Timetable {
    /// Builds a timetable from per-day subject lists.
    ///
    /// A subject listed twice on the same day keeps its first position and
    /// the periods are added together.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry has zero periods or an empty subject name.
    pub fn new<I, S>(days: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Weekday, S)>,
        S: IntoIterator<Item = ScheduledSubject>,
    {
        let mut merged: BTreeMap<Weekday, Vec<ScheduledSubject>> = BTreeMap::new();

        for (day, subjects) in days {
            let slots = merged.entry(day).or_default();
            for entry in subjects {
                if entry.subject.trim().is_empty() {
                    bail!("Empty subject name on {day}");
                }
                if entry.periods == 0 {
                    bail!(
                        "Subject '{}' on {day} must have at least one period",
                        entry.subject
                    );
                }
                merge_slot(slots, entry);
            }
        }

        merged.retain(|_, slots| !slots.is_empty());
        Ok(Self { days: merged })
    }

    /// The built-in weekly timetable used when no timetable file is found.
    #[must_use]
    pub fn sample() -> Self {
        let day = |entries: &[(&str, u32)]| -> Vec<ScheduledSubject> {
            entries
                .iter()
                .map(|&(subject, periods)| ScheduledSubject::new(subject, periods))
                .collect()
        };

        let days = BTreeMap::from([
            (
                Weekday::Monday,
                day(&[
                    ("OOAD", 1),
                    ("QM", 1),
                    ("AI", 1),
                    ("APTI", 1),
                    ("TOC", 1),
                    ("DCN", 1),
                    ("MN", 1),
                ]),
            ),
            (
                Weekday::Tuesday,
                day(&[("NW LAB", 4), ("TECH", 1), ("LIB", 1), ("QM", 1)]),
            ),
            (
                Weekday::Wednesday,
                day(&[
                    ("MN", 1),
                    ("OOAD", 1),
                    ("QM", 1),
                    ("APTI", 1),
                    ("TOC", 1),
                    ("DCN", 1),
                    ("AI", 1),
                ]),
            ),
            (
                Weekday::Thursday,
                day(&[("TOC", 1), ("DCN", 1), ("MN", 1), ("AI", 1), ("CT LAB", 3)]),
            ),
            (
                Weekday::Friday,
                day(&[
                    ("AI", 1),
                    ("APTI", 1),
                    ("OOAD", 1),
                    ("TOC", 1),
                    ("TECH", 2),
                    ("SWAYAM", 1),
                ]),
            ),
        ]);

        Self { days }
    }

    /// Subjects held on `day`, in declaration order. Empty if nothing is
    /// scheduled.
    #[inline]
    #[must_use]
    pub fn day(&self, day: Weekday) -> &[ScheduledSubject] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    /// Periods of `subject` held on `day`, zero when it is not scheduled.
    #[must_use]
    pub fn periods_on(&self, day: Weekday, subject: &str) -> u32 {
        self.day(day)
            .iter()
            .find(|slot| slot.subject == subject)
            .map_or(0, |slot| slot.periods)
    }

    /// Iterates over the scheduled days from Monday to Friday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[ScheduledSubject])> {
        self.days.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }

    #[must_use]
    pub fn total_periods(&self) -> u32 {
        self.days
            .values()
            .flatten()
            .fold(0_u32, |acc, slot| acc.saturating_add(slot.periods))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn merge_slot(slots: &mut Vec<ScheduledSubject>, entry: ScheduledSubject) {
    if let Some(existing) = slots.iter_mut().find(|slot| slot.subject == entry.subject) {
        existing.periods = existing.periods.saturating_add(entry.periods);
    } else {
        slots.push(entry);
    }
}
