// src/core/classifier.rs
use crate::models::Severity;

/// Maps an attendance percentage to its highlighting band.
///
/// Bands are checked from the top, first match wins:
///
/// | Range       | Band      |
/// |-------------|-----------|
/// | `[90, 100]` | excellent |
/// | `[80, 90)`  | good      |
/// | `[70, 80)`  | fair      |
/// | `[50, 70)`  | poor      |
/// | otherwise   | critical  |
///
/// Values above 100 and NaN fall through to `Critical`.
#[inline]
#[must_use]
pub fn classify(percentage: f64) -> Severity {
    if (90.0..=100.0).contains(&percentage) {
        Severity::Excellent
    } else if (80.0..90.0).contains(&percentage) {
        Severity::Good
    } else if (70.0..80.0).contains(&percentage) {
        Severity::Fair
    } else if (50.0..70.0).contains(&percentage) {
        Severity::Poor
    } else {
        Severity::Critical
    }
}
