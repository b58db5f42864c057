//! Parsing and summing of logged durations.
//!
//! The time-tracker stores durations as text, `HH:MM` or `HH:MM:SS`. Parsing
//! never fails: anything that cannot be read contributes zero, so a malformed
//! row can never break a report. Seconds are ignored.
//!
//! ```rust
//! use timesheet::libs::duration::{parse_duration, sum_durations};
//! use timesheet::libs::entry::TimeEntry;
//! use timesheet::libs::formatter::format_duration;
//!
//! let entries = vec![
//!     TimeEntry::new("2025-07-01", "A", "Web", "1:30"),
//!     TimeEntry::new("2025-07-01", "B", "Web", "2:15:59"),
//! ];
//! assert_eq!(parse_duration("1:30").num_minutes(), 90);
//! assert_eq!(format_duration(&sum_durations(&entries)), "3:45");
//! ```

use super::entry::TimeEntry;
use chrono::{Duration, TimeDelta};

/// Parses `HH:MM[:SS]` into whole minutes.
///
/// Each component is read like a leading-digit integer: `"07"` is 7, `"12abc"`
/// is 12, `""`, `"x"` and `"-3"` are 0. A bare number (`"2"`) is hours.
/// Values too large to represent are 0.
pub fn parse_duration(value: &str) -> Duration {
    let mut parts = value.trim().split(':');
    let hours = parts.next().map(leading_number).unwrap_or(0);
    let minutes = parts.next().map(leading_number).unwrap_or(0);

    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .and_then(Duration::try_minutes)
        .unwrap_or_else(Duration::zero)
}

/// Total of every entry's duration. Saturates at `TimeDelta::MAX`.
pub fn sum_durations<'a, I>(entries: I) -> Duration
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries
        .into_iter()
        .map(|entry| parse_duration(&entry.duration))
        .fold(Duration::zero(), |acc, d| acc.checked_add(&d).unwrap_or(TimeDelta::MAX))
}

/// Converts `H:MM` to fractional hours (`"1:30"` → 1.5).
pub fn duration_to_hours(value: &str) -> f64 {
    hours(&parse_duration(value))
}

/// Fractional hours of a duration, at minute precision.
pub fn hours(duration: &Duration) -> f64 {
    duration.num_minutes() as f64 / 60.0
}

fn leading_number(component: &str) -> i64 {
    let digits: String = component.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().unwrap_or(0)
}
