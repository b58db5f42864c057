//! Formatting of durations, hours and money for reports.
//!
//! ## Duration Format
//!
//! Every duration in the application, whether an entry cell, a group subtotal
//! or a grand total, uses the same `H:MM` pattern:
//! - Hours are not padded and may exceed 24
//! - Minutes are always zero-padded to 2 digits
//! - Seconds are not displayed
//! - Negative durations are treated as `0:00`
//!
//! ### Examples
//! - 1 hour 30 minutes → `1:30`
//! - 45 minutes → `0:45`
//! - 100 hours → `100:00`
//!
//! ## Money Format
//!
//! Amounts are rendered as `$1,234.56`, negatives as `-$1,234.56`.

use chrono::Duration;
use num_format::{Locale, ToFormattedString};

/// Formats a duration as `H:MM`.
///
/// ```rust
/// use timesheet::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(225)), "3:45");
/// assert_eq!(format_duration(&Duration::zero()), "0:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "0:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_minutes().max(0);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Re-formats a single stored duration string in the canonical `H:MM` form.
pub fn format_duration_str(value: &str) -> String {
    format_duration(&super::duration::parse_duration(value))
}

/// Hours with two decimals (`7.5` → `"7.50"`).
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Percentage with one decimal (`87.456` → `"87.5%"`).
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats an amount as dollars with thousands separators.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}${}.{:02}", sign, (cents / 100).to_formatted_string(&Locale::en), cents % 100)
}
