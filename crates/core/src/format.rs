//! Display formatting helpers for dashboard view models.
//!
//! All functions are pure. Time-relative helpers take `now` explicitly so
//! a whole page renders against one clock reading.

use chrono::Duration;

use crate::types::Timestamp;

/// Placeholder shown for an absent optional value.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Placeholder shown when a related row (agent, contact, ...) is missing.
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// Amount at or above which currency is abbreviated to thousands.
const CURRENCY_THOUSANDS_THRESHOLD: i64 = 1000;

/// Format a duration in seconds as `M:SS`.
///
/// Negative inputs are clamped to zero.
pub fn format_duration(seconds: i64) -> String {
    let secs = seconds.max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format a timestamp relative to `now`.
///
/// | Age            | Output        |
/// |----------------|---------------|
/// | < 1 minute     | `Just now`    |
/// | < 1 hour       | `12m ago`     |
/// | < 24 hours     | `5h ago`      |
/// | < 48 hours     | `Yesterday`   |
/// | otherwise      | `Oct 3`       |
///
/// Timestamps in the future render as `Just now`.
pub fn format_relative_time(ts: Timestamp, now: Timestamp) -> String {
    let elapsed = now.signed_duration_since(ts);

    if elapsed < Duration::minutes(1) {
        return "Just now".to_string();
    }
    if elapsed < Duration::hours(1) {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed < Duration::hours(24) {
        return format!("{}h ago", elapsed.num_hours());
    }
    if elapsed.num_days() == 1 {
        return "Yesterday".to_string();
    }
    ts.format("%b %-d").to_string()
}

/// Format a call timestamp by calendar day (UTC) relative to `now`.
///
/// `Today 2:45 PM`, `Yest 9:05 AM`, or `Oct 3 11:30 AM`.
pub fn format_call_time(ts: Timestamp, now: Timestamp) -> String {
    let clock = ts.format("%-I:%M %p");
    let day = ts.date_naive();
    let today = now.date_naive();

    if day == today {
        format!("Today {clock}")
    } else if today.pred_opt() == Some(day) {
        format!("Yest {clock}")
    } else {
        format!("{} {clock}", ts.format("%b %-d"))
    }
}

/// Format a timestamp as a short absolute date, e.g. `Oct 3, 2026`.
pub fn format_short_date(ts: Timestamp) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Format a whole-dollar amount, abbreviating thousands.
///
/// `127500` becomes `$127.5K`; `950` stays `$950`.
pub fn format_currency(amount: i64) -> String {
    if amount >= CURRENCY_THOUSANDS_THRESHOLD {
        format!("${:.1}K", amount as f64 / 1000.0)
    } else {
        format!("${amount}")
    }
}

/// Join name parts into a display name, omitting a missing or blank surname.
pub fn full_name(first: &str, last: Option<&str>) -> String {
    let first = first.trim();
    match last.map(str::trim).filter(|l| !l.is_empty()) {
        Some(last) if first.is_empty() => last.to_string(),
        Some(last) => format!("{first} {last}"),
        None => first.to_string(),
    }
}

/// Display name of a joined contact, or `None` when there is no contact or
/// every name part is blank. Callers pick the sentinel.
pub fn contact_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = full_name(first?, last);
    (!name.is_empty()).then_some(name)
}

/// Return the value, or [`EMPTY_PLACEHOLDER`] when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_PLACEHOLDER.to_string(),
    }
}
