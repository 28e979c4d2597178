//! Expiry date arithmetic shared by the expiry checks.

use chrono::{DateTime, Utc};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Whole days from `now` until `expiry`, truncated toward zero.
/// Negative once the date has passed.
pub fn whole_days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (expiry - now).num_days()
}

/// Days from `now` until `expiry`, rounded up so a remainder of 1.2 days
/// displays as 2 days.
pub fn days_until_ceil(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((expiry - now).num_milliseconds() as f64 / MS_PER_DAY).ceil() as i64
}

/// Formats a date for user-facing copy, e.g. "January 1, 1970".
pub fn format_long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
