//! Time helpers: epoch-millisecond clock and user-facing date formatting

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Current time in epoch milliseconds.
///
/// Message timestamps and chat ids are both derived from this clock.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a date in long calendar form, e.g. `"March 3, 2025"`.
///
/// This is the default name given to a newly created chat.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Today's date in long calendar form, in the local timezone.
pub fn today_long_date() -> String {
    format_long_date(Local::now().date_naive())
}

/// Localized timestamp label shown under each message, e.g. `"3/3/2025 14:05"`.
///
/// Out-of-range timestamps fall back to the raw millisecond value rather
/// than panicking; such values only occur with a corrupted document.
pub fn format_timestamp_label(timestamp_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%-m/%-d/%Y %H:%M")
            .to_string(),
        None => timestamp_millis.to_string(),
    }
}
