//! Display formatting for epoch-millisecond timestamps.

use chrono::{Local, TimeZone};

/// `strftime` pattern used for every displayed timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a timestamp as local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
///
/// Returns an empty string for `0` (unknown) or an out-of-range value.
pub fn format_timestamp(timestamp_ms: i64) -> String {
    format_timestamp_in(timestamp_ms, &Local)
}

/// Like [`format_timestamp`], in an explicit time zone.
///
/// ```
/// use chatlens::analysis::format_timestamp_in;
/// use chrono::Utc;
///
/// assert_eq!(format_timestamp_in(1705315800000, &Utc), "2024-01-15 10:50:00");
/// assert_eq!(format_timestamp_in(0, &Utc), "");
/// ```
pub fn format_timestamp_in<Tz>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if timestamp_ms == 0 {
        return String::new();
    }
    tz.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}
