//! Display formatting for user-facing values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Out-of-range values fall back to the raw number so the welcome screen
/// still renders.
pub fn format_timestamp_ms(ms: i64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| ms.to_string())
}
