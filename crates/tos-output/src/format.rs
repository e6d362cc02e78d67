//! Human-readable durations and timestamps.

use chrono::DateTime;

/// Format whole seconds as `"Xh Ym"` (≥ 1 hour) or `"Xm Ys"`.
///
/// Negative input yields `"negative"`.
pub fn format_duration(secs: i64) -> String {
    if secs < 0 {
        return "negative".to_owned();
    }
    if secs >= 3_600 {
        format!("{}h {}m", secs / 3_600, (secs % 3_600) / 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format epoch milliseconds as UTC `YYYY-MM-DD HH:MM:SS`.
///
/// Out-of-range timestamps fall back to the raw millisecond value.
pub fn format_timestamp_ms(ms: i64) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{ms} ms"),
    }
}
