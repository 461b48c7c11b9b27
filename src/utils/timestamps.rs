use chrono::{DateTime, Utc};

fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

/// Format a history timestamp for the session list: "2025-01-15 09:30"
///
/// Out-of-range values fall back to the raw millisecond count.
pub fn format_list_timestamp(ms: i64) -> String {
    match from_millis(ms) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => ms.to_string(),
    }
}

/// Format a history timestamp for a document header: "Jan 15, 2025"
pub fn format_export_date(ms: i64) -> String {
    match from_millis(ms) {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => String::new(),
    }
}
