use chrono::{DateTime, Utc};

/// Format a timestamp as a calendar date (`YYYY-MM-DD`), truncating the
/// time of day. A missing timestamp becomes an empty string.
pub fn format_date(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
