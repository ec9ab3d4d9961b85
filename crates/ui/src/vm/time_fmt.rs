use chrono::{DateTime, Utc};

/// `m:ss` between two instants; negative spans read as zero.
#[must_use]
pub fn format_elapsed(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> String {
    let secs = (completed_at - started_at).num_seconds().max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}
