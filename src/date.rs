use crate::types::Timestamp;
use chrono::{DateTime, Datelike, Utc};

const MS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Repositories older than this many (rounded) days get a calendar date.
const RELATIVE_DAYS_LIMIT: i64 = 30;

/// Format a repository's last-updated time relative to `now`.
///
/// Produces `"3 hours ago"`, `"yesterday"`, `"12 days ago"`, or a calendar
/// date such as `"on Mar 05"` / `"on Mar 05, 2023"` once the update is more
/// than 30 days old. Hours and days are both rounded from the absolute
/// difference, so a timestamp slightly in the future reads the same as one
/// in the past.
pub fn format_updated(updated: &Timestamp, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - updated.instant()).num_milliseconds().abs() as f64;
    let hours_ago = (elapsed_ms / MS_PER_HOUR).round() as i64;
    let days_ago = (elapsed_ms / MS_PER_DAY).round() as i64;

    if days_ago > RELATIVE_DAYS_LIMIT {
        return calendar_date(updated, now);
    }

    if hours_ago < 24 {
        format!("{} hours ago", hours_ago)
    } else if days_ago < 2 {
        "yesterday".to_string()
    } else {
        format!("{} days ago", days_ago)
    }
}

// Month, day and year all come from the same calendar date: the one written
// in the raw timestamp's own offset.
fn calendar_date(updated: &Timestamp, now: DateTime<Utc>) -> String {
    let local = updated.local();
    let month = local.format("%b");
    let day = match updated.day_of_month_text() {
        "" => format!("{:02}", local.day()),
        text => text.to_string(),
    };

    if local.year() != now.year() {
        format!("on {} {}, {}", month, day, local.year())
    } else {
        format!("on {} {}", month, day)
    }
}
