use chrono::{DateTime, Local, Utc};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const WEEK: f64 = 604_800.0;
const MONTH: f64 = 2_592_000.0;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Human readable age of `timestamp` relative to `now`, both Unix seconds.
///
/// Ages past thirty days are shown as a local calendar date.
pub fn format_time_ago(timestamp: f64, now: f64) -> String {
    if timestamp == 0.0 {
        return "Never".to_string();
    }

    let diff = now - timestamp;
    if diff < MINUTE {
        return "Just now".to_string();
    }
    if diff < HOUR {
        return plural((diff / MINUTE) as i64, "minute");
    }
    if diff < DAY {
        return plural((diff / HOUR) as i64, "hour");
    }
    if diff < 2.0 * DAY {
        return "Yesterday".to_string();
    }
    if diff < WEEK {
        return format!("{} days ago", (diff / DAY) as i64);
    }
    if diff < MONTH {
        return plural((diff / WEEK) as i64, "week");
    }

    let secs = timestamp.trunc() as i64;
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(date) => date.with_timezone(&Local).format("%B %d, %Y").to_string(),
        None => "Never".to_string(),
    }
}

/// Current wall-clock time as Unix seconds.
pub fn unix_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
