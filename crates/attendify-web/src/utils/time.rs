/// Time formatting utilities
///
/// Human-friendly relative timestamps for the session display.

use chrono::{DateTime, Duration, Utc};

/// Format a timestamp relative to now (e.g. "just now", "5 minutes ago").
/// Timestamps older than a week fall back to the plain date.
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(timestamp);

    if diff < Duration::zero() {
        return "in the future".to_string();
    }

    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        plural(diff.num_minutes(), "minute")
    } else if diff.num_hours() < 24 {
        plural(diff.num_hours(), "hour")
    } else if diff.num_days() < 7 {
        plural(diff.num_days(), "day")
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_timestamps_are_just_now() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
        assert_eq!(format_relative_time(Utc::now() - Duration::seconds(30)), "just now");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(format_relative_time(Utc::now() - Duration::minutes(1)), "1 minute ago");
        assert_eq!(format_relative_time(Utc::now() - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(format_relative_time(Utc::now() - Duration::hours(3)), "3 hours ago");
    }

    #[test]
    fn test_days_then_plain_date() {
        assert_eq!(format_relative_time(Utc::now() - Duration::days(2)), "2 days ago");

        let old = Utc::now() - Duration::days(30);
        assert_eq!(format_relative_time(old), old.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_future_timestamps() {
        assert_eq!(
            format_relative_time(Utc::now() + Duration::minutes(10)),
            "in the future"
        );
    }
}
