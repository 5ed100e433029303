//! Relative time labels.
//!
//! Every function takes the reference instant explicitly. Callers pass the
//! current wall clock on each render; nothing here is cached.

use chrono::{DateTime, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Which wording an expiry label uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStyle {
    /// "22h left", used on feed cards.
    Compact,
    /// "Expires in 22h", used on the detail screen.
    Verbose,
}

fn rounded_div(n: i64, d: i64) -> i64 {
    (n as f64 / d as f64).round() as i64
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Distance between two instants in words, without a suffix.
///
/// "less than a minute", "15 minutes", "about 2 hours", "3 days",
/// "about 1 month", "5 months", "over 3 years".
pub fn distance_in_words(now: DateTime<Utc>, ts: DateTime<Utc>) -> String {
    let seconds = (now - ts).num_seconds().abs();
    let minutes = rounded_div(seconds, 60);

    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 2 {
        return "1 minute".to_string();
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = rounded_div(minutes, 60);
        return format!("about {hours} hours");
    }
    if minutes < 2520 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = rounded_div(minutes, MINUTES_IN_DAY);
        return plural(days, "day", "days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = rounded_div(minutes, MINUTES_IN_MONTH);
        return format!("about {}", plural(months, "month", "months"));
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return plural(rounded_div(minutes, MINUTES_IN_MONTH), "month", "months");
    }

    let years = months / 12;
    let remainder = months % 12;
    if remainder < 3 {
        format!("about {}", plural(years, "year", "years"))
    } else if remainder < 9 {
        format!("over {}", plural(years, "year", "years"))
    } else {
        format!("almost {}", plural(years + 1, "year", "years"))
    }
}

/// "15 minutes ago" for past instants, "in 2 hours" for future ones.
pub fn time_ago(now: DateTime<Utc>, ts: DateTime<Utc>) -> String {
    let words = distance_in_words(now, ts);
    if ts > now {
        format!("in {words}")
    } else {
        format!("{words} ago")
    }
}

/// Whole hours until `expires_at`, truncated toward zero.
pub fn hours_left(now: DateTime<Utc>, expires_at: DateTime<Utc>) -> i64 {
    (expires_at - now).num_hours()
}

/// Remaining lifetime label for a plot.
pub fn expiry_label(now: DateTime<Utc>, expires_at: DateTime<Utc>, style: ExpiryStyle) -> String {
    let hours = hours_left(now, expires_at);
    if hours <= 0 {
        return "Expiring soon".to_string();
    }
    match style {
        ExpiryStyle::Compact => format!("{hours}h left"),
        ExpiryStyle::Verbose => format!("Expires in {hours}h"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ago(now: DateTime<Utc>, d: Duration) -> String {
        time_ago(now, now - d)
    }

    #[test]
    fn test_minutes() {
        let now = Utc::now();
        assert_eq!(ago(now, Duration::seconds(10)), "less than a minute ago");
        assert_eq!(ago(now, Duration::seconds(40)), "1 minute ago");
        assert_eq!(ago(now, Duration::minutes(15)), "15 minutes ago");
        assert_eq!(ago(now, Duration::minutes(44)), "44 minutes ago");
    }

    #[test]
    fn test_hours_and_days() {
        let now = Utc::now();
        assert_eq!(ago(now, Duration::minutes(60)), "about 1 hour ago");
        assert_eq!(ago(now, Duration::minutes(120)), "about 2 hours ago");
        assert_eq!(ago(now, Duration::hours(5)), "about 5 hours ago");
        assert_eq!(ago(now, Duration::hours(30)), "1 day ago");
        assert_eq!(ago(now, Duration::days(3)), "3 days ago");
    }

    #[test]
    fn test_months_and_years() {
        let now = Utc::now();
        assert_eq!(ago(now, Duration::days(40)), "about 1 month ago");
        assert_eq!(ago(now, Duration::days(150)), "5 months ago");
        assert_eq!(ago(now, Duration::days(365)), "about 1 year ago");
        assert_eq!(ago(now, Duration::days(365 * 3 + 150)), "over 3 years ago");
    }

    #[test]
    fn test_future_suffix() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now + Duration::minutes(30)), "in 30 minutes");
    }

    #[test]
    fn test_distance_without_suffix() {
        let now = Utc::now();
        assert_eq!(distance_in_words(now, now - Duration::minutes(5)), "5 minutes");
    }

    #[test]
    fn test_expiry_labels() {
        let now = Utc::now();
        let later = now + Duration::hours(23) - Duration::seconds(1);
        assert_eq!(hours_left(now, later), 22);
        assert_eq!(expiry_label(now, later, ExpiryStyle::Compact), "22h left");
        assert_eq!(expiry_label(now, later, ExpiryStyle::Verbose), "Expires in 22h");
        assert_eq!(
            expiry_label(now, now + Duration::minutes(40), ExpiryStyle::Compact),
            "Expiring soon"
        );
        assert_eq!(
            expiry_label(now, now - Duration::hours(2), ExpiryStyle::Compact),
            "Expiring soon"
        );
    }
}
