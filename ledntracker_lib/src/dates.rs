//! Long-form rendering of the timestamps the accounts API returns.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::messages::NOT_AVAILABLE;

/// Formats an ISO-ish timestamp as e.g. `January 5, 2023 at 3:45 PM` (UTC).
///
/// Returns `None` for input that does not parse as a date.
pub fn format_date_time(input: &str) -> Option<String> {
    let parsed = parse_date_time(input)?;
    Some(parsed.format("%B %-d, %Y at %-I:%M %p").to_string())
}

/// Like [`format_date_time`], but renders `N/A` for absent or invalid input.
pub fn display_date(input: Option<&str>) -> String {
    input
        .and_then(format_date_time)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn parse_date_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
