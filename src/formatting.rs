// src/formatting.rs
//
// Display formatting for timestamps coming back from the backend.
//
// Output follows en-US conventions: `02:30 PM` and `Jan 5, 2024`.
// Invalid input never fails; it renders as "Invalid Date".

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

const TIME_FORMAT: &str = "%I:%M %p";
const DATE_FORMAT: &str = "%b %-d, %Y";

/// A point in time as the backend or UI hands it over.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// RFC 3339 / ISO 8601 text. Date-times without an offset are read in
    /// the target timezone; bare dates are UTC midnight.
    Text(String),
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp::Millis(ms)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Timestamp::Millis(dt.timestamp_millis())
    }
}

impl Timestamp {
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            Timestamp::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .map(|dt| dt.with_timezone(tz)),
            Timestamp::Text(text) => parse_text(text.trim(), tz),
        }
    }
}

fn parse_text<Tz: TimeZone>(text: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(tz));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

fn format_in<Tz>(ts: Timestamp, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match ts.resolve(tz) {
        Some(dt) => dt.format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Hour and minute in local time, e.g. `02:30 PM`.
pub fn format_time(ts: impl Into<Timestamp>) -> String {
    format_time_in(ts, &Local)
}

/// Month, day and year in local time, e.g. `Jan 5, 2024`.
pub fn format_date(ts: impl Into<Timestamp>) -> String {
    format_date_in(ts, &Local)
}

pub fn format_time_in<Tz>(ts: impl Into<Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(ts.into(), tz, TIME_FORMAT)
}

pub fn format_date_in<Tz>(ts: impl Into<Timestamp>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(ts.into(), tz, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_time_from_rfc3339() {
        assert_eq!(format_time_in("2024-03-09T14:05:00Z", &Utc), "02:05 PM");
        assert_eq!(format_time_in("2024-03-09T09:30:00Z", &Utc), "09:30 AM");
    }

    #[test]
    fn test_date_from_rfc3339() {
        assert_eq!(format_date_in("2024-01-05T10:00:00Z", &Utc), "Jan 5, 2024");
    }

    #[test]
    fn test_epoch_millis() {
        // 2023-11-14T22:13:20Z
        let ms = 1_700_000_000_000_i64;
        assert_eq!(format_time_in(ms, &Utc), "10:13 PM");
        assert_eq!(format_date_in(ms, &Utc), "Nov 14, 2023");
    }

    #[test]
    fn test_converted_to_target_timezone() {
        let central = FixedOffset::west_opt(6 * 3600).unwrap();
        assert_eq!(format_time_in("2024-03-09T02:00:00Z", &central), "08:00 PM");
        assert_eq!(format_date_in("2024-03-09T02:00:00Z", &central), "Mar 8, 2024");
    }

    #[test]
    fn test_naive_datetime_read_in_target_timezone() {
        let central = FixedOffset::west_opt(6 * 3600).unwrap();
        assert_eq!(format_time_in("2024-03-09T07:45:10.250", &central), "07:45 AM");
    }

    #[test]
    fn test_bare_date_is_utc_midnight() {
        assert_eq!(format_date_in("2024-07-04", &Utc), "Jul 4, 2024");
        assert_eq!(format_time_in("2024-07-04", &Utc), "12:00 AM");
    }

    #[test]
    fn test_invalid_input_renders_invalid_date() {
        assert_eq!(format_time_in("not a date", &Utc), INVALID_DATE);
        assert_eq!(format_date_in("", &Utc), INVALID_DATE);
        assert_eq!(format_date_in(i64::MAX, &Utc), INVALID_DATE);
    }

    #[test]
    fn test_local_variants_do_not_panic() {
        assert_eq!(format_date("garbage"), INVALID_DATE);
        assert!(!format_time(Utc::now()).is_empty());
    }
}
