//! Timestamp parsing and session-window validation.
//!
//! The source tables author times in three shapes: slot tables and social
//! events use `2020-07-06_05:00:00`, zoom exports use ISO8601 UTC
//! (`2020-07-06T05:00:00Z`), and a few hand-maintained sheets use
//! `06/07/2020 05:00:00`. All of them are GMT; parsing normalizes to
//! `DateTime<Utc>`.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{DataError, Result};

/// Slot-table and social-event timestamp format
pub const SLOT_TIME_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Zoom-export timestamp format
pub const ISO_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Day-first format used by hand-maintained sheets
pub const DAY_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Parse a slot-table timestamp, e.g. `2020-07-06_05:00:00`.
pub fn parse_slot_time(value: &str) -> Result<DateTime<Utc>> {
    parse_with(value, SLOT_TIME_FORMAT)
}

/// Parse a zoom-export timestamp, e.g. `2020-07-06T05:00:00Z`.
pub fn parse_iso_utc(value: &str) -> Result<DateTime<Utc>> {
    parse_with(value, ISO_UTC_FORMAT)
}

/// Parse a day-first timestamp, e.g. `06/07/2020 05:00:00`.
pub fn parse_day_time(value: &str) -> Result<DateTime<Utc>> {
    parse_with(value, DAY_TIME_FORMAT)
}

fn parse_with(value: &str, format: &'static str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, format)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| DataError::MalformedTimestamp {
            value: value.to_string(),
            expected: format,
        })
}

/// Resolve a session window: when no explicit end is given, the session runs
/// `default_length_hr` hours from its start. The resolved window is
/// validated, never silently swapped.
pub fn session_window(
    session: &str,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    default_length_hr: i64,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let end = end.unwrap_or(start + Duration::hours(default_length_hr));
    check_window(session, start, end)?;
    Ok((start, end))
}

/// Require `start < end` for a session window.
pub fn check_window(session: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    if start >= end {
        return Err(DataError::InvalidSessionWindow {
            session: session.to_string(),
            start,
            end,
        });
    }
    Ok(())
}

/// Require a window to fall within one calendar day and return that day.
///
/// The per-day calendar aggregation groups by the start date, so a window
/// crossing midnight cannot be represented and is rejected.
pub fn session_day(session: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<NaiveDate> {
    let start_day = start.date_naive();
    let end_day = end.date_naive();
    if start_day != end_day {
        return Err(DataError::SessionSpansMultipleDays {
            session: session.to_string(),
            start_day,
            end_day,
        });
    }
    Ok(start_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_time() {
        let parsed = parse_slot_time("2020-07-06_05:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_iso_utc() {
        let parsed = parse_iso_utc("2020-07-06T05:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_day_time() {
        let parsed = parse_day_time("06/07/2020 05:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_timestamp() {
        let err = parse_slot_time("2020-07-06 05:00:00").unwrap_err();
        assert!(matches!(
            err,
            DataError::MalformedTimestamp { expected, .. } if expected == SLOT_TIME_FORMAT
        ));
    }

    #[test]
    fn test_session_window_default_end() {
        let start = Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap();
        let (resolved_start, resolved_end) = session_window("slot 1A", start, None, 1).unwrap();
        assert_eq!(resolved_start, start);
        assert_eq!(resolved_end, start + Duration::hours(1));
    }

    #[test]
    fn test_session_window_explicit_end() {
        let start = Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 7, 6, 8, 30, 0).unwrap();
        let (_, resolved_end) = session_window("slot 1A", start, Some(end), 1).unwrap();
        assert_eq!(resolved_end, end);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let start = Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 7, 6, 4, 0, 0).unwrap();
        let err = check_window("social S1", start, end).unwrap_err();
        assert!(matches!(err, DataError::InvalidSessionWindow { session, .. } if session == "social S1"));
    }

    #[test]
    fn test_zero_length_window_rejected() {
        let start = Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap();
        assert!(check_window("slot 1A", start, start).is_err());
    }

    #[test]
    fn test_session_day() {
        let start = Utc.with_ymd_and_hms(2020, 7, 6, 5, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 7, 6, 23, 59, 59).unwrap();
        assert_eq!(
            session_day("x", start, end).unwrap(),
            NaiveDate::from_ymd_opt(2020, 7, 6).unwrap()
        );
    }

    #[test]
    fn test_cross_midnight_rejected() {
        let start = Utc.with_ymd_and_hms(2020, 7, 6, 23, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2020, 7, 7, 1, 0, 0).unwrap();
        let err = session_day("workshop W1 session Late", start, end).unwrap_err();
        assert!(matches!(err, DataError::SessionSpansMultipleDays { .. }));
    }
}
