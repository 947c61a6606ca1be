//! Date, time, and duration assertions
//!
//! Mirrors of [`check::time`](crate::check::time) that return the value
//! on success. The ordering assertions are generic over `PartialOrd`, so
//! they apply to any chrono type; the default noun is `"Date Time"`, with
//! `date_between` / `time_between` narrowing it to `"Date"` and `"Time"`.
//! Duration faults render both sides through
//! [`human::duration`](crate::human::duration).

use crate::check::time;
use crate::error::{label_or, noun, CheckError};
use crate::human;
use chrono::{NaiveDate, NaiveTime};
use std::fmt::Display;
use std::time::Duration;

/// Require the value to lie strictly before the bound.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use breakwater::require;
///
/// let d1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let err = require::time::before(d1, d2, "Deadline").unwrap_err();
/// assert_eq!(err.to_string(), "Deadline is not before 2024-01-01, was 2024-06-01");
/// ```
pub fn before<'l, T>(value: T, bound: T, label: impl Into<Option<&'l str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if time::is_before(&value, &bound) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::DATE_TIME),
            format!("is not before {bound}, was {value}"),
        ))
    }
}

/// Require the value to lie strictly after the bound.
pub fn after<'l, T>(value: T, bound: T, label: impl Into<Option<&'l str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if time::is_after(&value, &bound) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::DATE_TIME),
            format!("is not after {bound}, was {value}"),
        ))
    }
}

/// Require `start <= value <= end`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use breakwater::require;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let late = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let err = require::time::between(late, start, end, None).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Date Time is not between 2024-01-01 and 2024-12-31, was 2025-03-01",
/// );
/// ```
pub fn between<'l, T>(
    value: T,
    start: T,
    end: T,
    label: impl Into<Option<&'l str>>,
) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if time::is_between(&value, &start, &end) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::DATE_TIME),
            format!("is not between {start} and {end}, was {value}"),
        ))
    }
}

/// [`between`] for calendar dates; the default noun is `"Date"`.
pub fn date_between<'l>(
    value: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
    label: impl Into<Option<&'l str>>,
) -> Result<NaiveDate, CheckError> {
    if time::is_between(&value, &start, &end) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::DATE),
            format!("is not between {start} and {end}, was {value}"),
        ))
    }
}

/// [`between`] for times of day; the default noun is `"Time"`.
pub fn time_between<'l>(
    value: NaiveTime,
    start: NaiveTime,
    end: NaiveTime,
    label: impl Into<Option<&'l str>>,
) -> Result<NaiveTime, CheckError> {
    if time::is_between(&value, &start, &end) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::TIME),
            format!("is not between {start} and {end}, was {value}"),
        ))
    }
}

/// Require the duration to be at most `max`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use breakwater::require;
///
/// let err = require::time::max_duration(
///     Duration::from_secs(5415),
///     Duration::from_secs(3600),
///     "Timeout",
/// )
/// .unwrap_err();
/// assert_eq!(err.to_string(), "Timeout is longer than 1h, was 1h 30m 15s");
/// ```
pub fn max_duration<'l>(
    value: Duration,
    max: Duration,
    label: impl Into<Option<&'l str>>,
) -> Result<Duration, CheckError> {
    if !time::is_longer_than(&value, &max) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::DURATION),
            format!("is longer than {}, was {}", human::duration(max), human::duration(value)),
        ))
    }
}

/// Require the duration to be at least `min`.
pub fn min_duration<'l>(
    value: Duration,
    min: Duration,
    label: impl Into<Option<&'l str>>,
) -> Result<Duration, CheckError> {
    if !time::is_shorter_than(&value, &min) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::DURATION),
            format!("is shorter than {}, was {}", human::duration(min), human::duration(value)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_before_after() {
        let early = date(2024, 1, 1);
        let late = date(2024, 6, 1);
        assert_eq!(before(early, late, None).unwrap(), early);
        assert_eq!(after(late, early, None).unwrap(), late);

        let err = before(late, early, "Deadline").unwrap_err();
        assert_eq!(err.to_string(), "Deadline is not before 2024-01-01, was 2024-06-01");
        let err = after(early, late, None).unwrap_err();
        assert_eq!(err.to_string(), "Date Time is not after 2024-06-01, was 2024-01-01");
    }

    #[test]
    fn test_between_default_noun() {
        let start = date(2024, 1, 1);
        let end = date(2024, 12, 31);
        assert!(between(date(2024, 6, 15), start, end, None).is_ok());

        let err = between(date(2025, 3, 1), start, end, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Date Time is not between 2024-01-01 and 2024-12-31, was 2025-03-01"
        );
    }

    #[test]
    fn test_date_between_noun() {
        let err =
            date_between(date(2025, 1, 1), date(2024, 1, 1), date(2024, 12, 31), None).unwrap_err();
        assert!(err.to_string().starts_with("Date is not between "));
    }

    #[test]
    fn test_time_between_noun() {
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        assert!(time_between(t(12), t(9), t(17), None).is_ok());
        let err = time_between(t(20), t(9), t(17), None).unwrap_err();
        assert_eq!(err.to_string(), "Time is not between 09:00:00 and 17:00:00, was 20:00:00");
    }

    #[test]
    fn test_duration_bounds_render_human_readable() {
        let err = max_duration(Duration::from_secs(5415), Duration::from_secs(3600), "Timeout")
            .unwrap_err();
        assert_eq!(err.to_string(), "Timeout is longer than 1h, was 1h 30m 15s");

        let err =
            min_duration(Duration::ZERO, Duration::from_secs(1), None).unwrap_err();
        assert_eq!(err.to_string(), "Duration is shorter than 1s, was 0s");

        assert!(max_duration(Duration::from_secs(1), Duration::from_secs(1), None).is_ok());
        assert!(min_duration(Duration::from_secs(1), Duration::from_secs(1), None).is_ok());
    }
}
