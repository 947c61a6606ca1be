//! Boolean checks for dates, times, and durations
//!
//! Ordering and range membership for chrono's date/time types - the
//! functions are generic over `PartialOrd`, so they apply equally to
//! `NaiveDate`, `NaiveTime`, `NaiveDateTime`, and `DateTime<Tz>` - plus
//! zero/length checks for `std::time::Duration`. Past/future checks
//! compare against `Utc::now()` at the moment of the call.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// True if the value is strictly before the bound.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use breakwater::check::time;
///
/// let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert!(time::is_before(&d1, &d2));
/// assert!(!time::is_before(&d2, &d1));
/// assert!(!time::is_before(&d1, &d1));
/// ```
#[inline]
pub fn is_before<T: PartialOrd>(value: &T, bound: &T) -> bool {
    value < bound
}

/// True if the value is strictly after the bound.
#[inline]
pub fn is_after<T: PartialOrd>(value: &T, bound: &T) -> bool {
    value > bound
}

/// True if `start <= value <= end`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use breakwater::check::time;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let mid = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert!(time::is_between(&mid, &start, &end));
/// assert!(time::is_between(&start, &start, &end));
/// ```
#[inline]
pub fn is_between<T: PartialOrd>(value: &T, start: &T, end: &T) -> bool {
    value >= start && value <= end
}

/// True if the instant lies before the current UTC time.
#[inline]
pub fn is_in_past(value: &DateTime<Utc>) -> bool {
    *value < Utc::now()
}

/// True if the instant lies after the current UTC time.
#[inline]
pub fn is_in_future(value: &DateTime<Utc>) -> bool {
    *value > Utc::now()
}

/// True if the duration is zero.
#[inline]
pub fn is_zero_duration(value: &Duration) -> bool {
    value.is_zero()
}

/// True if the duration is strictly longer than the bound.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use breakwater::check::time;
///
/// assert!(time::is_longer_than(&Duration::from_secs(90), &Duration::from_secs(60)));
/// assert!(!time::is_longer_than(&Duration::from_secs(60), &Duration::from_secs(60)));
/// ```
#[inline]
pub fn is_longer_than(value: &Duration, bound: &Duration) -> bool {
    value > bound
}

/// True if the duration is strictly shorter than the bound.
#[inline]
pub fn is_shorter_than(value: &Duration, bound: &Duration) -> bool {
    value < bound
}
