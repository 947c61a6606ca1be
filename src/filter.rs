//! The `Option` response style
//!
//! Each function mirrors a boolean check and hands the value back wrapped
//! in `Some` when the check passes, `None` otherwise - filter by
//! predicate, nothing more. [`passing`] is the generic entry point; the
//! named functions cover the checks that come up most in pipelines.
//!
//! # Example
//!
//! ```rust
//! use breakwater::filter;
//!
//! let display_name = filter::not_blank("  ")
//!     .or_else(|| filter::not_blank("fallback"))
//!     .unwrap();
//! assert_eq!(display_name, "fallback");
//! ```

use crate::check::{self, collection, number, pattern, string, time};
use crate::predicate::Predicate;
use regex::Regex;
use std::path::Path;

/// Hand the value back iff the predicate holds.
///
/// The generic mirror of the whole boolean core: any check (or closure)
/// becomes a filter.
///
/// # Example
///
/// ```rust
/// use breakwater::check::string;
/// use breakwater::filter;
///
/// assert_eq!(filter::passing(7, |n: &i32| *n % 2 == 1), Some(7));
/// assert_eq!(filter::passing(8, |n: &i32| *n % 2 == 1), None);
/// assert_eq!(filter::passing("x", string::is_not_empty), Some("x"));
/// ```
pub fn passing<T, U, P>(value: T, predicate: P) -> Option<T>
where
    T: std::borrow::Borrow<U>,
    U: ?Sized,
    P: Predicate<U>,
{
    if predicate.check(value.borrow()) {
        Some(value)
    } else {
        None
    }
}

/// The string iff it is non-empty.
pub fn not_empty<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, string::is_not_empty)
}

/// The string iff it contains a non-whitespace character.
///
/// # Example
///
/// ```rust
/// use breakwater::filter;
///
/// assert_eq!(filter::not_blank("hello"), Some("hello"));
/// assert_eq!(filter::not_blank("   "), None);
/// ```
pub fn not_blank<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, string::is_not_blank)
}

/// The string iff its byte length is within bounds (inclusive).
pub fn length_between<S: AsRef<str>>(value: S, min: usize, max: usize) -> Option<S> {
    passing_as_str(value, |s| string::has_length_between(s, min, max))
}

/// The string iff it is an email address.
///
/// # Example
///
/// ```rust
/// use breakwater::filter;
///
/// assert_eq!(filter::email("a@b.com"), Some("a@b.com"));
/// assert_eq!(filter::email("a@@b.com"), None);
/// ```
pub fn email<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, pattern::is_email)
}

/// The string iff it is a URL with scheme and authority.
pub fn url<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, pattern::is_url)
}

/// The string iff it is an RFC 1123 hostname.
pub fn hostname<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, pattern::is_hostname)
}

/// The string iff it is an IPv4 or IPv6 address.
pub fn ip_address<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, pattern::is_ip_address)
}

/// The string iff it is a canonical UUID.
pub fn uuid<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, pattern::is_uuid)
}

/// The string iff it passes the JSON delimiter sniff.
pub fn json<S: AsRef<str>>(value: S) -> Option<S> {
    passing_as_str(value, pattern::is_json)
}

/// The string iff it matches the given pattern.
pub fn matching<S: AsRef<str>>(value: S, re: &Regex) -> Option<S> {
    passing_as_str(value, |s| pattern::matches(s, re))
}

/// The number iff it is strictly positive.
///
/// # Example
///
/// ```rust
/// use breakwater::filter;
///
/// assert_eq!(filter::positive(10), Some(10));
/// assert_eq!(filter::positive(0), None);
/// ```
pub fn positive<T: PartialOrd + Default>(value: T) -> Option<T> {
    passing(value, |v: &T| number::is_positive(v))
}

/// The number iff it is zero or above.
pub fn not_negative<T: PartialOrd + Default>(value: T) -> Option<T> {
    passing(value, |v: &T| number::is_not_negative(v))
}

/// The value iff `min <= value <= max`.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> Option<T> {
    passing(value, |v: &T| number::is_in_range(v, &min, &max))
}

/// The value iff `start <= value <= end`; works for chrono's date and
/// time types through `PartialOrd`.
pub fn between<T: PartialOrd>(value: T, start: T, end: T) -> Option<T> {
    passing(value, |v: &T| time::is_between(v, &start, &end))
}

/// The vector iff it has at least one element.
///
/// # Example
///
/// ```rust
/// use breakwater::filter;
///
/// assert_eq!(filter::non_empty(vec![1, 2]), Some(vec![1, 2]));
/// assert_eq!(filter::non_empty(Vec::<i32>::new()), None);
/// ```
pub fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    passing(items, |v: &Vec<T>| collection::is_not_empty(v))
}

/// The parsed, tidied path iff the string can name one.
///
/// The `Option` mirror of [`human::parse_path`](crate::human::parse_path):
/// empty, whitespace-only, and NUL-bearing input comes back as `None`
/// rather than an error.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use breakwater::filter;
///
/// assert_eq!(filter::path("/var/./log"), Some(PathBuf::from("/var/log")));
/// assert_eq!(filter::path(""), None);
/// ```
pub fn path(value: &str) -> Option<std::path::PathBuf> {
    crate::human::parse_path(value)
}

/// The path iff it exists on the filesystem.
pub fn existing<P: AsRef<Path>>(value: P) -> Option<P> {
    if check::path::exists(value.as_ref()) {
        Some(value)
    } else {
        None
    }
}

/// The path iff it exists and is a regular file.
pub fn file<P: AsRef<Path>>(value: P) -> Option<P> {
    if check::path::is_file(value.as_ref()) {
        Some(value)
    } else {
        None
    }
}

/// The path iff it exists and is a directory.
pub fn directory<P: AsRef<Path>>(value: P) -> Option<P> {
    if check::path::is_directory(value.as_ref()) {
        Some(value)
    } else {
        None
    }
}

// The string mirrors all check through here so they can hand back the
// caller's own type, borrowed or owned.
fn passing_as_str<S: AsRef<str>, F: Fn(&str) -> bool>(value: S, check: F) -> Option<S> {
    if check(value.as_ref()) {
        Some(value)
    } else {
        None
    }
}
