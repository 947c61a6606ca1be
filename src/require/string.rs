//! String assertions
//!
//! Mirrors of [`check::string`](crate::check::string) and
//! [`check::pattern`](crate::check::pattern) that return the string on
//! success. The default noun is `"String"`. Length and format faults
//! embed the offending value.

use crate::check::{pattern, string};
use crate::error::{label_or, noun, CheckError};
use regex::Regex;

/// Require a non-empty string.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// assert_eq!(require::string::not_empty("a", "Id").unwrap(), "a");
///
/// let err = require::string::not_empty("", None).unwrap_err();
/// assert_eq!(err.to_string(), "String is empty");
/// ```
pub fn not_empty<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    if string::is_not_empty(value.as_ref()) {
        Ok(value)
    } else {
        Err(CheckError::invalid(label_or(label, noun::STRING), "is empty"))
    }
}

/// Require a string with at least one non-whitespace character.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::string::not_blank("  \t", "Name").unwrap_err();
/// assert_eq!(err.to_string(), "Name is blank");
/// ```
pub fn not_blank<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    if string::is_not_blank(value.as_ref()) {
        Ok(value)
    } else {
        Err(CheckError::invalid(label_or(label, noun::STRING), "is blank"))
    }
}

/// Require an exact byte length.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::string::length("ab", 3, "Code").unwrap_err();
/// assert_eq!(err.to_string(), "Code has length 2, expected 3, was \"ab\"");
/// ```
pub fn length<'a, S: AsRef<str>>(
    value: S,
    expected: usize,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    let s = value.as_ref();
    if string::has_length(s, expected) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::STRING),
            format!("has length {}, expected {}, was {:?}", s.len(), expected, s),
        ))
    }
}

/// Require a minimum byte length.
pub fn min_length<'a, S: AsRef<str>>(
    value: S,
    min: usize,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    let s = value.as_ref();
    if string::has_min_length(s, min) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::STRING),
            format!("has length {}, expected at least {}, was {:?}", s.len(), min, s),
        ))
    }
}

/// Require a maximum byte length.
pub fn max_length<'a, S: AsRef<str>>(
    value: S,
    max: usize,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    let s = value.as_ref();
    if string::has_max_length(s, max) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::STRING),
            format!("has length {}, expected at most {}, was {:?}", s.len(), max, s),
        ))
    }
}

/// Require a byte length within inclusive bounds.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::string::length_between("ab", 3, 10, "Name").unwrap_err();
/// assert_eq!(err.to_string(), "Name has length 2, expected 3 to 10, was \"ab\"");
/// ```
pub fn length_between<'a, S: AsRef<str>>(
    value: S,
    min: usize,
    max: usize,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    let s = value.as_ref();
    if string::has_length_between(s, min, max) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::STRING),
            format!("has length {}, expected {} to {}, was {:?}", s.len(), min, max, s),
        ))
    }
}

/// Require a match against the given pattern.
///
/// # Example
///
/// ```rust
/// use regex::Regex;
/// use breakwater::require;
///
/// let semver = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
/// let err = require::string::matches("1.2", &semver, "Version").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     r#"Version does not match ^\d+\.\d+\.\d+$, was "1.2""#,
/// );
/// ```
pub fn matches<'a, S: AsRef<str>>(
    value: S,
    re: &Regex,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    let s = value.as_ref();
    if pattern::matches(s, re) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::STRING),
            format!("does not match {}, was {:?}", re.as_str(), s),
        ))
    }
}

/// Require an email address.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::string::email("a@@b.com", "Contact").unwrap_err();
/// assert_eq!(err.to_string(), "Contact is not a valid email address, was \"a@@b.com\"");
/// ```
pub fn email<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    format_check(value, pattern::is_email, label, "is not a valid email address")
}

/// Require a URL with scheme and authority.
pub fn url<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    format_check(value, pattern::is_url, label, "is not a valid URL")
}

/// Require an RFC 1123 hostname.
pub fn hostname<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    format_check(value, pattern::is_hostname, label, "is not a valid hostname")
}

/// Require an IPv4 or IPv6 address.
pub fn ip_address<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    format_check(value, pattern::is_ip_address, label, "is not a valid IP address")
}

/// Require a canonical 8-4-4-4-12 UUID.
pub fn uuid<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    format_check(value, pattern::is_uuid, label, "is not a valid UUID")
}

/// Require text that passes the JSON delimiter sniff.
pub fn json<'a, S: AsRef<str>>(
    value: S,
    label: impl Into<Option<&'a str>>,
) -> Result<S, CheckError> {
    format_check(value, pattern::is_json, label, "is not a JSON document")
}

fn format_check<'a, S: AsRef<str>>(
    value: S,
    check: fn(&str) -> bool,
    label: impl Into<Option<&'a str>>,
    fault: &str,
) -> Result<S, CheckError> {
    let s = value.as_ref();
    if check(s) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::STRING),
            format!("{}, was {:?}", fault, s),
        ))
    }
}
