//! Filesystem path assertions
//!
//! Mirrors of [`check::path`](crate::check::path) that return the path on
//! success. The default noun is `"Path"`. Faults embed the lexically
//! tidied path (see [`human::normalize`](crate::human::normalize)), so
//! `"a/./b"` reports as `"a/b"`.

use crate::check::path;
use crate::error::{label_or, noun, CheckError};
use crate::human;
use std::path::Path;

/// Require the path to exist on the filesystem.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::path::exists("/no/such/place", "Config").unwrap_err();
/// assert_eq!(err.to_string(), "Config does not exist, was /no/such/place");
/// ```
pub fn exists<'l, P: AsRef<Path>>(
    value: P,
    label: impl Into<Option<&'l str>>,
) -> Result<P, CheckError> {
    if path::exists(value.as_ref()) {
        Ok(value)
    } else {
        Err(fault(value.as_ref(), label, "does not exist"))
    }
}

/// Require the path to be absent from the filesystem.
pub fn not_exists<'l, P: AsRef<Path>>(
    value: P,
    label: impl Into<Option<&'l str>>,
) -> Result<P, CheckError> {
    if path::not_exists(value.as_ref()) {
        Ok(value)
    } else {
        Err(fault(value.as_ref(), label, "already exists"))
    }
}

/// Require the path to be an existing regular file.
pub fn file<'l, P: AsRef<Path>>(
    value: P,
    label: impl Into<Option<&'l str>>,
) -> Result<P, CheckError> {
    if path::is_file(value.as_ref()) {
        Ok(value)
    } else {
        Err(fault(value.as_ref(), label, "is not a file"))
    }
}

/// Require the path to be an existing directory.
pub fn directory<'l, P: AsRef<Path>>(
    value: P,
    label: impl Into<Option<&'l str>>,
) -> Result<P, CheckError> {
    if path::is_directory(value.as_ref()) {
        Ok(value)
    } else {
        Err(fault(value.as_ref(), label, "is not a directory"))
    }
}

fn fault<'l>(value: &Path, label: impl Into<Option<&'l str>>, what: &str) -> CheckError {
    CheckError::invalid(
        label_or(label, noun::PATH),
        format!("{}, was {}", what, human::normalize(value).display()),
    )
}
