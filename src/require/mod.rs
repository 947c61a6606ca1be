//! The error response style
//!
//! Each function mirrors a boolean check, hands the value back on
//! success, and returns a [`CheckError`] with a deterministic message on
//! failure. The error kind is fixed per failure category:
//! [`CheckError::Missing`] when a required value is absent,
//! [`CheckError::Invalid`] when a present value fails a constraint,
//! [`CheckError::State`] when a boolean state assertion does not hold.
//!
//! Every function takes a label that becomes the first word of the
//! message. Pass `None` to fall back to the category's default noun
//! (see [`noun`](crate::error::noun)).
//!
//! # Example
//!
//! ```rust
//! use breakwater::require;
//!
//! fn connect(host: Option<&str>, port: u16) -> Result<String, breakwater::CheckError> {
//!     let host = require::not_null(host, "Host")?;
//!     let host = require::string::hostname(host, "Host")?;
//!     let port = require::number::positive(port as i64, "Port")?;
//!     Ok(format!("{host}:{port}"))
//! }
//!
//! assert!(connect(Some("db.internal"), 5432).is_ok());
//! assert_eq!(
//!     connect(None, 5432).unwrap_err().to_string(),
//!     "Host is null",
//! );
//! ```

pub mod collection;
pub mod number;
pub mod path;
pub mod string;
pub mod time;

use crate::error::{label_or, noun, CheckError};
use crate::predicate::Predicate;

/// Require a value to be present, returning it unwrapped.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// assert_eq!(require::not_null(Some(5), "Count").unwrap(), 5);
///
/// let err = require::not_null(None::<i32>, "User").unwrap_err();
/// assert_eq!(err.to_string(), "User is null");
/// ```
pub fn not_null<'a, T>(
    value: Option<T>,
    label: impl Into<Option<&'a str>>,
) -> Result<T, CheckError> {
    match value {
        Some(v) => Ok(v),
        None => Err(CheckError::missing(label_or(label, noun::VALUE))),
    }
}

/// Require an arbitrary predicate to hold, returning the value.
///
/// The generic mirror of the whole boolean core. The failure fault is the
/// fixed suffix `"is invalid"`; use [`that_with`] to describe the fault.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let even = require::that(4, |n: &i32| n % 2 == 0, "Count");
/// assert_eq!(even.unwrap(), 4);
///
/// let err = require::that(3, |n: &i32| n % 2 == 0, "Count").unwrap_err();
/// assert_eq!(err.to_string(), "Count is invalid");
/// ```
pub fn that<'a, T, U, P>(
    value: T,
    predicate: P,
    label: impl Into<Option<&'a str>>,
) -> Result<T, CheckError>
where
    T: std::borrow::Borrow<U>,
    U: ?Sized,
    P: Predicate<U>,
{
    that_with(value, predicate, label, |_| String::from("is invalid"))
}

/// Require an arbitrary predicate to hold, with a caller-built fault.
///
/// The fault closure sees the rejected value and produces the message
/// suffix that follows the label.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::that_with(
///     3,
///     |n: &i32| n % 2 == 0,
///     "Count",
///     |n| format!("is odd, was {n}"),
/// )
/// .unwrap_err();
/// assert_eq!(err.to_string(), "Count is odd, was 3");
/// ```
pub fn that_with<'a, T, U, P, F>(
    value: T,
    predicate: P,
    label: impl Into<Option<&'a str>>,
    fault: F,
) -> Result<T, CheckError>
where
    T: std::borrow::Borrow<U>,
    U: ?Sized,
    P: Predicate<U>,
    F: FnOnce(&U) -> String,
{
    if predicate.check(value.borrow()) {
        Ok(value)
    } else {
        let msg = fault(value.borrow());
        Err(CheckError::invalid(label_or(label, noun::VALUE), msg))
    }
}

/// Assert a boolean state condition.
///
/// The state-flavored assertion: the failure is a
/// [`CheckError::State`], not an `Invalid`.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// assert!(require::state(true, "Connection open").is_ok());
///
/// let err = require::state(false, "Connection open").unwrap_err();
/// assert_eq!(err.to_string(), "Connection open is false");
/// assert!(err.is_state());
/// ```
pub fn state<'a>(condition: bool, label: impl Into<Option<&'a str>>) -> Result<(), CheckError> {
    if condition {
        Ok(())
    } else {
        Err(CheckError::state(label_or(label, noun::VALUE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_null_returns_value() {
        assert_eq!(not_null(Some("v"), "Field").unwrap(), "v");
    }

    #[test]
    fn test_not_null_default_noun() {
        let err = not_null(None::<i32>, None).unwrap_err();
        assert_eq!(err.to_string(), "Value is null");
    }

    #[test]
    fn test_that_passes_value_through() {
        assert_eq!(that(10, |n: &i32| *n > 0, "N").unwrap(), 10);
        assert!(that(-1, |n: &i32| *n > 0, "N").is_err());
    }

    #[test]
    fn test_that_with_sees_rejected_value() {
        let err = that_with(7, |n: &i32| *n > 10, None, |n| format!("is too small, was {n}"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Value is too small, was 7");
    }

    #[test]
    fn test_state_kinds() {
        assert!(state(true, "Ready").is_ok());
        let err = state(false, None).unwrap_err();
        assert!(err.is_state());
        assert_eq!(err.to_string(), "Value is false");
    }
}
