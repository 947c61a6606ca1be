//! Numeric assertions
//!
//! Mirrors of [`check::number`](crate::check::number) that return the
//! value on success. The default noun is `"Value"`. Faults embed the
//! actual value and the violated bound.

use crate::check::number;
use crate::error::{label_or, noun, CheckError};
use std::fmt::Display;

/// Require a strictly positive value.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// assert_eq!(require::number::positive(8, "Port").unwrap(), 8);
///
/// let err = require::number::positive(0, "Port").unwrap_err();
/// assert_eq!(err.to_string(), "Port is not positive, was 0");
/// ```
pub fn positive<'a, T>(value: T, label: impl Into<Option<&'a str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Default + Display,
{
    if number::is_positive(&value) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is not positive, was {value}"),
        ))
    }
}

/// Require a strictly negative value.
pub fn negative<'a, T>(value: T, label: impl Into<Option<&'a str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Default + Display,
{
    if number::is_negative(&value) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is not negative, was {value}"),
        ))
    }
}

/// Require a value that is zero or above.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::number::not_negative(-0.5, "Balance").unwrap_err();
/// assert_eq!(err.to_string(), "Balance is negative, was -0.5");
/// ```
pub fn not_negative<'a, T>(value: T, label: impl Into<Option<&'a str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Default + Display,
{
    if number::is_not_negative(&value) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is negative, was {value}"),
        ))
    }
}

/// Require a nonzero value.
pub fn not_zero<'a, T>(value: T, label: impl Into<Option<&'a str>>) -> Result<T, CheckError>
where
    T: PartialEq + Default + Display,
{
    if number::is_not_zero(&value) {
        Ok(value)
    } else {
        Err(CheckError::invalid(label_or(label, noun::VALUE), "is zero"))
    }
}

/// Require `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::number::in_range(101, 0, 100, "Percent").unwrap_err();
/// assert_eq!(err.to_string(), "Percent is not in range [0, 100], was 101");
/// ```
pub fn in_range<'a, T>(
    value: T,
    min: T,
    max: T,
    label: impl Into<Option<&'a str>>,
) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if number::is_in_range(&value, &min, &max) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is not in range [{min}, {max}], was {value}"),
        ))
    }
}

/// Require `value >= min`.
pub fn at_least<'a, T>(value: T, min: T, label: impl Into<Option<&'a str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if number::is_at_least(&value, &min) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is less than {min}, was {value}"),
        ))
    }
}

/// Require `value <= max`.
pub fn at_most<'a, T>(value: T, max: T, label: impl Into<Option<&'a str>>) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if number::is_at_most(&value, &max) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is greater than {max}, was {value}"),
        ))
    }
}

/// Require `value > bound`.
pub fn greater_than<'a, T>(
    value: T,
    bound: T,
    label: impl Into<Option<&'a str>>,
) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if number::is_greater_than(&value, &bound) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is not greater than {bound}, was {value}"),
        ))
    }
}

/// Require `value < bound`.
pub fn less_than<'a, T>(
    value: T,
    bound: T,
    label: impl Into<Option<&'a str>>,
) -> Result<T, CheckError>
where
    T: PartialOrd + Display,
{
    if number::is_less_than(&value, &bound) {
        Ok(value)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::VALUE),
            format!("is not less than {bound}, was {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_assertions() {
        assert_eq!(positive(8, "Port").unwrap(), 8);
        assert_eq!(positive(0, "Port").unwrap_err().to_string(), "Port is not positive, was 0");
        assert_eq!(negative(-1, None).unwrap(), -1);
        assert_eq!(negative(1, None).unwrap_err().to_string(), "Value is not negative, was 1");
        assert_eq!(not_negative(0, None).unwrap(), 0);
        assert_eq!(not_zero(3, None).unwrap(), 3);
        assert_eq!(not_zero(0, "Divisor").unwrap_err().to_string(), "Divisor is zero");
    }

    #[test]
    fn test_in_range_message() {
        assert_eq!(in_range(50, 0, 100, None).unwrap(), 50);
        let err = in_range(101, 0, 100, "Percent").unwrap_err();
        assert_eq!(err.to_string(), "Percent is not in range [0, 100], was 101");
    }

    #[test]
    fn test_bound_assertions() {
        assert_eq!(at_least(5, 5, None).unwrap(), 5);
        assert_eq!(at_least(4, 5, None).unwrap_err().to_string(), "Value is less than 5, was 4");
        assert_eq!(at_most(5, 5, None).unwrap(), 5);
        assert_eq!(
            at_most(6, 5, None).unwrap_err().to_string(),
            "Value is greater than 5, was 6"
        );
        assert_eq!(
            greater_than(5, 5, None).unwrap_err().to_string(),
            "Value is not greater than 5, was 5"
        );
        assert_eq!(
            less_than(5, 5, None).unwrap_err().to_string(),
            "Value is not less than 5, was 5"
        );
    }

    #[test]
    fn test_nan_is_rejected_everywhere() {
        assert!(positive(f64::NAN, None).is_err());
        assert!(negative(f64::NAN, None).is_err());
        assert!(in_range(f64::NAN, 0.0, 1.0, None).is_err());
    }

    #[test]
    fn test_works_on_floats() {
        assert_eq!(not_negative(-0.5, "Balance").unwrap_err().to_string(),
            "Balance is negative, was -0.5");
    }
}
