//! Checks over values that may be absent
//!
//! `Option` is this crate's carrier for a missing value. The convention,
//! applied throughout:
//!
//! - a **qualifying** check ("is this X?") is `false` for `None` - an
//!   absent value qualifies as nothing;
//! - a **disqualifying** check ("is this not X?") is `true` for `None` -
//!   the guard-clause reading, where an absent value trivially passes.
//!
//! [`qualifies`] and [`disqualifies`] lift any [`Predicate`] over
//! `Option` under that convention.
//!
//! One documented exception: [`exists`] and [`not_exists`] are **both**
//! `false` for `None`. A path value we do not have can be said neither to
//! exist nor to be absent, so neither direction qualifies.
//!
//! # Example
//!
//! ```rust
//! use breakwater::check::string;
//! use breakwater::guard;
//!
//! assert!(guard::qualifies(Some("hello"), string::is_not_blank));
//! assert!(!guard::qualifies(None::<&str>, string::is_not_blank));
//! assert!(guard::disqualifies(None::<&str>, string::is_blank));
//! ```

use crate::check::path;
use crate::predicate::Predicate;
use std::path::Path;

/// True if the value is absent.
#[inline]
pub fn is_null<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// True if the value is present.
#[inline]
pub fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}

/// Apply a qualifying check: `false` for `None`, the check's answer
/// otherwise.
///
/// # Example
///
/// ```rust
/// use breakwater::check::pattern;
/// use breakwater::guard;
///
/// assert!(guard::qualifies(Some("a@b.com"), pattern::is_email));
/// assert!(!guard::qualifies(None::<&str>, pattern::is_email));
/// ```
pub fn qualifies<T: ?Sized, P: Predicate<T>>(value: Option<&T>, check: P) -> bool {
    match value {
        Some(v) => check.check(v),
        None => false,
    }
}

/// Apply a disqualifying check: `true` for `None`, the check's answer
/// otherwise.
///
/// The guard-clause convention: an absent value cannot violate a
/// constraint on its content.
pub fn disqualifies<T: ?Sized, P: Predicate<T>>(value: Option<&T>, check: P) -> bool {
    match value {
        Some(v) => check.check(v),
        None => true,
    }
}

/// True if the path is present and exists on the filesystem.
#[inline]
pub fn exists(value: Option<&Path>) -> bool {
    value.map(|p| path::exists(p)).unwrap_or(false)
}

/// True if the path is present and does not exist on the filesystem.
///
/// The documented asymmetry: `None` is `false` here too, even though
/// this is the negative direction. Nothing can be said about the absence
/// of a path we were never given.
#[inline]
pub fn not_exists(value: Option<&Path>) -> bool {
    value.map(|p| path::not_exists(p)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{number, string};

    #[test]
    fn test_is_null() {
        assert!(is_null(&None::<i32>));
        assert!(!is_null(&Some(1)));
        assert!(is_not_null(&Some(1)));
        assert!(!is_not_null(&None::<i32>));
    }

    #[test]
    fn test_qualifies_fails_on_none() {
        assert!(qualifies(Some("hello"), string::is_not_blank));
        assert!(!qualifies(Some("   "), string::is_not_blank));
        assert!(!qualifies(None::<&str>, string::is_not_blank));
    }

    #[test]
    fn test_disqualifies_passes_on_none() {
        assert!(disqualifies(Some("   "), string::is_blank));
        assert!(!disqualifies(Some("hello"), string::is_blank));
        assert!(disqualifies(None::<&str>, string::is_blank));
    }

    #[test]
    fn test_qualifies_with_closures() {
        assert!(qualifies(Some(&5), |n: &i32| number::is_positive(n)));
        assert!(!qualifies(None::<&i32>, |n: &i32| number::is_positive(n)));
    }

    #[test]
    fn test_path_exception_both_false_on_none() {
        assert!(!exists(None));
        assert!(!not_exists(None));
    }

    #[test]
    fn test_path_checks_on_present_paths() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("missing");
        assert!(exists(Some(dir.path())));
        assert!(!exists(Some(&absent)));
        assert!(not_exists(Some(&absent)));
        assert!(!not_exists(Some(dir.path())));
    }
}
