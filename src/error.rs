//! Check failure errors with a deterministic message contract
//!
//! Every failed [`require`](crate::require) assertion produces a
//! [`CheckError`]. The error kind is fixed per failure category, not per
//! call site:
//!
//! - [`CheckError::Missing`] - a required value was absent (`None`)
//! - [`CheckError::Invalid`] - a value was present but failed a constraint
//! - [`CheckError::State`] - a boolean state assertion was false
//!
//! The `Display` output is part of the crate's contract. Messages are
//! `"<label> <fault>"`, where the label is caller-supplied or a default
//! noun (see [`noun`]), and the fault is a fixed suffix describing the
//! failure. Size and length violations embed the actual value, the
//! required bound, and the stringified contents:
//!
//! ```
//! use breakwater::require;
//!
//! let err = require::not_null(None::<i32>, "User").unwrap_err();
//! assert_eq!(err.to_string(), "User is null");
//!
//! let err = require::collection::min_size(&[1], 2, None).unwrap_err();
//! assert_eq!(err.to_string(), "Collection has size 1, expected at least 2, was [1]");
//! ```

use thiserror::Error;

/// Default nouns substituted when the caller supplies no label.
///
/// These are contract strings: they appear verbatim in error messages.
pub mod noun {
    /// Default label for string checks.
    pub const STRING: &str = "String";
    /// Default label for slice and iterable checks.
    pub const COLLECTION: &str = "Collection";
    /// Default label for map checks.
    pub const MAP: &str = "Map";
    /// Default label for fixed-size array checks.
    pub const ARRAY: &str = "Array";
    /// Default label for filesystem path checks.
    pub const PATH: &str = "Path";
    /// Default label for plain value checks.
    pub const VALUE: &str = "Value";
    /// Default label for calendar date checks.
    pub const DATE: &str = "Date";
    /// Default label for time-of-day checks.
    pub const TIME: &str = "Time";
    /// Default label for combined date-time checks.
    pub const DATE_TIME: &str = "Date Time";
    /// Default label for duration checks.
    pub const DURATION: &str = "Duration";
}

/// A failed precondition.
///
/// The three variants mirror the three failure categories of the
/// [`require`](crate::require) layer. The rendered message is stable and
/// tested; see the module docs for the template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckError {
    /// A required value was absent.
    #[error("{label} is null")]
    Missing {
        /// Caller-supplied label or default noun.
        label: String,
    },
    /// A value was present but failed a constraint.
    #[error("{label} {fault}")]
    Invalid {
        /// Caller-supplied label or default noun.
        label: String,
        /// Fixed suffix describing the violated constraint.
        fault: String,
    },
    /// A boolean state assertion did not hold.
    #[error("{label} is false")]
    State {
        /// Caller-supplied label or default noun.
        label: String,
    },
}

impl CheckError {
    /// A required value was absent.
    pub fn missing(label: impl Into<String>) -> Self {
        Self::Missing {
            label: label.into(),
        }
        .traced()
    }

    /// A value was present but failed a constraint.
    pub fn invalid(label: impl Into<String>, fault: impl Into<String>) -> Self {
        Self::Invalid {
            label: label.into(),
            fault: fault.into(),
        }
        .traced()
    }

    /// A boolean state assertion did not hold.
    pub fn state(label: impl Into<String>) -> Self {
        Self::State {
            label: label.into(),
        }
        .traced()
    }

    /// The label this error was raised with.
    pub fn label(&self) -> &str {
        match self {
            Self::Missing { label } | Self::Invalid { label, .. } | Self::State { label } => label,
        }
    }

    /// True if this is a [`CheckError::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// True if this is a [`CheckError::Invalid`].
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// True if this is a [`CheckError::State`].
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State { .. })
    }

    fn traced(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "breakwater", error = %self, "check failed");
        self
    }
}

/// Resolve an optional caller label against a default noun.
pub(crate) fn label_or<'a>(label: impl Into<Option<&'a str>>, default: &'a str) -> &'a str {
    label.into().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = CheckError::missing("User");
        assert_eq!(err.to_string(), "User is null");
        assert!(err.is_missing());
    }

    #[test]
    fn test_invalid_message() {
        let err = CheckError::invalid("Name", "is blank");
        assert_eq!(err.to_string(), "Name is blank");
        assert!(err.is_invalid());
    }

    #[test]
    fn test_state_message() {
        let err = CheckError::state("Connection open");
        assert_eq!(err.to_string(), "Connection open is false");
        assert!(err.is_state());
    }

    #[test]
    fn test_label_accessor() {
        assert_eq!(CheckError::missing("User").label(), "User");
        assert_eq!(CheckError::invalid("Name", "is empty").label(), "Name");
        assert_eq!(CheckError::state("Ready").label(), "Ready");
    }

    #[test]
    fn test_label_or_prefers_caller_label() {
        assert_eq!(label_or("User", noun::STRING), "User");
        assert_eq!(label_or(None, noun::STRING), "String");
    }
}
