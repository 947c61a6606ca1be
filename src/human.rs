//! Human-readable rendering helpers
//!
//! Small formatting utilities used when building failure messages:
//! duration-to-text rendering and lexical path tidying. They are exported
//! because callers formatting their own messages want the same output.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use breakwater::human;
//!
//! let d = Duration::from_secs(3600 + 30 * 60 + 15);
//! assert_eq!(human::duration(d), "1h 30m 15s");
//! assert_eq!(human::duration_parts(d, 2), "1h 30m");
//! ```

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Fixed rendering of a zero (or zero-part) duration.
pub const ZERO_DURATION: &str = "0s";

const UNITS: &[(u64, &str)] = &[(86_400, "d"), (3_600, "h"), (60, "m"), (1, "s")];

/// Render a duration as space-separated unit parts: `"2d 4h 7m 12s"`.
///
/// Zero-valued units are skipped; sub-second remainders render as
/// milliseconds. A zero duration renders as [`ZERO_DURATION`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use breakwater::human;
///
/// assert_eq!(human::duration(Duration::from_secs(90)), "1m 30s");
/// assert_eq!(human::duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(human::duration(Duration::ZERO), "0s");
/// ```
pub fn duration(value: Duration) -> String {
    duration_parts(value, usize::MAX)
}

/// Render a duration truncated to at most `max_parts` leading unit parts.
///
/// Truncation drops the least significant parts: an hour-and-a-half with
/// seconds truncated to two parts keeps hours and minutes. Requesting
/// zero parts renders [`ZERO_DURATION`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use breakwater::human;
///
/// let d = Duration::from_secs(3600 + 30 * 60 + 15);
/// assert_eq!(human::duration_parts(d, 2), "1h 30m");
/// assert_eq!(human::duration_parts(d, 1), "1h");
/// ```
pub fn duration_parts(value: Duration, max_parts: usize) -> String {
    let mut secs = value.as_secs();
    let millis = value.subsec_millis();
    let mut parts: Vec<String> = Vec::new();
    for &(size, suffix) in UNITS {
        let count = secs / size;
        if count > 0 {
            parts.push(format!("{count}{suffix}"));
            secs %= size;
        }
    }
    if millis > 0 {
        parts.push(format!("{millis}ms"));
    }
    if parts.is_empty() || max_parts == 0 {
        return ZERO_DURATION.to_string();
    }
    parts.truncate(max_parts);
    parts.join(" ")
}

/// Lexically tidy a path: drop `.` components and resolve `..` against
/// preceding normal components.
///
/// Purely textual - the filesystem is never consulted, so symlinks are
/// not honored. `..` at the root stays at the root; leading `..`
/// components on a relative path are preserved. An input that reduces to
/// nothing becomes `"."`.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use breakwater::human;
///
/// assert_eq!(human::normalize("/etc/./conf/../passwd"), Path::new("/etc/passwd"));
/// assert_eq!(human::normalize("a/b/../../c"), Path::new("c"));
/// assert_eq!(human::normalize("../x"), Path::new("../x"));
/// ```
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.as_ref().components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                let at_root = matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                );
                if can_pop {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Best-effort parse of a string into a tidied path.
///
/// Returns `None` instead of erroring when the string cannot name a path:
/// empty or whitespace-only input, or input containing a NUL byte.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use breakwater::human;
///
/// assert_eq!(human::parse_path("/var/./log"), Some(PathBuf::from("/var/log")));
/// assert_eq!(human::parse_path("   "), None);
/// ```
pub fn parse_path(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('\0') {
        return None;
    }
    Some(normalize(trimmed))
}
