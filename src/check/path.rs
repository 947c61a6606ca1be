//! Boolean checks for filesystem paths
//!
//! Each check is a single synchronous call into the platform filesystem
//! API - no retry, timeout, or cancellation. A path whose metadata cannot
//! be read (broken symlink, permission failure) reports `false`, the same
//! as a path that is not there.
//!
//! To check a path that may be absent (`Option`), see
//! [`guard`](crate::guard), which documents the deliberate asymmetry for
//! missing path values. To turn a raw string into a path without erroring
//! on unusable input, see [`human::parse_path`](crate::human::parse_path).

use std::path::Path;

/// True if the path exists on the filesystem.
///
/// # Example
///
/// ```rust
/// use breakwater::check::path;
///
/// assert!(path::exists(std::env::temp_dir()));
/// assert!(!path::exists("/no/such/place/at/all"));
/// ```
#[inline]
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// True if the path does not exist on the filesystem.
#[inline]
pub fn not_exists(path: impl AsRef<Path>) -> bool {
    !path.as_ref().exists()
}

/// True if the path exists and is a regular file.
///
/// # Example
///
/// ```rust
/// use breakwater::check::path;
///
/// assert!(!path::is_file(std::env::temp_dir()));
/// ```
#[inline]
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// True if the path exists and is a directory.
#[inline]
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}
