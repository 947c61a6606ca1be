//! Collection and map assertions
//!
//! Mirrors of [`check::collection`](crate::check::collection) that return
//! the collection on success. The default nouns are `"Collection"` for
//! slices, `"Map"` for maps, and `"Array"` for raw byte arrays. Size
//! faults embed the actual size, the required bound, and the stringified
//! contents.

use crate::check::collection;
use crate::error::{label_or, noun, CheckError};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Require a non-empty slice.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let items = [1, 2, 3];
/// assert_eq!(require::collection::not_empty(&items, "Ids").unwrap(), &items);
///
/// let empty: &[i32] = &[];
/// let err = require::collection::not_empty(empty, None).unwrap_err();
/// assert_eq!(err.to_string(), "Collection is empty");
/// ```
pub fn not_empty<'a, 'l, T>(
    items: &'a [T],
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [T], CheckError> {
    if collection::is_not_empty(items) {
        Ok(items)
    } else {
        Err(CheckError::invalid(label_or(label, noun::COLLECTION), "is empty"))
    }
}

/// Require an exact size.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::collection::size(&[1, 2], 3, "Triple").unwrap_err();
/// assert_eq!(err.to_string(), "Triple has size 2, expected 3, was [1, 2]");
/// ```
pub fn size<'a, 'l, T: Debug>(
    items: &'a [T],
    expected: usize,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [T], CheckError> {
    if collection::has_size(items, expected) {
        Ok(items)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::COLLECTION),
            format!("has size {}, expected {}, was {:?}", items.len(), expected, items),
        ))
    }
}

/// Require at least `min` elements.
pub fn min_size<'a, 'l, T: Debug>(
    items: &'a [T],
    min: usize,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [T], CheckError> {
    if collection::has_min_size(items, min) {
        Ok(items)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::COLLECTION),
            format!("has size {}, expected at least {}, was {:?}", items.len(), min, items),
        ))
    }
}

/// Require at most `max` elements.
pub fn max_size<'a, 'l, T: Debug>(
    items: &'a [T],
    max: usize,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [T], CheckError> {
    if collection::has_max_size(items, max) {
        Ok(items)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::COLLECTION),
            format!("has size {}, expected at most {}, was {:?}", items.len(), max, items),
        ))
    }
}

/// Require a size within inclusive bounds.
pub fn size_between<'a, 'l, T: Debug>(
    items: &'a [T],
    min: usize,
    max: usize,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [T], CheckError> {
    if collection::has_size_between(items, min, max) {
        Ok(items)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::COLLECTION),
            format!("has size {}, expected {} to {}, was {:?}", items.len(), min, max, items),
        ))
    }
}

/// Require the slice to contain `item`.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::collection::contains(&["a", "b"], &"c", "Tags").unwrap_err();
/// assert_eq!(err.to_string(), r#"Tags does not contain "c", was ["a", "b"]"#);
/// ```
pub fn contains<'a, 'l, T: PartialEq + Debug>(
    items: &'a [T],
    item: &T,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [T], CheckError> {
    if collection::contains(items, item) {
        Ok(items)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::COLLECTION),
            format!("does not contain {:?}, was {:?}", item, items),
        ))
    }
}

/// Require a non-empty map.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use breakwater::require;
///
/// let empty: HashMap<&str, i32> = HashMap::new();
/// let err = require::collection::not_empty_map(&empty, None).unwrap_err();
/// assert_eq!(err.to_string(), "Map is empty");
/// ```
pub fn not_empty_map<'a, 'l, K, V, S>(
    map: &'a HashMap<K, V, S>,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a HashMap<K, V, S>, CheckError> {
    if collection::map_is_not_empty(map) {
        Ok(map)
    } else {
        Err(CheckError::invalid(label_or(label, noun::MAP), "is empty"))
    }
}

/// Require the map to contain `key`.
pub fn contains_key<'a, 'l, K, V, S>(
    map: &'a HashMap<K, V, S>,
    key: &K,
    label: impl Into<Option<&'l str>>,
) -> Result<&'a HashMap<K, V, S>, CheckError>
where
    K: Eq + Hash + Debug,
    S: BuildHasher,
{
    if collection::contains_key(map, key) {
        Ok(map)
    } else {
        Err(CheckError::invalid(
            label_or(label, noun::MAP),
            format!("does not contain key {:?}", key),
        ))
    }
}

/// Require a non-empty byte array.
///
/// # Example
///
/// ```rust
/// use breakwater::require;
///
/// let err = require::collection::not_empty_bytes(&[], None).unwrap_err();
/// assert_eq!(err.to_string(), "Array is empty");
/// ```
pub fn not_empty_bytes<'a, 'l>(
    value: &'a [u8],
    label: impl Into<Option<&'l str>>,
) -> Result<&'a [u8], CheckError> {
    if collection::is_not_empty(value) {
        Ok(value)
    } else {
        Err(CheckError::invalid(label_or(label, noun::ARRAY), "is empty"))
    }
}
