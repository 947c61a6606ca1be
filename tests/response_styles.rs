//! Cross-layer properties: the three response styles agree
//!
//! For any rule P and present value x: `filter` hands back `Some(x)` iff
//! the boolean check passes, `require` errors iff it fails, and every
//! `is_not_*` mirror is the exact negation of its positive twin.

use breakwater::{check, filter, guard, require};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_filter_agrees_with_check_on_blankness(s in ".*") {
        let expected = check::string::is_not_blank(&s);
        prop_assert_eq!(filter::not_blank(s.as_str()).is_some(), expected);
    }

    #[test]
    fn prop_require_agrees_with_check_on_blankness(s in ".*") {
        let expected = check::string::is_not_blank(&s);
        prop_assert_eq!(require::string::not_blank(s.as_str(), "Field").is_ok(), expected);
    }

    #[test]
    fn prop_string_mirrors_negate(s in ".*") {
        prop_assert_eq!(check::string::is_not_empty(&s), !check::string::is_empty(&s));
        prop_assert_eq!(check::string::is_not_blank(&s), !check::string::is_blank(&s));
    }

    #[test]
    fn prop_number_mirrors_negate(n in any::<i64>()) {
        prop_assert_eq!(check::number::is_not_positive(&n), !check::number::is_positive(&n));
        prop_assert_eq!(check::number::is_not_negative(&n), !check::number::is_negative(&n));
        prop_assert_eq!(check::number::is_not_zero(&n), !check::number::is_zero(&n));
    }

    #[test]
    fn prop_collection_mirrors_negate(items in prop::collection::vec(any::<i32>(), 0..8)) {
        prop_assert_eq!(
            check::collection::is_not_empty(&items),
            !check::collection::is_empty(&items)
        );
        prop_assert_eq!(
            check::iterable::is_not_empty(items.iter()),
            !check::iterable::is_empty(items.iter())
        );
    }

    #[test]
    fn prop_filter_range_agrees_with_check(n in any::<i32>(), a in -100i32..100, b in -100i32..100) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let expected = check::number::is_in_range(&n, &min, &max);
        prop_assert_eq!(filter::in_range(n, min, max).is_some(), expected);
        prop_assert_eq!(require::number::in_range(n, min, max, "N").is_ok(), expected);
    }

    #[test]
    fn prop_email_styles_agree(s in ".*") {
        let expected = check::pattern::is_email(&s);
        prop_assert_eq!(filter::email(s.as_str()).is_some(), expected);
        prop_assert_eq!(require::string::email(s.as_str(), None).is_ok(), expected);
    }
}

#[test]
fn filter_returns_the_original_value() {
    assert_eq!(filter::not_blank("  x  "), Some("  x  "));
    assert_eq!(filter::in_range(42, 0, 100), Some(42));
    assert_eq!(filter::non_empty(vec![1, 2]), Some(vec![1, 2]));
}

#[test]
fn require_returns_the_original_value() {
    assert_eq!(require::string::not_blank("  x  ", None).unwrap(), "  x  ");
    assert_eq!(require::number::in_range(42, 0, 100, None).unwrap(), 42);
    let items = [1, 2];
    assert_eq!(require::collection::not_empty(&items, None).unwrap(), &items);
}

#[test]
fn guard_convention_for_absent_values() {
    // Qualifying checks fail on None, disqualifying checks pass.
    assert!(!guard::qualifies(None::<&str>, check::string::is_not_blank));
    assert!(guard::disqualifies(None::<&str>, check::string::is_blank));

    // Present values answer as the plain check would.
    assert!(guard::qualifies(Some("x"), check::string::is_not_blank));
    assert!(!guard::disqualifies(Some("x"), check::string::is_blank));
}

#[test]
fn guard_path_exception_is_false_both_ways() {
    // The documented asymmetry: an absent path value neither exists nor
    // not-exists.
    assert!(!guard::exists(None));
    assert!(!guard::not_exists(None));
}

#[test]
fn composed_predicates_feed_every_layer() {
    use breakwater::predicate::{Predicate, PredicateExt};

    let tidy = check::string::is_not_blank.and(check::string::is_ascii);

    assert!(tidy.check("hello"));
    assert_eq!(filter::passing("hello", tidy), Some("hello"));
    assert!(require::that("héllo", tidy, "Name").is_err());
}
