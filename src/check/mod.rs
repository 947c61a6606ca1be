//! The boolean core: flat checks organised by value category
//!
//! Every check here takes a value that is definitely present and answers
//! a yes/no question about it. The other response styles derive from
//! these: [`filter`](crate::filter) wraps the value in an `Option`,
//! [`require`](crate::require) turns a failure into a
//! [`CheckError`](crate::CheckError), and [`guard`](crate::guard) lifts
//! any check over `Option` with the qualifying/disqualifying convention
//! for absent values.
//!
//! Checks come in positive/negative pairs where a guard clause wants the
//! negation (`is_empty` / `is_not_empty`); for every present value the
//! pair is an exact mirror.

pub mod collection;
pub mod iterable;
pub mod number;
pub mod path;
pub mod pattern;
pub mod string;
pub mod time;
