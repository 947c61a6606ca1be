//! # Breakwater
//!
//! > *"Check the flow before it reaches the harbor"*
//!
//! A Rust library of pragmatic preconditions and validation helpers.
//!
//! ## Philosophy
//!
//! **Breakwater** keeps one boolean core and derives every response style
//! from it, so a rule is written once and answered three ways:
//!
//! - [`check`] - yes/no questions about a value that is present
//! - [`filter`] - the value handed back wrapped in `Option`
//! - [`require`] - the value handed back, or a [`CheckError`] whose
//!   message text is a tested contract
//!
//! [`guard`] lifts any check over `Option` with the qualifying/
//! disqualifying convention for absent values, and [`predicate`] lets
//! checks and closures compose with `and`/`or`/`not` before feeding any
//! of the layers.
//!
//! ## Quick Example
//!
//! ```rust
//! use breakwater::{check, filter, require, CheckError};
//!
//! fn register(email: &str, age: i64) -> Result<(), CheckError> {
//!     require::string::email(email, "Email")?;
//!     require::number::in_range(age, 13, 130, "Age")?;
//!     Ok(())
//! }
//!
//! assert!(register("user@example.com", 25).is_ok());
//! assert_eq!(
//!     register("user@example.com", 7).unwrap_err().to_string(),
//!     "Age is not in range [13, 130], was 7",
//! );
//!
//! // The same rules, silent:
//! assert!(check::pattern::is_email("user@example.com"));
//! assert_eq!(filter::email("user@@example.com"), None);
//! ```
//!
//! For more examples, see the [examples](https://github.com/iepathos/breakwater/tree/master/examples) directory.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod error;
pub mod filter;
pub mod guard;
pub mod human;
pub mod predicate;
pub mod require;

// Re-exports
pub use error::CheckError;
pub use predicate::{Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check;
    pub use crate::error::CheckError;
    pub use crate::filter;
    pub use crate::guard;
    pub use crate::human;
    pub use crate::predicate::{all_of, any_of, none_of, Predicate, PredicateExt};
    pub use crate::require;
}
