//! # simple-set
//!
//! A small insertion-ordered set built on a dynamic array, with the surface of
//! a native set type.
//!
//! ## Overview
//!
//! [`OrderedSet`] keeps unique values in the order they were first added and
//! offers:
//!
//! - **Mutation**: `add` (chainable), `insert`, `delete`, `clear`
//! - **Lookup**: `has`, `size`
//! - **Snapshots**: `values`, `keys`, `entries`
//! - **Iteration**: `for_each` with an optional explicit context, fallible
//!   `try_for_each`, and the standard `IntoIterator`/`FromIterator`/`Extend`
//!   traits
//!
//! Uniqueness is decided by `PartialEq` alone. Lookups are linear scans, which
//! keeps the element requirements minimal and suits small sets.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence in insertion order
//! - `tracing`: `trace`-level events for mutations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use simple_set::prelude::*;
//!
//! let mut set = OrderedSet::from_values(["first", "second"]);
//! set.add("second").add("fifth").add("fifth");
//! assert_eq!(set.size(), 3);
//!
//! let collected: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(collected, set.values());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use simple_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::DuplicateValueError;
    pub use crate::OrderedSet;
}

mod error;
mod ordered_set;
mod trace;

pub use error::DuplicateValueError;
pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
