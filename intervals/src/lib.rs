//! Track a boolean attribute over a sparse integer domain.
//!
//! The [Store] represents a step function from `u64` ids to `bool` as an ordered list of
//! [Marker]s. Each marker records the id at which the attribute changes and the state that
//! begins there:
//!
//! ```text
//! ids:      0 ... 4 | 5 ... 10 | 11 ... 19 | 20 ...
//! markers:          (5, true)  (11, false) (20, true)
//! state:    false   | true     | false     | true (open tail)
//! ```
//!
//! Markers are kept normalized: ids are strictly increasing and no two adjacent markers carry
//! the same state. Any id below the first marker is `false`.
//!
//! # Range Convention
//!
//! Updates take an _inclusive_ range `[start, end]`. Internally the end is stored as the
//! exclusive boundary `end + 1`, so `u64::MAX` can never be the end of an update.
//!
//! # Open Tail
//!
//! The region at and after the last marker is never closed. [Store::count_set_extent] excludes
//! it: a store whose last marker is `true` reports only the closed runs before it. Because every
//! update re-asserts the state that follows it, a store built purely through [Store::set_range]
//! always ends in a `false` marker, but callers mixing in other constructions must keep this
//! contract in mind.
//!
//! # Example
//!
//! ```rust
//! use freshness_intervals::Store;
//!
//! let mut store = Store::new();
//! store.set_range(5, 10);
//! store.set_range(8, 12);
//!
//! assert!(!store.is_set(4));
//! assert!(store.is_set(12));
//! assert!(!store.is_set(13));
//! assert_eq!(store.count_set_extent(), 8);
//! ```

mod store;
pub use store::{Marker, Ranges, Store};

/// Errors that can occur when updating a [Store].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The start of the range is greater than its end.
    #[error("invalid range: start ({start}) > end ({end})")]
    InvalidRange { start: u64, end: u64 },
    /// The exclusive boundary `end + 1` does not fit in the domain.
    #[error("range end overflows the domain: {end}")]
    EndOverflow { end: u64 },
}
