//! # Fluent Extensions
//!
//! Small extension helpers for collections and fluent call chains.
//!
//! ## Modules
//!
//! - [`collections`]: emptiness predicates, duplicate detection, absent-item counts
//! - [`fluent`]: chainable conditional actions and lazy defaults
//! - [`error`]: error type shared by the fallible helpers
//!
//! ## Example
//!
//! ```rust
//! use fluent_ext::prelude::*;
//!
//! let ids = vec![4, 8, 4, 15, 8];
//! let report = ids
//!     .iter()
//!     .duplicates()
//!     .apply_if_by(|d| d.len() > 1, |d| d.sort());
//! assert_eq!(report, vec![&4, &8]);
//! ```

pub mod collections;
pub mod error;
pub mod fluent;

pub use collections::{
    count_absent_items, duplicates, duplicates_at_least, duplicates_by, duplicates_with,
    is_empty_or_absent, is_present_and_nonempty, Group,
};
pub use error::{ExtError, ExtResult};

/// Extension traits, for glob import.
pub mod prelude {
    pub use crate::collections::{MaybeAbsent, OptionalSequenceExt, SequenceExt};
    pub use crate::fluent::{Fluent, FluentOption};
}
