//! # lazyseq
//!
//! Lazy, cursor-based sequences with a small algebra of combinators.
//!
//! ## Overview
//!
//! A [`Sequence`] is a recipe that hands out [`Cursor`]s. A cursor answers
//! two questions, "is there another element?" and "give me the next one",
//! and nothing is computed until a cursor is driven. The library provides:
//!
//! - **Sources**: the [`unfold`](source::unfold) adapter, host collections,
//!   iterator factories and single-pass iterators
//! - **Generators**: integer ranges, fixed values, string code points
//! - **Combinators**: `map`, `map_indexed`, `map_paired`, `filter`,
//!   `filter_indexed`
//! - **Folds**: `fold` with a seed, `reduce` without one
//! - **Ordering**: stable sorts driven by composable [`Comparator`]s
//! - **Drains**: collection into `Vec`, `LinkedList`, hash and tree sets and
//!   maps, and fixed-size arrays
//!
//! ## Repeatable and single-pass sequences
//!
//! Most sequences can be traversed any number of times. A sequence wrapping
//! an already-open iterator ([`from_iter`](source::from_iter)) can only be
//! traversed once; asking it for a second cursor fails with
//! [`SequenceError::AlreadyConsumed`] rather than yielding nothing. Query
//! [`Sequence::traversal`] to tell them apart.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash` for [`Drain::to_hash_set`] and
//!   [`Drain::to_hash_map`]
//! - `ahash`: use `ahash` for the same drains
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let labels = range(0, 10)
//!     .filter(|n| n % 3 == 0)
//!     .map_indexed(|index, n| format!("{index}:{n}"));
//! assert_eq!(labels.to_vec().unwrap(), vec!["0:0", "1:3", "2:6", "3:9"]);
//!
//! let total = range_closed(1, 9).fold(0, |accumulator, n| accumulator + n).unwrap();
//! assert_eq!(total, 45);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits, constructors and types needed for everyday use.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::{Cursor, CursorIter};
    pub use crate::drain::Drain;
    pub use crate::error::{AlreadyConsumedError, SequenceError};
    pub use crate::generator::{code_points, from_values, range, range_closed, range_step};
    pub use crate::ordering::Comparator;
    pub use crate::sequence::{Sequence, Traversal};
    pub use crate::source::{Values, from_iter, from_iterable, generate, unfold};
    pub use crate::values;
}

pub mod cursor;
pub mod drain;
pub mod error;
pub mod filter;
pub mod generator;
pub mod map;
pub mod ordering;
pub mod sequence;
pub mod source;

pub use cursor::Cursor;
pub use drain::Drain;
pub use error::SequenceError;
pub use ordering::Comparator;
pub use sequence::{Sequence, Traversal};
