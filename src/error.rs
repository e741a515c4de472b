//! Error types for sequence traversal.
//!
//! Traversal itself never fails: an exhausted cursor simply reports
//! `has_next() == false`. The conditions here are the ones a caller can
//! recover from:
//!
//! - a single-pass sequence asked for a second cursor,
//! - a seedless reduction over an empty sequence,
//! - a fixed-capacity drain that receives too many elements.

use thiserror::Error;

/// Represents an attempt to traverse a single-pass sequence more than once.
///
/// # Examples
///
/// ```rust
/// use lazyseq::error::AlreadyConsumedError;
///
/// let error = AlreadyConsumedError {
///     sequence_name: "SinglePass",
///     method_name: "cursor",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "SinglePass::cursor: sequence already consumed. A single-pass sequence can be traversed only once."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{sequence_name}::{method_name}: sequence already consumed. A single-pass sequence can be traversed only once."
)]
pub struct AlreadyConsumedError {
    /// The name of the sequence type that was consumed.
    pub sequence_name: &'static str,
    /// The name of the method that requested the traversal.
    pub method_name: &'static str,
}

/// Errors that can occur while obtaining cursors or draining sequences.
///
/// # Examples
///
/// ```rust
/// use lazyseq::error::SequenceError;
///
/// let error = SequenceError::Empty { operation: "reduce" };
/// assert_eq!(format!("{error}"), "reduce: sequence has no elements");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A single-pass sequence has already handed out its cursor.
    #[error(transparent)]
    AlreadyConsumed(#[from] AlreadyConsumedError),
    /// An operation that needs at least one element got none.
    #[error("{operation}: sequence has no elements")]
    Empty {
        /// The operation that required an element.
        operation: &'static str,
    },
    /// A fixed-capacity drain received more elements than it can hold.
    #[error("{operation}: capacity of {capacity} elements exceeded")]
    CapacityExceeded {
        /// The operation that ran out of room.
        operation: &'static str,
        /// The fixed capacity of the target container.
        capacity: usize,
    },
}

impl SequenceError {
    /// Returns `true` if this error reports a second traversal of a
    /// single-pass sequence.
    #[inline]
    pub const fn is_already_consumed(&self) -> bool {
        matches!(self, Self::AlreadyConsumed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_already_consumed_error_display() {
        let error = AlreadyConsumedError {
            sequence_name: "SinglePass",
            method_name: "cursor",
        };
        assert_eq!(
            format!("{error}"),
            "SinglePass::cursor: sequence already consumed. A single-pass sequence can be traversed only once."
        );
    }

    #[rstest]
    fn test_sequence_error_display_is_transparent() {
        let inner = AlreadyConsumedError {
            sequence_name: "SinglePass",
            method_name: "cursor",
        };
        let error = SequenceError::from(inner.clone());
        assert_eq!(format!("{error}"), format!("{inner}"));
        assert!(error.is_already_consumed());
    }

    #[rstest]
    #[case(SequenceError::Empty { operation: "reduce" }, "reduce: sequence has no elements")]
    #[case(
        SequenceError::CapacityExceeded { operation: "to_array", capacity: 3 },
        "to_array: capacity of 3 elements exceeded"
    )]
    fn test_sequence_error_display(#[case] error: SequenceError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
        assert!(!error.is_already_consumed());
    }

    #[rstest]
    fn test_sequence_error_source() {
        use std::error::Error;

        let error = SequenceError::Empty { operation: "reduce" };
        assert!(error.source().is_none());
    }
}
