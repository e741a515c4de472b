//! Generators: numeric ranges, fixed values and code points.
//!
//! The numeric ranges are [`Unfold`] sequences over a [`RangeState`]
//! context, so every cursor re-derives its counter from the start value.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! assert_eq!(range(2, 5).to_vec().unwrap(), vec![2, 3, 4]);
//! assert_eq!(range_step(5, 2, -2).to_vec().unwrap(), vec![5, 3]);
//! assert_eq!(range_closed(1, 3).to_vec().unwrap(), vec![1, 2, 3]);
//! assert_eq!(values![2, 3, 4].to_vec().unwrap(), vec![2, 3, 4]);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::cursor::IterCursor;
use crate::error::SequenceError;
use crate::sequence::Sequence;
use crate::source::{Unfold, Values, unfold};

/// Primitive integers usable as range counters.
///
/// Advancing past the type's bounds ends the range instead of wrapping.
pub trait Integer: Copy + PartialOrd + fmt::Debug {
    /// The additive identity.
    const ZERO: Self;
    /// The step of [`range`] and [`range_closed`].
    const ONE: Self;

    /// Adds `step`, returning `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($type:ty),* $(,)?) => {
        $(
            impl Integer for $type {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Ranges
// =============================================================================

/// The counter threaded through a range cursor.
///
/// `current` is `None` once the counter has stepped past the integer type's
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState<T> {
    current: Option<T>,
    end: T,
    step: T,
}

impl<T: Integer> RangeState<T> {
    const fn new(start: T, end: T, step: T) -> Self {
        Self {
            current: Some(start),
            end,
            step,
        }
    }

    fn below_end(&self) -> bool {
        self.current.is_some_and(|current| current < self.end)
    }

    fn at_or_below_end(&self) -> bool {
        self.current.is_some_and(|current| current <= self.end)
    }

    fn before_end_in_step_direction(&self) -> bool {
        self.current.is_some_and(|current| {
            if self.step > T::ZERO {
                current < self.end
            } else {
                current > self.end
            }
        })
    }

    fn advance(&mut self) -> T {
        let Some(current) = self.current else {
            crate::cursor::exhausted();
        };
        self.current = current.checked_step(self.step);
        current
    }
}

/// A numeric range sequence.
///
/// Created by [`range`], [`range_step`] and [`range_closed`].
pub type Range<T> = Unfold<RangeState<T>, fn(&RangeState<T>) -> bool, fn(&mut RangeState<T>) -> T>;

/// The half-open range `start, start + 1, ..., end - 1`.
///
/// Empty if `start >= end`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(2, 5).to_vec().unwrap(), vec![2, 3, 4]);
/// assert!(range(2, 2).to_vec().unwrap().is_empty());
/// ```
pub fn range<T: Integer>(start: T, end: T) -> Range<T> {
    range_with(RangeState::new(start, end, T::ONE), RangeState::below_end)
}

/// The inclusive range `start, start + 1, ..., end`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range_closed(250u8, 255).to_vec().unwrap().len(), 6);
/// ```
pub fn range_closed<T: Integer>(start: T, end: T) -> Range<T> {
    range_with(RangeState::new(start, end, T::ONE), RangeState::at_or_below_end)
}

/// The range `start, start + step, ...`, stopping before `end` in the
/// direction of `step`.
///
/// # Panics
///
/// Panics if `step` is zero, since such a range would never reach `end`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range_step(2, 5, 2).to_vec().unwrap(), vec![2, 4]);
/// assert_eq!(range_step(5, 2, -2).to_vec().unwrap(), vec![5, 3]);
/// assert!(range_step(5, 9, -2).to_vec().unwrap().is_empty());
/// ```
#[track_caller]
pub fn range_step<T: Integer>(start: T, end: T, step: T) -> Range<T> {
    assert!(step != T::ZERO, "range_step: step must not be zero");
    range_with(
        RangeState::new(start, end, step),
        RangeState::before_end_in_step_direction,
    )
}

fn range_with<T: Integer>(state: RangeState<T>, has_next: fn(&RangeState<T>) -> bool) -> Range<T> {
    unfold(state, has_next, RangeState::advance as fn(&mut RangeState<T>) -> T)
}

// =============================================================================
// Fixed values
// =============================================================================

/// A repeatable sequence over the given values, in order.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values = from_values(vec![2, 3, 4]);
/// assert_eq!(values.to_vec().unwrap(), vec![2, 3, 4]);
/// ```
#[inline]
pub fn from_values<T: Clone>(values: impl Into<Vec<T>>) -> Values<T> {
    Values::new(values.into())
}

/// Builds a [`Values`] sequence from a list of expressions.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(values![0, 9, 8].to_vec().unwrap(), vec![0, 9, 8]);
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        $crate::source::Values::new(::std::vec![$($value),*])
    };
}

// =============================================================================
// Code points
// =============================================================================

/// A repeatable sequence over the Unicode scalar values of a string.
///
/// Created by [`code_points`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePoints<'t> {
    text: Cow<'t, str>,
}

/// The code points of `text`, one `char` per Unicode scalar value.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let scalars = code_points("a𩸽c").map(u32::from);
/// assert_eq!(scalars.to_vec().unwrap(), vec![97, 171_581, 99]);
/// ```
#[inline]
pub fn code_points<'t>(text: impl Into<Cow<'t, str>>) -> CodePoints<'t> {
    CodePoints { text: text.into() }
}

impl Sequence for CodePoints<'_> {
    type Item = char;
    type Cursor<'a>
        = IterCursor<std::str::Chars<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(IterCursor::new(self.text.chars()))
    }
}
