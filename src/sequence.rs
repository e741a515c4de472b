//! The `Sequence` trait - a repeatable recipe for cursors.
//!
//! A [`Sequence`] does not hold traversal state. Each call to
//! [`cursor`](Sequence::cursor) starts a fresh traversal, unless the sequence
//! wraps a resource that can only be read once; such sequences report
//! [`Traversal::SinglePass`] and fail the second request with
//! [`SequenceError::AlreadyConsumed`].
//!
//! # Laziness
//!
//! The combinators [`map`](Sequence::map),
//! [`map_indexed`](Sequence::map_indexed), [`map_paired`](Sequence::map_paired),
//! [`filter`](Sequence::filter) and [`filter_indexed`](Sequence::filter_indexed)
//! only build new recipes; no element is produced until a cursor is driven.
//! [`fold`](Sequence::fold), [`reduce`](Sequence::reduce) and the `sorted*`
//! family drain their source.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let odd_tens = range(0, 5).filter(|n| n % 2 == 1).map(|n| n * 10);
//! assert_eq!(odd_tens.to_vec().unwrap(), vec![10, 30]);
//! // Repeatable: a second traversal produces the same elements.
//! assert_eq!(odd_tens.to_vec().unwrap(), vec![10, 30]);
//! ```

use std::cmp::Ordering;

use crate::cursor::{Cursor, CursorIter};
use crate::error::SequenceError;
use crate::filter::{Filter, FilterIndexed};
use crate::map::{Map, MapIndexed, MapPaired};
use crate::ordering::Comparator;
use crate::source::Values;

/// Whether a sequence can be traversed more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Every cursor request starts a fresh traversal.
    Repeatable,
    /// Only the first cursor request succeeds.
    SinglePass,
}

impl Traversal {
    /// Combines the traversal kinds of two sources read side by side.
    ///
    /// The result is single-pass if either side is.
    #[inline]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Repeatable, Self::Repeatable) => Self::Repeatable,
            _ => Self::SinglePass,
        }
    }
}

/// A lazy sequence of elements that hands out [`Cursor`]s on demand.
///
/// # Required Methods
///
/// - `cursor`: start a traversal
///
/// # Provided Methods
///
/// - `traversal`, `is_single_pass`: query repeatability
/// - `ensure_available`, `is_available`: check a traversal can start
/// - `iter`: traverse with a standard [`Iterator`]
/// - `map`, `map_indexed`, `map_paired`, `filter`, `filter_indexed`: lazy
///   combinators
/// - `fold`, `reduce`: left folds
/// - `sorted`, `sorted_by`, `sorted_with`, `reversed`: materializing
///   reorderings
///
/// Drains into containers live on [`Drain`](crate::drain::Drain), which every
/// sequence implements.
pub trait Sequence {
    /// The type of elements produced.
    type Item;

    /// The cursor type, which may borrow from the sequence.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::AlreadyConsumed`] if the sequence is
    /// single-pass and has already handed out a cursor.
    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError>;

    /// Reports whether this sequence may be traversed more than once.
    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::Repeatable
    }

    /// Returns `true` if only the first cursor request can succeed.
    #[inline]
    fn is_single_pass(&self) -> bool {
        self.traversal() == Traversal::SinglePass
    }

    /// Checks, without starting a traversal, that [`cursor`](Sequence::cursor)
    /// would succeed.
    ///
    /// Combinators that read several sources check all of them before taking
    /// any cursor, so a failure on one side never consumes another.
    ///
    /// # Errors
    ///
    /// Returns the error `cursor` would return.
    #[inline]
    fn ensure_available(&self) -> Result<(), SequenceError> {
        Ok(())
    }

    /// Returns `true` if [`cursor`](Sequence::cursor) would succeed.
    #[inline]
    fn is_available(&self) -> bool {
        self.ensure_available().is_ok()
    }

    /// Starts a new traversal driven as a standard [`Iterator`].
    ///
    /// # Errors
    ///
    /// Same as [`cursor`](Sequence::cursor).
    #[inline]
    fn iter(&self) -> Result<CursorIter<Self::Cursor<'_>>, SequenceError> {
        Ok(self.cursor()?.into_iterator())
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Lazily applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let tens = from_values(vec![2, 3, 4]).map(|n| n * 10);
    /// assert_eq!(tens.to_vec().unwrap(), vec![20, 30, 40]);
    /// ```
    #[inline]
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Lazily applies `function` to every element and its zero-based
    /// position in this sequence.
    ///
    /// The index counts elements produced by `self`, so after a filter it
    /// numbers the surviving elements `0, 1, 2, ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let labelled = from_values(vec!["zero", "one"]).map_indexed(|index, name| format!("{index}:{name}"));
    /// assert_eq!(labelled.to_vec().unwrap(), vec!["0:zero", "1:one"]);
    /// ```
    #[inline]
    fn map_indexed<U, F>(self, function: F) -> MapIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(usize, Self::Item) -> U,
    {
        MapIndexed::new(self, function)
    }

    /// Lazily pairs elements of `self` and `other` by position.
    ///
    /// Stops as soon as either side is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let paired = range(0, 5).map_paired(from_values(vec!["zero", "one"]), |left, right| {
    ///     format!("{left}:{right}")
    /// });
    /// assert_eq!(paired.to_vec().unwrap(), vec!["0:zero", "1:one"]);
    /// ```
    #[inline]
    fn map_paired<R, U, F>(self, other: R, function: F) -> MapPaired<Self, R, F>
    where
        Self: Sized,
        R: Sequence,
        F: Fn(Self::Item, R::Item) -> U,
    {
        MapPaired::new(self, other, function)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Lazily keeps the elements accepted by `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let even = range(0, 5).filter(|n| n % 2 == 0);
    /// assert_eq!(even.to_vec().unwrap(), vec![0, 2, 4]);
    /// ```
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Lazily keeps the elements accepted by `predicate`, which also receives
    /// the element's zero-based position in the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let fixed_points = from_values(vec![0, 9, 8, 7, 4])
    ///     .filter_indexed(|index, n| usize::try_from(*n) == Ok(index));
    /// assert_eq!(fixed_points.to_vec().unwrap(), vec![0, 4]);
    /// ```
    #[inline]
    fn filter_indexed<P>(self, predicate: P) -> FilterIndexed<Self, P>
    where
        Self: Sized,
        P: Fn(usize, &Self::Item) -> bool,
    {
        FilterIndexed::new(self, predicate)
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Folds the sequence from left to right, starting from `seed`.
    ///
    /// Returns `seed` unchanged for an empty sequence.
    ///
    /// # Errors
    ///
    /// Same as [`cursor`](Sequence::cursor).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let sum = range_closed(1, 9).fold(0, |accumulator, n| accumulator + n);
    /// assert_eq!(sum, Ok(45));
    /// ```
    fn fold<B, F>(&self, seed: B, mut function: F) -> Result<B, SequenceError>
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut cursor = self.cursor()?;
        let mut accumulator = seed;
        while cursor.has_next() {
            accumulator = function(accumulator, cursor.next());
        }
        Ok(accumulator)
    }

    /// Folds the sequence from left to right, using the first element as the
    /// initial accumulator.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::Empty`] if the sequence has no elements
    /// - anything [`cursor`](Sequence::cursor) returns
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// assert_eq!(range_closed(1, 5).reduce(|a, b| a * b), Ok(120));
    /// assert!(range(0, 0).reduce(|a, b| a + b).is_err());
    /// ```
    fn reduce<F>(&self, mut function: F) -> Result<Self::Item, SequenceError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.cursor()?;
        if !cursor.has_next() {
            return Err(SequenceError::Empty {
                operation: "reduce",
            });
        }
        let mut accumulator = cursor.next();
        while cursor.has_next() {
            accumulator = function(accumulator, cursor.next());
        }
        Ok(accumulator)
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Drains the sequence and sorts it stably with `compare`.
    ///
    /// Elements that compare equal keep their original relative order. The
    /// result is materialized and repeatable.
    ///
    /// # Errors
    ///
    /// Same as [`cursor`](Sequence::cursor).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let descending = from_values(vec![2, 0, 1, 4, 3]).sorted_by(|a, b| b.cmp(a)).unwrap();
    /// assert_eq!(descending.to_vec().unwrap(), vec![4, 3, 2, 1, 0]);
    /// ```
    fn sorted_by<F>(&self, compare: F) -> Result<Values<Self::Item>, SequenceError>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut buffer: Vec<Self::Item> = self.iter()?.collect();
        buffer.sort_by(compare);
        tracing::trace!(length = buffer.len(), "materialized sorted sequence");
        Ok(Values::new(buffer))
    }

    /// Drains the sequence and sorts it stably with a [`Comparator`].
    ///
    /// # Errors
    ///
    /// Same as [`cursor`](Sequence::cursor).
    #[inline]
    fn sorted_with(&self, comparator: &Comparator<Self::Item>) -> Result<Values<Self::Item>, SequenceError> {
        self.sorted_by(|left, right| comparator.compare(left, right))
    }

    /// Drains the sequence and sorts it stably in natural order.
    ///
    /// # Errors
    ///
    /// Same as [`cursor`](Sequence::cursor).
    #[inline]
    fn sorted(&self) -> Result<Values<Self::Item>, SequenceError>
    where
        Self::Item: Ord,
    {
        self.sorted_by(Ord::cmp)
    }

    /// Drains the sequence into a materialized sequence in reverse order.
    ///
    /// # Errors
    ///
    /// Same as [`cursor`](Sequence::cursor).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let backwards = from_values(vec![2, 0, 1, 4, 3]).reversed().unwrap();
    /// assert_eq!(backwards.to_vec().unwrap(), vec![3, 4, 1, 0, 2]);
    /// ```
    fn reversed(&self) -> Result<Values<Self::Item>, SequenceError> {
        let mut buffer: Vec<Self::Item> = self.iter()?.collect();
        buffer.reverse();
        Ok(Values::new(buffer))
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        (**self).cursor()
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        (**self).traversal()
    }

    #[inline]
    fn ensure_available(&self) -> Result<(), SequenceError> {
        (**self).ensure_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{from_values, range, range_closed};
    use rstest::rstest;

    #[rstest]
    #[case(Traversal::Repeatable, Traversal::Repeatable, Traversal::Repeatable)]
    #[case(Traversal::Repeatable, Traversal::SinglePass, Traversal::SinglePass)]
    #[case(Traversal::SinglePass, Traversal::Repeatable, Traversal::SinglePass)]
    #[case(Traversal::SinglePass, Traversal::SinglePass, Traversal::SinglePass)]
    fn test_traversal_combine(
        #[case] left: Traversal,
        #[case] right: Traversal,
        #[case] expected: Traversal,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn test_fold_with_seed() {
        assert_eq!(range_closed(1, 9).fold(0, |accumulator, n| accumulator + n), Ok(45));
    }

    #[rstest]
    fn test_fold_empty_returns_seed() {
        assert_eq!(range(3, 3).fold(17, |accumulator, n| accumulator + n), Ok(17));
    }

    #[rstest]
    fn test_fold_is_left_to_right() {
        let digits = from_values(vec![1, 2, 3]).fold(String::new(), |mut text, n| {
            text.push_str(&n.to_string());
            text
        });
        assert_eq!(digits.as_deref(), Ok("123"));
    }

    #[rstest]
    #[case(range_closed(1, 9), 45)]
    #[case(range_closed(7, 7), 7)]
    fn test_reduce_sum(#[case] source: crate::generator::Range<i32>, #[case] expected: i32) {
        assert_eq!(source.reduce(|a, b| a + b), Ok(expected));
    }

    #[rstest]
    fn test_reduce_product() {
        assert_eq!(range_closed(1, 5).reduce(|a, b| a * b), Ok(120));
    }

    #[rstest]
    fn test_reduce_empty_fails() {
        assert_eq!(
            range(0, 0).reduce(|a, b| a + b),
            Err(SequenceError::Empty {
                operation: "reduce"
            })
        );
    }

    #[rstest]
    fn test_reference_is_a_sequence() {
        let source = range(0, 3);
        let borrowed = &source;
        assert_eq!(borrowed.iter().unwrap().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(borrowed.traversal(), Traversal::Repeatable);
    }

    #[rstest]
    fn test_sorted_is_stable() {
        let records = from_values(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        let sorted = records.sorted_by(|left, right| left.0.cmp(&right.0)).unwrap();
        assert_eq!(
            sorted.iter().unwrap().collect::<Vec<_>>(),
            vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]
        );
    }

    #[rstest]
    fn test_reversed() {
        let reversed = from_values(vec![2, 0, 1, 4, 3]).reversed().unwrap();
        assert_eq!(reversed.iter().unwrap().collect::<Vec<_>>(), vec![3, 4, 1, 0, 2]);
    }
}
