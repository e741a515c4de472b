//! Filtering combinators with one element of look-ahead.
//!
//! A cursor has to answer `has_next` before `next` is called, but the
//! source only reveals whether an element is accepted after producing it.
//! Filter cursors therefore search ahead for the next accepted element and
//! hold it:
//!
//! ```text
//!            accepted v                    next() returns v
//! SEARCHING ------------> HOLDING(v) ---------------------> SEARCHING
//!     |
//!     | source exhausted
//!     v
//! EXHAUSTED
//! ```
//!
//! The first search runs when the cursor is built, and the next one runs as
//! soon as the held element is handed out, so `has_next` is a plain state
//! check. `SEARCHING` never outlives a single call, so [`Lookahead`] only
//! stores the two resting states.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let even = range(0, 5).filter(|n| n % 2 == 0);
//! assert_eq!(even.to_vec().unwrap(), vec![0, 2, 4]);
//!
//! let fixed_points = values![0, 9, 8, 7, 4].filter_indexed(|index, n| *n as usize == index);
//! assert_eq!(fixed_points.to_vec().unwrap(), vec![0, 4]);
//! ```

use std::fmt;

use crate::cursor::{Cursor, exhausted};
use crate::error::SequenceError;
use crate::sequence::{Sequence, Traversal};

/// The resting state of a filter cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookahead<T> {
    /// An accepted element waiting to be returned by `next`.
    Holding(T),
    /// The source ran out without another accepted element.
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Pulls from `cursor` until `accept` returns `true` or the cursor runs
    /// out, discarding rejected elements.
    fn search<C, A>(cursor: &mut C, mut accept: A) -> Self
    where
        C: Cursor<Item = T>,
        A: FnMut(&T) -> bool,
    {
        while cursor.has_next() {
            let value = cursor.next();
            if accept(&value) {
                return Self::Holding(value);
            }
        }
        Self::Exhausted
    }

    /// Returns `true` if an element is held.
    #[inline]
    pub const fn is_holding(&self) -> bool {
        matches!(self, Self::Holding(_))
    }

    #[track_caller]
    fn take(&mut self) -> T {
        match std::mem::replace(self, Self::Exhausted) {
            Self::Holding(value) => value,
            Self::Exhausted => exhausted(),
        }
    }
}

// =============================================================================
// Filter
// =============================================================================

/// A sequence keeping the elements of its source accepted by a predicate.
///
/// Created by [`Sequence::filter`].
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(FilterCursor::new(self.source.cursor()?, &self.predicate))
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }

    #[inline]
    fn ensure_available(&self) -> Result<(), SequenceError> {
        self.source.ensure_available()
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The cursor of a [`Filter`] sequence.
pub struct FilterCursor<'a, C: Cursor, P> {
    cursor: C,
    predicate: &'a P,
    lookahead: Lookahead<C::Item>,
}

impl<'a, C, P> FilterCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn new(mut cursor: C, predicate: &'a P) -> Self {
        let lookahead = Lookahead::search(&mut cursor, predicate);
        Self {
            cursor,
            predicate,
            lookahead,
        }
    }
}

impl<C, P> Cursor for FilterCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        self.lookahead.is_holding()
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        let value = self.lookahead.take();
        self.lookahead = Lookahead::search(&mut self.cursor, self.predicate);
        value
    }
}

impl<C, P> fmt::Debug for FilterCursor<'_, C, P>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterCursor")
            .field("cursor", &self.cursor)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// FilterIndexed
// =============================================================================

/// A sequence keeping the elements accepted by a predicate that also sees
/// each element's position in the source.
///
/// Created by [`Sequence::filter_indexed`].
#[derive(Clone)]
pub struct FilterIndexed<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> FilterIndexed<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for FilterIndexed<S, P>
where
    S: Sequence,
    P: Fn(usize, &S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = FilterIndexedCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(FilterIndexedCursor::new(
            self.source.cursor()?,
            &self.predicate,
        ))
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.source.traversal()
    }

    #[inline]
    fn ensure_available(&self) -> Result<(), SequenceError> {
        self.source.ensure_available()
    }
}

impl<S: fmt::Debug, P> fmt::Debug for FilterIndexed<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterIndexed")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The cursor of a [`FilterIndexed`] sequence.
///
/// `examined` counts every element pulled from the source, accepted or
/// not.
pub struct FilterIndexedCursor<'a, C: Cursor, P> {
    cursor: C,
    predicate: &'a P,
    examined: usize,
    lookahead: Lookahead<C::Item>,
}

impl<'a, C, P> FilterIndexedCursor<'a, C, P>
where
    C: Cursor,
    P: Fn(usize, &C::Item) -> bool,
{
    fn new(cursor: C, predicate: &'a P) -> Self {
        let mut filter = Self {
            cursor,
            predicate,
            examined: 0,
            lookahead: Lookahead::Exhausted,
        };
        filter.lookahead = filter.search();
        filter
    }

    fn search(&mut self) -> Lookahead<C::Item> {
        let predicate = self.predicate;
        let examined = &mut self.examined;
        Lookahead::search(&mut self.cursor, |value| {
            let index = *examined;
            *examined += 1;
            predicate(index, value)
        })
    }
}

impl<C, P> Cursor for FilterIndexedCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(usize, &C::Item) -> bool,
{
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        self.lookahead.is_holding()
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        let value = self.lookahead.take();
        self.lookahead = self.search();
        value
    }
}

impl<C, P> fmt::Debug for FilterIndexedCursor<'_, C, P>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterIndexedCursor")
            .field("cursor", &self.cursor)
            .field("examined", &self.examined)
            .field("lookahead", &self.lookahead)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{from_values, range};
    use crate::source::from_iter;
    use rstest::rstest;
    use std::cell::Cell;

    fn collect<S: Sequence>(sequence: &S) -> Vec<S::Item> {
        sequence.iter().unwrap().collect()
    }

    #[rstest]
    fn test_filter_even() {
        assert_eq!(collect(&range(0, 5).filter(|n| n % 2 == 0)), vec![0, 2, 4]);
    }

    #[rstest]
    fn test_filter_rejecting_everything_is_empty() {
        let filtered = range(0, 5).filter(|_| false);
        let cursor = filtered.cursor().unwrap();
        assert!(!cursor.has_next());
    }

    #[rstest]
    fn test_filter_indexed_uses_source_position() {
        let filtered = from_values(vec![0, 9, 8, 7, 4]).filter_indexed(|index, n| *n == index);
        assert_eq!(collect(&filtered), vec![0, 4]);
    }

    #[rstest]
    fn test_filter_indexed_counts_rejected_elements() {
        let seen = std::cell::RefCell::new(Vec::new());
        let filtered = from_values(vec!['a', 'b', 'c', 'd']).filter_indexed(|index, letter| {
            seen.borrow_mut().push(index);
            *letter != 'b'
        });
        assert_eq!(collect(&filtered), vec!['a', 'c', 'd']);
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_filter_then_map() {
        let tens = range(0, 5).filter(|n| n % 2 == 1).map(|n| n * 10);
        assert_eq!(collect(&tens), vec![10, 30]);
    }

    #[rstest]
    fn test_filter_searches_at_construction() {
        let examined = Cell::new(0);
        let filtered = range(0, 10).filter(|n| {
            examined.set(examined.get() + 1);
            *n >= 3
        });
        assert_eq!(examined.get(), 0);

        let mut cursor = filtered.cursor().unwrap();
        assert_eq!(examined.get(), 4);

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(examined.get(), 4);

        assert_eq!(cursor.next(), 3);
        assert_eq!(examined.get(), 5);
    }

    #[rstest]
    fn test_filter_is_repeatable_over_repeatable_source() {
        let filtered = range(0, 20).filter(|n| n % 7 == 0);
        assert_eq!(collect(&filtered), vec![0, 7, 14]);
        assert_eq!(collect(&filtered), vec![0, 7, 14]);
    }

    #[rstest]
    fn test_filter_over_single_pass_source() {
        let filtered = from_iter(0..6).filter(|n| n % 2 == 0);
        assert!(filtered.is_single_pass());
        assert_eq!(collect(&filtered), vec![0, 2, 4]);
        assert!(filtered.cursor().unwrap_err().is_already_consumed());
    }

    #[rstest]
    #[should_panic(expected = "cursor advanced past exhaustion")]
    fn test_filter_next_after_exhaustion_panics() {
        let filtered = range(0, 3).filter(|n| *n == 0);
        let mut cursor = filtered.cursor().unwrap();
        let _ = cursor.next();
        let _ = cursor.next();
    }

    #[rstest]
    fn test_lookahead_search_discards_rejected() {
        let source = range(0, 5);
        let mut cursor = source.cursor().unwrap();
        let lookahead = Lookahead::search(&mut cursor, |n| *n > 2);
        assert_eq!(lookahead, Lookahead::Holding(3));
        assert_eq!(cursor.next(), 4);
    }
}
