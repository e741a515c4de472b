//! Mapping combinators.
//!
//! - [`Map`]: `f(x)` for each element
//! - [`MapIndexed`]: `f(index, x)`, counting the elements this combinator produces
//! - [`MapPaired`]: `f(left, right)` over two sources, as long as the shorter one
//!
//! All three are lazy: they wrap their sources and only call the function
//! when a cursor is advanced.
//!
//! # Laws
//!
//! ## Length and order
//!
//! ```text
//! len(s.map(f)) == len(s)
//! s.map(f)[i] == f(s[i])
//! ```
//!
//! ## Paired length
//!
//! ```text
//! len(l.map_paired(r, f)) == min(len(l), len(r))
//! ```

use std::fmt;

use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::{Sequence, Traversal};

// =============================================================================
// Map
// =============================================================================

/// A sequence applying a function to every element of its source.
///
/// Created by [`Sequence::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(MapCursor {
            cursor: self.source.cursor()?,
            function: &self.function,
        })
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

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The cursor of a [`Map`] sequence.
pub struct MapCursor<'a, C, F> {
    cursor: C,
    function: &'a F,
}

impl<C, F, U> Cursor for MapCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    #[inline]
    #[track_caller]
    fn next(&mut self) -> Self::Item {
        (self.function)(self.cursor.next())
    }
}

impl<C: fmt::Debug, F> fmt::Debug for MapCursor<'_, C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapCursor")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// MapIndexed
// =============================================================================

/// A sequence applying a function to every element and its position.
///
/// Created by [`Sequence::map_indexed`].
#[derive(Clone)]
pub struct MapIndexed<S, F> {
    source: S,
    function: F,
}

impl<S, F> MapIndexed<S, F> {
    pub(crate) const fn new(source: S, function: F) -> Self {
        Self { source, function }
    }
}

impl<S, F, U> Sequence for MapIndexed<S, F>
where
    S: Sequence,
    F: Fn(usize, S::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapIndexedCursor<'a, S::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(MapIndexedCursor {
            cursor: self.source.cursor()?,
            function: &self.function,
            index: 0,
        })
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

impl<S: fmt::Debug, F> fmt::Debug for MapIndexed<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapIndexed")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// The cursor of a [`MapIndexed`] sequence.
pub struct MapIndexedCursor<'a, C, F> {
    cursor: C,
    function: &'a F,
    index: usize,
}

impl<C, F, U> Cursor for MapIndexedCursor<'_, C, F>
where
    C: Cursor,
    F: Fn(usize, C::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        let value = self.cursor.next();
        let index = self.index;
        self.index += 1;
        (self.function)(index, value)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for MapIndexedCursor<'_, C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapIndexedCursor")
            .field("cursor", &self.cursor)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// MapPaired
// =============================================================================

/// A sequence combining two sources element by element.
///
/// Ends as soon as either source is exhausted; the remaining elements of the
/// longer source are never pulled.
///
/// Created by [`Sequence::map_paired`].
#[derive(Clone)]
pub struct MapPaired<L, R, F> {
    left: L,
    right: R,
    function: F,
}

impl<L, R, F> MapPaired<L, R, F> {
    pub(crate) const fn new(left: L, right: R, function: F) -> Self {
        Self {
            left,
            right,
            function,
        }
    }
}

impl<L, R, F, U> Sequence for MapPaired<L, R, F>
where
    L: Sequence,
    R: Sequence,
    F: Fn(L::Item, R::Item) -> U,
{
    type Item = U;
    type Cursor<'a>
        = MapPairedCursor<'a, L::Cursor<'a>, R::Cursor<'a>, F>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        self.ensure_available()?;
        Ok(MapPairedCursor {
            left: self.left.cursor()?,
            right: self.right.cursor()?,
            function: &self.function,
        })
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        self.left.traversal().combine(self.right.traversal())
    }

    #[inline]
    fn ensure_available(&self) -> Result<(), SequenceError> {
        self.left.ensure_available()?;
        self.right.ensure_available()
    }
}

impl<L: fmt::Debug, R: fmt::Debug, F> fmt::Debug for MapPaired<L, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapPaired")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

/// The cursor of a [`MapPaired`] sequence.
pub struct MapPairedCursor<'a, L, R, F> {
    left: L,
    right: R,
    function: &'a F,
}

impl<L, R, F, U> Cursor for MapPairedCursor<'_, L, R, F>
where
    L: Cursor,
    R: Cursor,
    F: Fn(L::Item, R::Item) -> U,
{
    type Item = U;

    #[inline]
    fn has_next(&self) -> bool {
        self.left.has_next() && self.right.has_next()
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        if !self.has_next() {
            crate::cursor::exhausted();
        }
        let left = self.left.next();
        let right = self.right.next();
        (self.function)(left, right)
    }
}

impl<L: fmt::Debug, R: fmt::Debug, F> fmt::Debug for MapPairedCursor<'_, L, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapPairedCursor")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{from_values, range};
    use crate::source::{from_iter, generate};
    use rstest::rstest;
    use std::cell::Cell;

    fn collect<S: Sequence>(sequence: &S) -> Vec<S::Item> {
        sequence.iter().unwrap().collect()
    }

    #[rstest]
    fn test_map() {
        let mapped = from_values(vec![2, 3, 4]).map(|n| n * 10);
        assert_eq!(collect(&mapped), vec![20, 30, 40]);
    }

    #[rstest]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mapped = range(0, 3).map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(calls.get(), 0);

        let mut cursor = mapped.cursor().unwrap();
        assert!(cursor.has_next());
        assert_eq!(calls.get(), 0);

        let _ = cursor.next();
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_map_indexed() {
        let mapped = from_values(vec![2, 3, 4]).map_indexed(|index, n| (index + 1) * 10 + n);
        assert_eq!(collect(&mapped), vec![12, 23, 34]);
    }

    #[rstest]
    fn test_map_indexed_restarts_per_cursor() {
        let mapped = from_values(vec!["zero", "one"]).map_indexed(|index, name| format!("{index}:{name}"));
        assert_eq!(collect(&mapped), vec!["0:zero", "1:one"]);
        assert_eq!(collect(&mapped), vec!["0:zero", "1:one"]);
    }

    #[rstest]
    fn test_map_indexed_counts_filtered_output() {
        let mapped = range(0, 10)
            .filter(|n| n % 3 == 0)
            .map_indexed(|index, n| (index, n));
        assert_eq!(collect(&mapped), vec![(0, 0), (1, 3), (2, 6), (3, 9)]);
    }

    #[rstest]
    fn test_map_paired_stops_at_shorter_left() {
        let paired = range(0, 5).map_paired(from_values(vec!["zero", "one"]), |left, right| {
            format!("{left}:{right}")
        });
        assert_eq!(collect(&paired), vec!["0:zero", "1:one"]);
    }

    #[rstest]
    fn test_map_paired_stops_at_shorter_right() {
        let paired = range(0, 2).map_paired(range(10, 20), |left, right| left + right);
        assert_eq!(collect(&paired), vec![10, 12]);
    }

    #[rstest]
    fn test_map_paired_does_not_pull_past_shorter_source() {
        let pulled = Cell::new(0);
        let counter = &pulled;
        let counted = generate(move || (0..5).inspect(move |_| counter.set(counter.get() + 1)));
        let paired = range(0, 2).map_paired(counted, |left, right| left * right);
        assert_eq!(collect(&paired), vec![0, 1]);
        // One element of look-ahead beyond the pair that was produced.
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    fn test_map_paired_traversal_is_single_pass_if_either_side_is() {
        let paired = range(0, 2).map_paired(from_iter(0..2), |left, right| left + right);
        assert_eq!(paired.traversal(), Traversal::SinglePass);
        assert_eq!(collect(&paired), vec![0, 2]);
        assert!(paired.cursor().is_err());
    }

    #[rstest]
    #[should_panic(expected = "cursor advanced past exhaustion")]
    fn test_map_paired_next_after_exhaustion_panics() {
        let paired = range(0, 1).map_paired(range(0, 0), |left, right| left + right);
        let _ = paired.cursor().unwrap().next();
    }

    #[rstest]
    fn test_map_over_single_pass_propagates_already_consumed() {
        let mapped = from_iter(vec![1, 2].into_iter()).map(|n| n + 1);
        assert_eq!(mapped.traversal(), Traversal::SinglePass);
        assert_eq!(collect(&mapped), vec![2, 3]);
        assert!(mapped.cursor().unwrap_err().is_already_consumed());
    }

    #[rstest]
    fn test_map_paired_keeps_left_resource_when_right_is_consumed() {
        let left = from_iter(vec![1, 2, 3].into_iter());
        let right = from_iter(vec![10, 20].into_iter());
        assert_eq!(collect(&right), vec![10, 20]);

        let paired = (&left).map_paired(&right, |l, r| l + r);
        assert!(!paired.is_available());
        assert!(paired.cursor().unwrap_err().is_already_consumed());

        assert!(!left.is_consumed());
        assert_eq!(collect(&left), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_map_paired_reports_left_error_first() {
        let left = from_iter(0..2);
        let _ = left.cursor().unwrap();
        let right = from_iter(0..2);

        let paired = (&left).map_paired(&right, |l, r| l + r);
        assert!(paired.ensure_available().unwrap_err().is_already_consumed());
        assert!(paired.cursor().is_err());
        assert!(!right.is_consumed());
    }

    #[rstest]
    fn test_map_cursors_format_their_upstream() {
        let mapped = range(0, 2).map(|n| n + 1);
        let cursor = mapped.cursor().unwrap();
        assert!(format!("{cursor:?}").starts_with("MapCursor { cursor: UnfoldCursor"));

        let indexed = range(0, 2).map_indexed(|index, n| index + n);
        let cursor = indexed.cursor().unwrap();
        assert!(format!("{cursor:?}").contains("index: 0"));

        let paired = range(0, 2).map_paired(from_values(vec!['a']), |n, letter| (n, letter));
        let cursor = paired.cursor().unwrap();
        assert!(format!("{cursor:?}").starts_with("MapPairedCursor { left: UnfoldCursor"));
    }
}
