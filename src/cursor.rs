//! The cursor protocol.
//!
//! A [`Cursor`] is the mutable traversal state behind a
//! [`Sequence`](crate::Sequence). It exposes exactly two operations:
//!
//! - [`has_next`](Cursor::has_next): reports whether another element is
//!   available, without side effects
//! - [`next`](Cursor::next): produces that element and advances
//!
//! Host iterators only offer a combined "advance and maybe produce" step, so
//! [`IterCursor`] adapts them by pulling one element of look-ahead.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::cursor::{Cursor, IterCursor};
//!
//! let mut cursor = IterCursor::new(vec![1, 2].into_iter());
//! assert!(cursor.has_next());
//! assert_eq!(cursor.next(), 1);
//! assert_eq!(cursor.next(), 2);
//! assert!(!cursor.has_next());
//! ```

/// Mutable traversal state over a sequence of elements.
///
/// # Contract
///
/// - `has_next` must not change the observable state of the cursor.
/// - `next` may only be called while `has_next` returns `true`. Calling it
///   on an exhausted cursor is a caller error and panics.
///
/// A cursor is owned by whoever is driving it and is never shared between
/// traversals.
pub trait Cursor {
    /// The type of elements produced.
    type Item;

    /// Returns `true` if [`next`](Cursor::next) will produce an element.
    fn has_next(&self) -> bool;

    /// Produces the next element and advances the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    fn next(&mut self) -> Self::Item;

    /// Converts the cursor into a standard [`Iterator`].
    #[inline]
    fn into_iterator(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    #[inline]
    fn next(&mut self) -> Self::Item {
        (**self).next()
    }
}

/// Panics with the message shared by every cursor advanced past its end.
#[cold]
#[track_caller]
pub(crate) fn exhausted() -> ! {
    panic!("cursor advanced past exhaustion")
}

// =============================================================================
// CursorIter
// =============================================================================

/// An [`Iterator`] driving a [`Cursor`].
///
/// Created by [`Cursor::into_iterator`] and
/// [`Sequence::iter`](crate::Sequence::iter).
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    /// Returns the wrapped cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            Some(self.cursor.next())
        } else {
            None
        }
    }
}

impl<C: Cursor> std::iter::FusedIterator for CursorIter<C> {}

// =============================================================================
// IterCursor
// =============================================================================

/// A [`Cursor`] over a host [`Iterator`].
///
/// The first element is pulled when the cursor is built, and each call to
/// `next` pulls the one after it, so `has_next` only inspects the held
/// element.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iterator: I,
    lookahead: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    /// Wraps `iterator`, pulling its first element.
    pub fn new(mut iterator: I) -> Self {
        let lookahead = iterator.next();
        Self {
            iterator,
            lookahead,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        match self.lookahead.take() {
            Some(value) => {
                self.lookahead = self.iterator.next();
                value
            }
            None => exhausted(),
        }
    }
}
