//! Sequence sources: the cursor adapter and wrappers for host data.
//!
//! This module turns raw state into [`Sequence`]s:
//!
//! - [`unfold`]: opaque context plus a has-next predicate and a next function
//! - [`from_iterable`]: a host collection that can be cloned per traversal
//! - [`generate`]: a factory called once per traversal
//! - [`from_iter`]: an already-open iterator, traversable once
//! - [`Values`]: an owned, materialized buffer
//!
//! All of them except [`SinglePass`] are repeatable.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let countdown = unfold(3, |n| *n > 0, |n| {
//!     let current = *n;
//!     *n -= 1;
//!     current
//! });
//! assert_eq!(countdown.to_vec().unwrap(), vec![3, 2, 1]);
//! assert_eq!(countdown.to_vec().unwrap(), vec![3, 2, 1]);
//!
//! let once = from_iter(vec![1, 2].into_iter());
//! assert_eq!(once.to_vec().unwrap(), vec![1, 2]);
//! assert!(once.to_vec().unwrap_err().is_already_consumed());
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::cursor::{Cursor, IterCursor, exhausted};
use crate::error::{AlreadyConsumedError, SequenceError};
use crate::sequence::{Sequence, Traversal};

// =============================================================================
// Unfold
// =============================================================================

/// A repeatable sequence built from a context and two functions.
///
/// Created by [`unfold`].
#[derive(Clone)]
pub struct Unfold<C, H, N> {
    context: C,
    has_next: H,
    next: N,
}

/// Builds a repeatable sequence from an initial context.
///
/// Every cursor starts from its own clone of `context`. `has_next` inspects
/// the context; `next` produces a value and advances the context.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let powers = unfold(1u32, |n| *n <= 8, |n| {
///     let current = *n;
///     *n *= 2;
///     current
/// });
/// assert_eq!(powers.to_vec().unwrap(), vec![1, 2, 4, 8]);
/// ```
#[inline]
pub const fn unfold<C, T, H, N>(context: C, has_next: H, next: N) -> Unfold<C, H, N>
where
    C: Clone,
    H: Fn(&C) -> bool,
    N: Fn(&mut C) -> T,
{
    Unfold {
        context,
        has_next,
        next,
    }
}

impl<C, T, H, N> Sequence for Unfold<C, H, N>
where
    C: Clone,
    H: Fn(&C) -> bool,
    N: Fn(&mut C) -> T,
{
    type Item = T;
    type Cursor<'a>
        = UnfoldCursor<'a, C, H, N>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(UnfoldCursor {
            context: self.context.clone(),
            has_next: &self.has_next,
            next: &self.next,
        })
    }
}

impl<C: fmt::Debug, H, N> fmt::Debug for Unfold<C, H, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unfold")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// The cursor of an [`Unfold`] sequence.
pub struct UnfoldCursor<'a, C, H, N> {
    context: C,
    has_next: &'a H,
    next: &'a N,
}

impl<C, T, H, N> Cursor for UnfoldCursor<'_, C, H, N>
where
    H: Fn(&C) -> bool,
    N: Fn(&mut C) -> T,
{
    type Item = T;

    #[inline]
    fn has_next(&self) -> bool {
        (self.has_next)(&self.context)
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        if !self.has_next() {
            exhausted();
        }
        (self.next)(&mut self.context)
    }
}

impl<C: fmt::Debug, H, N> fmt::Debug for UnfoldCursor<'_, C, H, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UnfoldCursor")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Iterable
// =============================================================================

/// A repeatable sequence over a cloneable host collection.
///
/// Created by [`from_iterable`].
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    collection: I,
}

/// Wraps a host collection as a repeatable sequence.
///
/// Each cursor iterates a fresh clone of `collection`, so passing a reference
/// (`&vec`, `&set`) traverses without copying the elements.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let names = vec!["zero".to_string(), "one".to_string()];
/// let lengths = from_iterable(&names).map(String::len);
/// assert_eq!(lengths.to_vec().unwrap(), vec![4, 3]);
/// ```
#[inline]
pub const fn from_iterable<I>(collection: I) -> Iterable<I>
where
    I: IntoIterator + Clone,
{
    Iterable { collection }
}

impl<I> Sequence for Iterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<I::IntoIter>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(IterCursor::new(self.collection.clone().into_iter()))
    }
}

// =============================================================================
// Generate
// =============================================================================

/// A repeatable sequence whose cursors each come from a fresh call to a
/// factory.
///
/// Created by [`generate`].
#[derive(Clone)]
pub struct Generate<F> {
    factory: F,
}

/// Builds a repeatable sequence from an iterator factory.
///
/// `factory` runs once per cursor request, never at construction.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = generate(|| (1..4).map(|n| n * n));
/// assert_eq!(squares.to_vec().unwrap(), vec![1, 4, 9]);
/// assert_eq!(squares.to_vec().unwrap(), vec![1, 4, 9]);
/// ```
#[inline]
pub const fn generate<F, I>(factory: F) -> Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    Generate { factory }
}

impl<F, I> Sequence for Generate<F>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<I::IntoIter>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(IterCursor::new((self.factory)().into_iter()))
    }
}

impl<F> fmt::Debug for Generate<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Generate").finish_non_exhaustive()
    }
}

// =============================================================================
// SinglePass
// =============================================================================

/// A sequence over an externally owned iterator that can be traversed once.
///
/// The first [`cursor`](Sequence::cursor) call takes the iterator. Every
/// later call fails with [`SequenceError::AlreadyConsumed`] instead of
/// returning an empty traversal.
///
/// Created by [`from_iter`].
#[derive(Debug)]
pub struct SinglePass<I> {
    resource: RefCell<Option<I>>,
}

/// Wraps an already-open iterator as a single-pass sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let stream = from_iter("a b".split(' '));
/// assert!(stream.is_single_pass());
/// assert_eq!(stream.to_vec().unwrap(), vec!["a", "b"]);
/// assert!(stream.cursor().is_err());
/// ```
#[inline]
pub const fn from_iter<I: Iterator>(iterator: I) -> SinglePass<I> {
    SinglePass {
        resource: RefCell::new(Some(iterator)),
    }
}

impl<I> SinglePass<I> {
    /// Returns `true` once the iterator has been handed to a cursor.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.resource.borrow().is_none()
    }

    fn already_consumed() -> SequenceError {
        AlreadyConsumedError {
            sequence_name: "SinglePass",
            method_name: "cursor",
        }
        .into()
    }
}

impl<I: Iterator> Sequence for SinglePass<I> {
    type Item = I::Item;
    type Cursor<'a>
        = IterCursor<I>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        let Some(iterator) = self.resource.borrow_mut().take() else {
            tracing::debug!("rejected second traversal of a single-pass sequence");
            return Err(Self::already_consumed());
        };
        tracing::trace!("single-pass resource handed to its cursor");
        Ok(IterCursor::new(iterator))
    }

    #[inline]
    fn traversal(&self) -> Traversal {
        Traversal::SinglePass
    }

    fn ensure_available(&self) -> Result<(), SequenceError> {
        if self.is_consumed() {
            Err(Self::already_consumed())
        } else {
            Ok(())
        }
    }
}

// =============================================================================
// Values
// =============================================================================

/// An owned, materialized sequence.
///
/// Cursors borrow the buffer and yield clones, so a `Values` sequence is
/// repeatable. Produced by [`from_values`](crate::generator::from_values) and
/// by the `sorted*` and `reversed` operations of [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Values<T> {
    elements: Vec<T>,
}

impl<T> Values<T> {
    /// Wraps an owned buffer.
    #[inline]
    pub const fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the owned buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> Sequence for Values<T> {
    type Item = T;
    type Cursor<'a>
        = ValuesCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Result<Self::Cursor<'_>, SequenceError> {
        Ok(ValuesCursor {
            remaining: &self.elements,
        })
    }
}

impl<T> IntoIterator for Values<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T> From<Vec<T>> for Values<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for Values<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::new(iterator.into_iter().collect())
    }
}

/// The cursor of a [`Values`] sequence.
#[derive(Debug, Clone)]
pub struct ValuesCursor<'a, T> {
    remaining: &'a [T],
}

impl<T: Clone> Cursor for ValuesCursor<'_, T> {
    type Item = T;

    #[inline]
    fn has_next(&self) -> bool {
        !self.remaining.is_empty()
    }

    #[track_caller]
    fn next(&mut self) -> Self::Item {
        let Some((first, rest)) = self.remaining.split_first() else {
            exhausted();
        };
        self.remaining = rest;
        first.clone()
    }
}
