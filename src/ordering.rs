//! First-class comparators.
//!
//! A [`Comparator`] is a total ordering over `T` that can be stored, cloned
//! and composed:
//!
//! - [`Comparator::then`] / [`Comparator::chain`]: lexicographic tie-breaking
//! - [`Comparator::reversed`]: swaps `Less` and `Greater`
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.then(b).then(c) == a.then(b.then(c))
//! ```
//!
//! ## Idempotence
//!
//! ```text
//! a.then(a) == a
//! ```
//!
//! ## Double reversal
//!
//! ```text
//! a.reversed().reversed() == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Entry {
//!     name: &'static str,
//!     rank: i32,
//! }
//!
//! let entries = from_values(vec![
//!     Entry { name: "a", rank: 0 },
//!     Entry { name: "a", rank: 1 },
//!     Entry { name: "b", rank: 0 },
//! ]);
//! let by_name_then_rank_descending = Comparator::chain(
//!     Comparator::ascending_by(|entry: &Entry| entry.name),
//!     [Comparator::descending_by(|entry: &Entry| entry.rank)],
//! );
//! let sorted = entries.sorted_with(&by_name_then_rank_descending).unwrap();
//! let ranks: Vec<i32> = sorted.iter().unwrap().map(|entry| entry.rank).collect();
//! assert_eq!(ranks, vec![1, 0, 0]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// The number of chained comparisons stored without a heap allocation.
const INLINE_LINKS: usize = 4;

type Link<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// A composable total ordering over `T`.
///
/// Cloning is cheap: the comparison functions are reference counted.
pub struct Comparator<T> {
    links: SmallVec<[Link<T>; INLINE_LINKS]>,
}

impl<T> Comparator<T> {
    /// Wraps a three-way comparison function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::ordering::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let by_length = Comparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
    /// assert_eq!(by_length.compare(&"ab", &"c"), Ordering::Greater);
    /// ```
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        let mut links = SmallVec::new();
        links.push(Rc::new(compare) as Link<T>);
        Self { links }
    }

    /// Orders by the key `extract` returns, smallest first.
    pub fn ascending_by<K, F>(extract: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |left, right| extract(left).cmp(&extract(right)))
    }

    /// Orders by the key `extract` returns, largest first.
    pub fn descending_by<K, F>(extract: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |left, right| extract(right).cmp(&extract(left)))
    }

    /// Compares two values.
    ///
    /// Each link is consulted in order until one reports a difference.
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        self.links
            .iter()
            .map(|link| link(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Breaks ties left by `self` with `tie_breaker`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::ordering::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let by_first = Comparator::ascending_by(|pair: &(i32, i32)| pair.0);
    /// let by_second = Comparator::ascending_by(|pair: &(i32, i32)| pair.1);
    /// let combined = by_first.then(by_second);
    /// assert_eq!(combined.compare(&(1, 2), &(1, 3)), Ordering::Less);
    /// assert_eq!(combined.compare(&(2, 0), &(1, 3)), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn then(mut self, tie_breaker: Self) -> Self {
        self.links.extend(tie_breaker.links);
        self
    }

    /// Combines comparators lexicographically: `first` decides, and each of
    /// `rest` only breaks the ties left by those before it.
    pub fn chain<I>(first: Self, rest: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        rest.into_iter().fold(first, Self::then)
    }

    /// Returns the comparator with `Less` and `Greater` swapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::ordering::Comparator;
    /// use std::cmp::Ordering;
    ///
    /// let descending = Comparator::<i32>::natural().reversed();
    /// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
    /// assert_eq!(descending.compare(&2, &2), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn reversed(self) -> Self
    where
        T: 'static,
    {
        Self::new(move |left, right| self.compare(right, left))
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// Orders values by their [`Ord`] implementation.
    pub fn natural() -> Self {
        Self::new(T::cmp)
    }

    /// Orders values by the reverse of their [`Ord`] implementation.
    pub fn reverse_order() -> Self {
        Self::new(|left: &T, right: &T| right.cmp(left))
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            links: self.links.clone(),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Comparator")
            .field("links", &self.links.len())
            .finish()
    }
}
