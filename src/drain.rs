//! Materialization drains.
//!
//! [`Drain`] collects a finished [`Sequence`] into a concrete container,
//! inserting elements in traversal order. Every sequence implements it.
//!
//! Draining an unbounded sequence never returns.
//!
//! # Hashing
//!
//! [`to_hash_set`](Drain::to_hash_set) and [`to_hash_map`](Drain::to_hash_map)
//! build containers with [`FastBuildHasher`], selected by feature flag:
//!
//! - `fxhash`: [`rustc_hash::FxBuildHasher`]
//! - `ahash`: [`ahash::RandomState`]
//! - neither: [`std::collections::hash_map::RandomState`]
//!
//! Use [`collect_into`](Drain::collect_into) for any other hasher.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//! use std::collections::BTreeSet;
//!
//! let unique: BTreeSet<i32> = values![1, 2, 2, 3].collect_into().unwrap();
//! assert_eq!(unique.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList};
use std::hash::Hash;

use arrayvec::ArrayVec;

use crate::cursor::Cursor;
use crate::error::SequenceError;
use crate::sequence::Sequence;

/// The hasher used by [`Drain::to_hash_set`] and [`Drain::to_hash_map`].
#[cfg(feature = "fxhash")]
pub type FastBuildHasher = rustc_hash::FxBuildHasher;

/// The hasher used by [`Drain::to_hash_set`] and [`Drain::to_hash_map`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastBuildHasher = ahash::RandomState;

/// The hasher used by [`Drain::to_hash_set`] and [`Drain::to_hash_map`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type FastBuildHasher = std::collections::hash_map::RandomState;

/// Drains sequences into containers.
///
/// All methods start a new traversal and therefore fail with
/// [`SequenceError::AlreadyConsumed`] on a consumed single-pass sequence.
pub trait Drain: Sequence {
    /// Drains into any container that can be default-constructed and
    /// extended.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    fn collect_into<C>(&self) -> Result<C, SequenceError>
    where
        C: Default + Extend<Self::Item>,
    {
        let mut container = C::default();
        container.extend(self.iter()?);
        Ok(container)
    }

    /// Drains into a [`Vec`].
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    fn to_vec(&self) -> Result<Vec<Self::Item>, SequenceError> {
        Ok(self.iter()?.collect())
    }

    /// Drains into a [`LinkedList`].
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    fn to_linked_list(&self) -> Result<LinkedList<Self::Item>, SequenceError> {
        self.collect_into()
    }

    /// Drains into a [`HashSet`], dropping duplicates.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    fn to_hash_set(&self) -> Result<HashSet<Self::Item, FastBuildHasher>, SequenceError>
    where
        Self::Item: Eq + Hash,
    {
        self.collect_into()
    }

    /// Drains into a [`BTreeSet`], dropping duplicates.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    fn to_btree_set(&self) -> Result<BTreeSet<Self::Item>, SequenceError>
    where
        Self::Item: Ord,
    {
        self.collect_into()
    }

    /// Drains into a [`HashMap`] keyed by `key`. A later element replaces an
    /// earlier one with the same key.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let names = values![(0, "zero"), (1, "one")].to_hash_map(|pair| pair.0, |pair| pair.1).unwrap();
    /// assert_eq!(names.get(&1), Some(&"one"));
    /// ```
    fn to_hash_map<K, V, KF, VF>(
        &self,
        key: KF,
        value: VF,
    ) -> Result<HashMap<K, V, FastBuildHasher>, SequenceError>
    where
        K: Eq + Hash,
        KF: Fn(&Self::Item) -> K,
        VF: Fn(Self::Item) -> V,
    {
        Ok(self
            .iter()?
            .map(|element| (key(&element), value(element)))
            .collect())
    }

    /// Drains into a [`BTreeMap`] keyed by `key`. A later element replaces
    /// an earlier one with the same key.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    fn to_btree_map<K, V, KF, VF>(
        &self,
        key: KF,
        value: VF,
    ) -> Result<BTreeMap<K, V>, SequenceError>
    where
        K: Ord,
        KF: Fn(&Self::Item) -> K,
        VF: Fn(Self::Item) -> V,
    {
        Ok(self
            .iter()?
            .map(|element| (key(&element), value(element)))
            .collect())
    }

    /// Drains into a boxed slice sized exactly to the sequence.
    ///
    /// Use [`to_array`](Drain::to_array) when a capacity bound is known at
    /// compile time and the elements should stay off the heap.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::cursor`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let squares = range(1, 4).map(|n| n * n).to_boxed_slice().unwrap();
    /// assert_eq!(&*squares, &[1, 4, 9]);
    /// ```
    fn to_boxed_slice(&self) -> Result<Box<[Self::Item]>, SequenceError> {
        Ok(self.iter()?.collect())
    }

    /// Drains into a fixed-capacity array of at most `N` elements.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::CapacityExceeded`] if the sequence has more than
    ///   `N` elements
    /// - anything [`Sequence::cursor`] returns
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let array = range(0, 3).to_array::<4>().unwrap();
    /// assert_eq!(array.as_slice(), &[0, 1, 2]);
    /// assert!(range(0, 5).to_array::<4>().is_err());
    /// ```
    fn to_array<const N: usize>(&self) -> Result<ArrayVec<Self::Item, N>, SequenceError> {
        let mut cursor = self.cursor()?;
        let mut array = ArrayVec::new();
        while cursor.has_next() {
            if array.is_full() {
                return Err(SequenceError::CapacityExceeded {
                    operation: "to_array",
                    capacity: N,
                });
            }
            array.push(cursor.next());
        }
        Ok(array)
    }
}

impl<S: Sequence + ?Sized> Drain for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{from_values, range};
    use crate::source::from_iter;
    use rstest::rstest;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Named {
        id: i32,
        name: &'static str,
    }

    fn named() -> crate::source::Values<Named> {
        from_values(vec![
            Named { id: 0, name: "zero" },
            Named { id: 1, name: "one" },
        ])
    }

    #[rstest]
    fn test_collect_into_caller_chosen_container() {
        let deque: VecDeque<i32> = range(2, 5).collect_into().unwrap();
        assert_eq!(deque, VecDeque::from(vec![2, 3, 4]));
    }

    #[rstest]
    fn test_to_linked_list_preserves_order() {
        let list = range(2, 5).to_linked_list().unwrap();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_to_hash_set_drops_duplicates() {
        let set = from_values(vec![1, 2, 2, 3]).to_hash_set().unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1) && set.contains(&2) && set.contains(&3));
    }

    #[rstest]
    fn test_to_btree_set_is_ordered() {
        let set = from_values(vec![3, 1, 2, 1]).to_btree_set().unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_to_hash_map() {
        let map = named()
            .to_hash_map(|entry| entry.id, |entry| entry.name)
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&0), Some(&"zero"));
        assert_eq!(map.get(&1), Some(&"one"));
    }

    #[rstest]
    fn test_to_btree_map_later_key_wins() {
        let map = from_values(vec![(1, 'a'), (0, 'b'), (1, 'c')])
            .to_btree_map(|pair| pair.0, |pair| pair.1)
            .unwrap();
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![(0, 'b'), (1, 'c')]);
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(3)]
    fn test_to_array_within_capacity(#[case] length: i32) {
        let array = range(0, length).to_array::<3>().unwrap();
        assert_eq!(array.len(), usize::try_from(length).unwrap());
    }

    #[rstest]
    fn test_to_array_over_capacity() {
        assert_eq!(
            range(0, 4).to_array::<3>(),
            Err(SequenceError::CapacityExceeded {
                operation: "to_array",
                capacity: 3
            })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(40)]
    fn test_to_boxed_slice_is_sized_to_the_sequence(#[case] length: i32) {
        let slice = range(0, length).to_boxed_slice().unwrap();
        assert_eq!(slice.len(), usize::try_from(length).unwrap());
        assert_eq!(slice.into_vec(), range(0, length).to_vec().unwrap());
    }

    #[rstest]
    fn test_drain_of_consumed_single_pass_fails() {
        let sequence = from_iter(vec![1, 2].into_iter());
        assert_eq!(sequence.to_vec().unwrap(), vec![1, 2]);
        assert!(sequence.to_linked_list().unwrap_err().is_already_consumed());
        assert!(sequence.to_btree_set().unwrap_err().is_already_consumed());
        assert!(sequence.to_boxed_slice().unwrap_err().is_already_consumed());
    }
}
