// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use core::iter::Map;

use crate::{
    Accumulate, CartesianProduct, Compact, Deduplicate, InsertAt, LazySorted, RemovingAll,
    RemovingAt, TerminateWhen, TryFilter,
};

/// Lazy adapters available on every [`Iterator`].
///
/// Building an adapter never pulls from the source. Elements are pulled one at
/// a time as the adapter itself is pulled, except where an adapter documents
/// that it buffers (`sorted_lazily*` and the trailing operand of
/// `cartesian_product`).
pub trait SequenceExt: Iterator + Sized {
    /// Running fold: emits `f(seed, a)`, `f(f(seed, a), b)`, ...
    ///
    /// ```
    /// use tributary_iter::SequenceExt;
    ///
    /// let sums: Vec<_> = [1, 2, 3].into_iter().accumulate(0, |acc, n| acc + n).collect();
    /// assert_eq!(sums, vec![1, 3, 6]);
    /// ```
    fn accumulate<S, F>(self, seed: S, combine: F) -> Accumulate<Self, S, F>
    where
        S: Clone,
        F: FnMut(&S, Self::Item) -> S,
    {
        Accumulate::new(self, seed, combine)
    }

    /// Ascending order, sorted on demand.
    fn sorted_lazily(self) -> LazySorted<Self, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self::Item: Ord,
    {
        LazySorted::new(self, <Self::Item as Ord>::cmp as fn(&_, &_) -> _)
    }

    /// Order by `compare`, sorted on demand.
    ///
    /// Only as much of the order as is consumed gets computed: taking the
    /// smallest `m` of `n` elements costs `O(n * m)` comparisons.
    ///
    /// ```
    /// use tributary_iter::SequenceExt;
    ///
    /// let top: Vec<_> = [4, 8, 1, 9].into_iter().sorted_lazily_by(|a, b| b.cmp(a)).take(2).collect();
    /// assert_eq!(top, vec![9, 8]);
    /// ```
    fn sorted_lazily_by<F>(self, compare: F) -> LazySorted<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        LazySorted::new(self, compare)
    }

    /// Ascending order of the key `key` extracts, sorted on demand.
    fn sorted_lazily_by_key<K, F>(
        self,
        mut key: F,
    ) -> LazySorted<Self, impl FnMut(&Self::Item, &Self::Item) -> Ordering>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        LazySorted::new(self, move |a: &Self::Item, b: &Self::Item| key(a).cmp(&key(b)))
    }

    /// Splice `other` in after the first `index` elements.
    ///
    /// ```
    /// use tributary_iter::SequenceExt;
    ///
    /// let spliced: String = "ABCD".chars().insert_at(1, "XY".chars()).collect();
    /// assert_eq!(spliced, "AXYBCD");
    ///
    /// let appended: String = "AB".chars().insert_at(10, "X".chars()).collect();
    /// assert_eq!(appended, "ABX");
    /// ```
    fn insert_at<J>(self, index: usize, other: J) -> InsertAt<Self, J::IntoIter>
    where
        J: IntoIterator<Item = Self::Item>,
    {
        InsertAt::new(self, other.into_iter(), index)
    }

    /// Skip the elements at the given zero-based positions.
    ///
    /// `indices` is collected before the first element is produced. Positions
    /// past the end and duplicates are ignored.
    fn removing_at<N>(self, indices: N) -> RemovingAt<Self>
    where
        N: IntoIterator<Item = usize>,
    {
        RemovingAt::new(self, indices)
    }

    /// Keep the first occurrence of each distinct element.
    ///
    /// ```
    /// use tributary_iter::SequenceExt;
    ///
    /// let unique: Vec<_> = [1, 2, 1, 3, 2].into_iter().deduplicate().collect();
    /// assert_eq!(unique, vec![1, 2, 3]);
    /// ```
    fn deduplicate(self) -> Deduplicate<Self, fn(&Self::Item, &Self::Item) -> bool>
    where
        Self::Item: PartialEq + Clone,
    {
        Deduplicate::new(self, <Self::Item as PartialEq>::eq as fn(&_, &_) -> _)
    }

    /// Keep the first element of each class `same` considers equal.
    fn deduplicate_by<F>(self, same: F) -> Deduplicate<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Deduplicate::new(self, same)
    }

    /// Stop at the first element matching `predicate`, without yielding it.
    ///
    /// ```
    /// use tributary_iter::SequenceExt;
    ///
    /// let head: Vec<_> = (1..=5).terminate_when(|n| *n == 3).collect();
    /// assert_eq!(head, vec![1, 2]);
    /// ```
    fn terminate_when<P>(self, predicate: P) -> TerminateWhen<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TerminateWhen::new(self, predicate)
    }

    /// Unwrap the `Some`s, dropping the `None`s.
    fn compact<T>(self) -> Compact<Self>
    where
        Self: Iterator<Item = Option<T>>,
    {
        Compact::new(self)
    }

    /// Drop every element matching `predicate`.
    fn removing_all<P>(self, predicate: P) -> RemovingAll<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        RemovingAll::new(self, predicate)
    }

    /// Pair every element with every element of `other`.
    ///
    /// `other` is drained into a buffer on the first pull; `self` is streamed.
    ///
    /// ```
    /// use tributary_iter::SequenceExt;
    ///
    /// let pairs: Vec<_> = [1, 2].into_iter().cartesian_product(['a', 'b']).collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    fn cartesian_product<J>(self, other: J) -> CartesianProduct<Self, J::IntoIter>
    where
        Self::Item: Clone,
        J: IntoIterator,
        J::Item: Clone,
    {
        CartesianProduct::new(self, other.into_iter())
    }

    /// Apply a fallible transform, carrying each failure as an element.
    fn try_map<U, E, F>(self, transform: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> Result<U, E>,
    {
        self.map(transform)
    }

    /// Filter with a fallible predicate.
    ///
    /// A predicate failure replaces the element it was evaluated on and the
    /// traversal carries on.
    fn try_filter<E, P>(self, predicate: P) -> TryFilter<Self, P>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        TryFilter::new(self, predicate)
    }
}

impl<I: Iterator> SequenceExt for I {}
