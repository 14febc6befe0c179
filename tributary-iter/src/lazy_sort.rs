// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! On-demand selection sort.
//!
//! The source is drained into a buffer on the first call to `next`, never
//! before. Each call then scans the unsorted remainder for its minimum, swaps
//! it to the front and yields it. Producing the first `m` of `n` elements costs
//! `(n - 1) + (n - 2) + ... + (n - m)` comparisons, which beats a full
//! `O(n log n)` sort when only a short prefix is consumed.
//!
//! The comparator should be a strict weak ordering. A comparator that is not
//! yields an unspecified order, never a panic. Among elements that compare
//! `Equal` the one found first in the current buffer wins, but swapping
//! reshuffles the remainder, so the output is not stable in general.

use alloc::collections::VecDeque;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

/// Iterator returned by [`SequenceExt::sorted_lazily_by`](crate::SequenceExt::sorted_lazily_by).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LazySorted<I: Iterator, F> {
    source: Option<I>,
    remaining: VecDeque<I::Item>,
    compare: F,
}

impl<I: Iterator, F> LazySorted<I, F> {
    pub(crate) fn new(source: I, compare: F) -> Self {
        Self {
            source: Some(source),
            remaining: VecDeque::new(),
            compare,
        }
    }
}

impl<I, F> Iterator for LazySorted<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.take() {
            self.remaining.extend(source);
        }
        if self.remaining.is_empty() {
            return None;
        }

        let mut min = 0;
        for candidate in 1..self.remaining.len() {
            if (self.compare)(&self.remaining[candidate], &self.remaining[min]) == Ordering::Less {
                min = candidate;
            }
        }

        self.remaining.swap(0, min);
        self.remaining.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => (self.remaining.len(), Some(self.remaining.len())),
        }
    }
}

impl<I, F> FusedIterator for LazySorted<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
}

impl<I, F> fmt::Debug for LazySorted<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySorted")
            .field("source", &self.source)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn buffer_is_filled_on_first_pull_only() {
        let mut sorted = LazySorted::new(vec![3, 1, 2].into_iter(), Ord::cmp);
        assert!(sorted.source.is_some());
        assert!(sorted.remaining.is_empty());

        assert_eq!(sorted.next(), Some(1));
        assert!(sorted.source.is_none());
        assert_eq!(sorted.remaining.len(), 2);
    }

    #[test]
    fn minimum_is_swapped_to_front() {
        let mut sorted = LazySorted::new(vec![4, 9, 0, 7].into_iter(), Ord::cmp);

        assert_eq!(sorted.next(), Some(0));
        // 4 took the minimum's slot
        assert_eq!(sorted.remaining.iter().copied().collect::<Vec<_>>(), vec![9, 4, 7]);
    }
}
