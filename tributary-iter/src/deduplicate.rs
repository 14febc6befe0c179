// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Keep the first occurrence of every distinct element.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

/// Iterator returned by [`SequenceExt::deduplicate_by`](crate::SequenceExt::deduplicate_by).
///
/// Remembers one copy of every distinct element it has yielded and scans that
/// list linearly for each new element. Only an equality predicate is needed,
/// so element types without `Hash` or `Ord` work; the price is `O(n * d)`
/// comparisons for `n` elements with `d` distinct values.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Deduplicate<I: Iterator, F> {
    source: I,
    seen: Vec<I::Item>,
    same: F,
}

impl<I: Iterator, F> Deduplicate<I, F> {
    pub(crate) fn new(source: I, same: F) -> Self {
        Self {
            source,
            seen: Vec::new(),
            same,
        }
    }
}

impl<I, F> Iterator for Deduplicate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let Self { source, seen, same } = self;

        let item = source.find(|candidate| !seen.iter().any(|prior| same(prior, candidate)))?;
        seen.push(item.clone());
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.source.size_hint();
        if self.seen.is_empty() {
            (low.min(1), high)
        } else {
            (0, high)
        }
    }
}

impl<I, F> FusedIterator for Deduplicate<I, F>
where
    I: FusedIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}

impl<I, F> fmt::Debug for Deduplicate<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deduplicate")
            .field("source", &self.source)
            .field("seen", &self.seen)
            .finish_non_exhaustive()
    }
}
