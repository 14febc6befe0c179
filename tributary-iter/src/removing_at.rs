// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop elements by position.

use alloc::collections::BTreeSet;
use core::iter::{Enumerate, FusedIterator};

/// Iterator returned by [`SequenceExt::removing_at`](crate::SequenceExt::removing_at).
///
/// The index set is materialized when the adapter is built so each element can
/// be tested for membership in any order. Indices past the end are ignored.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RemovingAt<I> {
    source: Enumerate<I>,
    removed: BTreeSet<usize>,
}

impl<I: Iterator> RemovingAt<I> {
    pub(crate) fn new(source: I, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            source: source.enumerate(),
            removed: indices.into_iter().collect(),
        }
    }
}

impl<I: Iterator> Iterator for RemovingAt<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let removed = &self.removed;
        self.source
            .find(|(position, _)| !removed.contains(position))
            .map(|(_, item)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.source.size_hint();
        (low.saturating_sub(self.removed.len()), high)
    }
}

impl<I: FusedIterator> FusedIterator for RemovingAt<I> {}
