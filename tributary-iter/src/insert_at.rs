// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Splice a second sequence into the first at a position.

use core::iter::{Fuse, FusedIterator};

/// Iterator returned by [`SequenceExt::insert_at`](crate::SequenceExt::insert_at).
///
/// Yields `index` elements of the primary source unchanged, then the whole
/// inserted sequence, then the rest of the primary source. When the primary
/// source ends before `index`, the inserted elements follow right away, so an
/// out-of-range index appends.
///
/// The inserted sequence is drained before the primary source resumes: if it
/// never ends, no primary element after `index` is ever produced.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct InsertAt<I, J> {
    source: Fuse<I>,
    inserted: Fuse<J>,
    index: usize,
    passed: usize,
}

impl<I: Iterator, J: Iterator> InsertAt<I, J> {
    pub(crate) fn new(source: I, inserted: J, index: usize) -> Self {
        Self {
            source: source.fuse(),
            inserted: inserted.fuse(),
            index,
            passed: 0,
        }
    }
}

impl<I, J> Iterator for InsertAt<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.passed < self.index {
            if let Some(item) = self.source.next() {
                self.passed += 1;
                return Some(item);
            }
            // Source ended early; inserted elements are appended
            self.passed = self.index;
        }

        self.inserted.next().or_else(|| self.source.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (source_low, source_high) = self.source.size_hint();
        let (inserted_low, inserted_high) = self.inserted.size_hint();

        let low = source_low.saturating_add(inserted_low);
        let high = source_high.and_then(|s| inserted_high.and_then(|i| s.checked_add(i)));
        (low, high)
    }
}

impl<I, J> FusedIterator for InsertAt<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
}
