// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filtering adapters that complement `Iterator::filter`.

use core::iter::FusedIterator;

/// Iterator returned by [`SequenceExt::compact`](crate::SequenceExt::compact).
///
/// Unwraps `Some` elements and skips `None`s.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Compact<I> {
    source: I,
}

impl<I> Compact<I> {
    pub(crate) fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I, T> Iterator for Compact<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.source.find_map(core::convert::identity)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, T> FusedIterator for Compact<I> where I: FusedIterator<Item = Option<T>> {}

/// Iterator returned by [`SequenceExt::removing_all`](crate::SequenceExt::removing_all).
///
/// Skips every element matching the predicate.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RemovingAll<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> RemovingAll<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<I, P> Iterator for RemovingAll<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.source.find(|item| !predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for RemovingAll<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}
