// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stop at the first element matching a predicate, without yielding it.

use core::iter::FusedIterator;

/// Iterator returned by [`SequenceExt::terminate_when`](crate::SequenceExt::terminate_when).
///
/// Unlike `take_while`, the predicate names the stop condition. The matching
/// element is pulled from the source and discarded; afterwards the adapter
/// stays finished and never pulls again.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TerminateWhen<I, P> {
    source: I,
    predicate: P,
    terminated: bool,
}

impl<I, P> TerminateWhen<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self {
            source,
            predicate,
            terminated: false,
        }
    }
}

impl<I, P> Iterator for TerminateWhen<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.terminated {
            return None;
        }

        match self.source.next() {
            Some(item) if !(self.predicate)(&item) => Some(item),
            _ => {
                self.terminated = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TerminateWhen<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}
