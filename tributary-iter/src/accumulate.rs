// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Running fold that emits every intermediate accumulator value.

use core::iter::FusedIterator;

/// Iterator returned by [`SequenceExt::accumulate`](crate::SequenceExt::accumulate).
///
/// Element `i` is `f(element i - 1, source[i])`, with the seed standing in for
/// element `-1`. The seed itself is not emitted.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Accumulate<I, S, F> {
    source: I,
    state: Option<S>,
    combine: F,
}

impl<I, S, F> Accumulate<I, S, F> {
    pub(crate) fn new(source: I, seed: S, combine: F) -> Self {
        Self {
            source,
            state: Some(seed),
            combine,
        }
    }
}

impl<I, S, F> Iterator for Accumulate<I, S, F>
where
    I: Iterator,
    S: Clone,
    F: FnMut(&S, I::Item) -> S,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        let state = self.state.as_ref()?;
        let Some(item) = self.source.next() else {
            self.state = None;
            return None;
        };

        let next = (self.combine)(state, item);
        self.state = Some(next.clone());
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.is_none() {
            (0, Some(0))
        } else {
            self.source.size_hint()
        }
    }
}

impl<I, S, F> FusedIterator for Accumulate<I, S, F>
where
    I: Iterator,
    S: Clone,
    F: FnMut(&S, I::Item) -> S,
{
}
