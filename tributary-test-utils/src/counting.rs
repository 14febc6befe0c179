// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull counting for laziness assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter of the elements pulled through a [`Counted`] iterator.
#[derive(Clone, Debug, Default)]
pub struct PullCount(Arc<AtomicUsize>);

impl PullCount {
    /// Number of elements pulled so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Iterator wrapper that bumps a [`PullCount`] for every element it yields.
#[derive(Clone, Debug)]
pub struct Counted<I> {
    inner: I,
    pulls: PullCount,
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.pulls.0.fetch_add(1, Ordering::SeqCst);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Wrap `iter` so the returned [`PullCount`] observes every element pulled from it.
pub fn counted<I: IntoIterator>(iter: I) -> (Counted<I::IntoIter>, PullCount) {
    let pulls = PullCount::default();
    let counted = Counted {
        inner: iter.into_iter(),
        pulls: pulls.clone(),
    };
    (counted, pulls)
}
