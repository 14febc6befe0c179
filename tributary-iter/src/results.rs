// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Adapters for sequences whose elements carry their own failure.
//!
//! A failing element travels as an `Err` value: it never aborts the traversal,
//! and each adapter documents whether it keeps, transforms or drops it.
//!
//! ```
//! use tributary_iter::{ResultSequenceExt, SequenceExt};
//!
//! let parsed: Vec<_> = ["1", "x", "3"]
//!     .into_iter()
//!     .try_map(str::parse::<i32>)
//!     .map_success(|n| n * 10)
//!     .values()
//!     .collect();
//!
//! assert_eq!(parsed, vec![10, 30]);
//! ```

use core::iter::{FilterMap, FusedIterator};

/// Iterator returned by [`SequenceExt::try_filter`](crate::SequenceExt::try_filter).
///
/// Keeps elements whose predicate returns `Ok(true)`, drops `Ok(false)`, and
/// emits the predicate's failure in place of the element that caused it.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TryFilter<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> TryFilter<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<I, P, E> Iterator for TryFilter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            match (self.predicate)(&item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P, E> FusedIterator for TryFilter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
}

/// Iterator returned by [`ResultSequenceExt::filter_success`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterSuccess<I, P> {
    source: I,
    predicate: P,
}

impl<I, P, T, E> Iterator for FilterSuccess<I, P>
where
    I: Iterator<Item = Result<T, E>>,
    P: FnMut(&T) -> bool,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Result<T, E>> {
        let predicate = &mut self.predicate;
        self.source.find(|item| match item {
            Ok(value) => predicate(value),
            Err(_) => true,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P, T, E> FusedIterator for FilterSuccess<I, P>
where
    I: FusedIterator<Item = Result<T, E>>,
    P: FnMut(&T) -> bool,
{
}

/// Iterator returned by [`ResultSequenceExt::map_success`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct MapSuccess<I, F> {
    source: I,
    transform: F,
}

impl<I, F, T, U, E> Iterator for MapSuccess<I, F>
where
    I: Iterator<Item = Result<T, E>>,
    F: FnMut(T) -> U,
{
    type Item = Result<U, E>;

    fn next(&mut self) -> Option<Result<U, E>> {
        self.source.next().map(|item| item.map(&mut self.transform))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F, T, U, E> FusedIterator for MapSuccess<I, F>
where
    I: FusedIterator<Item = Result<T, E>>,
    F: FnMut(T) -> U,
{
}

/// Extension methods for iterators of `Result`s.
pub trait ResultSequenceExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Drop successes that fail `predicate`; failures always pass through.
    fn filter_success<P>(self, predicate: P) -> FilterSuccess<Self, P>
    where
        P: FnMut(&T) -> bool,
    {
        FilterSuccess {
            source: self,
            predicate,
        }
    }

    /// Transform successes; failures pass through untouched.
    fn map_success<U, F>(self, transform: F) -> MapSuccess<Self, F>
    where
        F: FnMut(T) -> U,
    {
        MapSuccess {
            source: self,
            transform,
        }
    }

    /// Keep only the successes, discarding every failure.
    #[allow(clippy::type_complexity)]
    fn values(self) -> FilterMap<Self, fn(Result<T, E>) -> Option<T>> {
        self.filter_map(Result::ok as fn(_) -> _)
    }

    /// Keep only the failures, discarding every success.
    #[allow(clippy::type_complexity)]
    fn errors(self) -> FilterMap<Self, fn(Result<T, E>) -> Option<E>> {
        self.filter_map(Result::err as fn(_) -> _)
    }
}

impl<I, T, E> ResultSequenceExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}
