// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async counterparts of the lazy sequence adapters.
//!
//! Same contracts as their `tributary-iter` namesakes, with "pull" meaning
//! "poll": nothing is polled from the source until the adapter is polled.

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::future::ready as settled;
use futures::stream::{Fuse, Stream, StreamExt};
use pin_project::pin_project;
use tributary_core::{StreamItem, TributaryError};

/// Lazy adapters available on every [`Stream`].
pub trait AsyncSequenceExt: Stream + Sized {
    /// Running fold emitting every intermediate accumulator value.
    ///
    /// ```
    /// use futures::{stream, StreamExt};
    /// use tributary_stream::AsyncSequenceExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let sums: Vec<_> = stream::iter([1, 2, 3]).accumulate(0, |acc, n| acc + n).collect().await;
    /// assert_eq!(sums, vec![1, 3, 6]);
    /// # }
    /// ```
    fn accumulate<S, F>(self, seed: S, mut combine: F) -> impl Stream<Item = S>
    where
        S: Clone,
        F: FnMut(&S, Self::Item) -> S,
    {
        self.scan(seed, move |state, item| {
            *state = combine(state, item);
            settled(Some(state.clone()))
        })
    }

    /// Keep the first occurrence of each distinct element.
    fn deduplicate(self) -> impl Stream<Item = Self::Item>
    where
        Self::Item: PartialEq + Clone,
    {
        self.deduplicate_by(|a, b| a == b)
    }

    /// Keep the first element of each class `same` considers equal.
    fn deduplicate_by<F>(self, mut same: F) -> impl Stream<Item = Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut seen: Vec<Self::Item> = Vec::new();
        self.filter(move |item| {
            let fresh = !seen.iter().any(|kept| same(kept, item));
            if fresh {
                seen.push(item.clone());
            }
            settled(fresh)
        })
    }

    /// End at the first element matching `predicate`, without emitting it.
    fn terminate_when<P>(self, mut predicate: P) -> impl Stream<Item = Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.take_while(move |item| settled(!predicate(item)))
    }

    /// Unwrap the `Some`s, dropping the `None`s.
    fn compact<T>(self) -> impl Stream<Item = T>
    where
        Self: Stream<Item = Option<T>>,
    {
        self.filter_map(settled)
    }

    /// Drop every element matching `predicate`.
    fn removing_all<P>(self, mut predicate: P) -> impl Stream<Item = Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(move |item| settled(!predicate(item)))
    }

    /// Splice `other` in after the first `index` elements, appending when the
    /// source ends first.
    fn insert_at<O>(self, index: usize, other: O) -> InsertAt<Self, O>
    where
        O: Stream<Item = Self::Item>,
    {
        InsertAt {
            source: self.fuse(),
            inserted: other.fuse(),
            index,
            passed: 0,
        }
    }

    /// Keep the values of a fallible stream, dropping its error.
    fn values<T>(self) -> impl Stream<Item = T>
    where
        Self: Stream<Item = StreamItem<T>>,
    {
        self.filter_map(|item: StreamItem<T>| settled(item.ok()))
    }

    /// Keep only the errors of a fallible stream.
    fn errors<T>(self) -> impl Stream<Item = TributaryError>
    where
        Self: Stream<Item = StreamItem<T>>,
    {
        self.filter_map(|item: StreamItem<T>| settled(item.err()))
    }
}

impl<S: Stream> AsyncSequenceExt for S {}

/// Stream returned by [`AsyncSequenceExt::insert_at`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct InsertAt<S, O> {
    #[pin]
    source: Fuse<S>,
    #[pin]
    inserted: Fuse<O>,
    index: usize,
    passed: usize,
}

impl<S, O> Stream for InsertAt<S, O>
where
    S: Stream,
    O: Stream<Item = S::Item>,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let mut this = self.project();

        if *this.passed < *this.index {
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(item) => {
                    *this.passed += 1;
                    return Poll::Ready(Some(item));
                }
                None => *this.passed = *this.index,
            }
        }

        match ready!(this.inserted.poll_next(cx)) {
            Some(item) => Poll::Ready(Some(item)),
            None => this.source.poll_next(cx),
        }
    }
}
