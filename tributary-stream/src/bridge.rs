// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequential bridge from a sequence of async closures to a `Stream`.
//!
//! The closures may come from a plain iterator ([`AsyncBridgeExt`]) or from a
//! stream that produces them asynchronously ([`StreamBridgeExt`]).

use core::future::Future;
use core::iter::Fuse;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::stream::{Stream, StreamExt};
use pin_project::pin_project;

/// Stream returned by [`AsyncBridgeExt::into_async_sequence`].
///
/// At most one work item runs at a time. The next closure is only invoked after
/// the previous future has completed, so results come out in source order.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct AsyncSequence<I, Fut> {
    work: Fuse<I>,
    #[pin]
    pending: Option<Fut>,
}

impl<I, Fut, F> Stream for AsyncSequence<I, Fut>
where
    I: Iterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(running) = this.pending.as_mut().as_pin_mut() {
                let output = ready!(running.poll(cx));
                this.pending.set(None);
                return Poll::Ready(Some(output));
            }

            match this.work.next() {
                Some(start) => this.pending.set(Some(start())),
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let running = usize::from(self.pending.is_some());
        let (low, high) = self.work.size_hint();
        (
            low.saturating_add(running),
            high.and_then(|h| h.checked_add(running)),
        )
    }
}

/// Turns any sequence of zero-argument async closures into a [`Stream`].
pub trait AsyncBridgeExt: IntoIterator + Sized {
    /// Await the work items one at a time, in source order.
    ///
    /// Nothing is invoked until the stream is polled.
    ///
    /// ```
    /// use futures::StreamExt;
    /// use tributary_stream::AsyncBridgeExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let work = (1..=3).map(|n| move || async move { n * 10 });
    /// let results: Vec<_> = work.into_async_sequence().collect().await;
    /// assert_eq!(results, vec![10, 20, 30]);
    /// # }
    /// ```
    fn into_async_sequence<Fut>(self) -> AsyncSequence<Self::IntoIter, Fut>
    where
        Self::Item: FnOnce() -> Fut,
        Fut: Future;
}

impl<T: IntoIterator> AsyncBridgeExt for T {
    fn into_async_sequence<Fut>(self) -> AsyncSequence<Self::IntoIter, Fut>
    where
        Self::Item: FnOnce() -> Fut,
        Fut: Future,
    {
        AsyncSequence {
            work: self.into_iter().fuse(),
            pending: None,
        }
    }
}

/// Turns a [`Stream`] of zero-argument async closures into a stream of their outputs.
pub trait StreamBridgeExt: Stream + Sized {
    /// Await the work items one at a time, in source order.
    ///
    /// The source is polled for the next closure only after the previous
    /// future has completed.
    ///
    /// ```
    /// use futures::{stream, StreamExt};
    /// use tributary_stream::StreamBridgeExt;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let work = stream::iter(1..=3).map(|n| move || async move { n + 1 });
    /// let results: Vec<_> = work.run_sequentially().collect().await;
    /// assert_eq!(results, vec![2, 3, 4]);
    /// # }
    /// ```
    fn run_sequentially<Fut>(self) -> impl Stream<Item = Fut::Output>
    where
        Self::Item: FnOnce() -> Fut,
        Fut: Future,
    {
        self.then(|start| start())
    }
}

impl<S: Stream> StreamBridgeExt for S {}
