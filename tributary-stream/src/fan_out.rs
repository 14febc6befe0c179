// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded-concurrency fan-out of async work items.
//!
//! A driver task pulls work items from the source stream and spawns each one
//! into a tokio [`JoinSet`], keeping at most [`Concurrency`] of them in flight.
//! Whenever one completes its result is forwarded to the consumer and the next
//! item is launched. Results therefore arrive in completion order, not source
//! order; tag items with their index before the fan-out when order matters.
//!
//! The driver stops, and every in-flight item is aborted, when:
//! - the consumer drops the returned [`FanOut`] stream,
//! - a fallible work item fails (items that already finished are emitted first,
//!   then the failure as the stream's last element),
//! - a work item, or the source while being pulled, panics (the panic is
//!   re-raised on the consumer).

use crate::concurrency::Concurrency;
use crate::logging::{log_debug, log_error, log_warn};
use async_trait::async_trait;
use core::any::Any;
use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::stream::{Stream, StreamExt};
use futures::FutureExt;
use std::error::Error;
use std::panic::{resume_unwind, AssertUnwindSafe};
use tokio::task::JoinSet;
use tributary_core::{CancellationToken, Result, ScopedTask, StreamItem, TributaryError};

enum Completion<T> {
    Value(T),
    Panicked(Box<dyn Any + Send>),
}

/// How the driver treats one finished work item.
enum Settled<R> {
    Emit(R),
    Stop(R),
}

/// Stream of fan-out results, in completion order.
///
/// Dropping it cancels the driver and aborts all in-flight work.
#[must_use = "streams do nothing unless polled"]
pub struct FanOut<T> {
    results: UnboundedReceiver<Completion<T>>,
    driver: ScopedTask,
}

impl<T> FanOut<T> {
    fn launch<S, Fut, F>(work: S, concurrency: Concurrency, settle: F) -> Self
    where
        S: Stream<Item = Fut> + Send + 'static,
        Fut: Future + Send + 'static,
        Fut::Output: Send + 'static,
        F: Fn(Fut::Output) -> Settled<T> + Send + 'static,
        T: Send + 'static,
    {
        let (sender, results) = unbounded();
        let driver =
            ScopedTask::spawn(move |cancel| drive(work, concurrency, settle, sender, cancel));
        Self { results, driver }
    }

    /// Stop launching work and abort everything in flight.
    ///
    /// Results already delivered stay buffered and can still be read.
    pub fn cancel(&self) {
        self.driver.cancel();
    }
}

impl<T> Stream for FanOut<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        match ready!(self.results.poll_next_unpin(cx)) {
            Some(Completion::Value(value)) => Poll::Ready(Some(value)),
            Some(Completion::Panicked(payload)) => resume_unwind(payload),
            None => Poll::Ready(None),
        }
    }
}

impl<T> core::fmt::Debug for FanOut<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FanOut")
            .field("cancelled", &self.driver.is_cancelled())
            .finish_non_exhaustive()
    }
}

async fn drive<S, Fut, T, F>(
    work: S,
    concurrency: Concurrency,
    settle: F,
    results: UnboundedSender<Completion<T>>,
    cancel: CancellationToken,
) where
    S: Stream<Item = Fut> + Send + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
    F: Fn(Fut::Output) -> Settled<T>,
{
    let mut work = Box::pin(work.fuse());
    let mut in_flight = JoinSet::new();
    let mut source_done = false;

    loop {
        if source_done && in_flight.is_empty() {
            break;
        }

        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                log_debug!("fan-out cancelled by consumer, aborting {} work items", in_flight.len());
                break;
            }

            Some(joined) = in_flight.join_next() => match joined {
                Ok(output) => match settle(output) {
                    Settled::Emit(value) => {
                        if results.unbounded_send(Completion::Value(value)).is_err() {
                            log_debug!("fan-out consumer dropped the stream");
                            break;
                        }
                    }
                    Settled::Stop(failure) => {
                        drain_finished(&mut in_flight, &settle, &results);
                        log_debug!("work item failed, aborting {} work items", in_flight.len());
                        let _ = results.unbounded_send(Completion::Value(failure));
                        break;
                    }
                },
                Err(join_error) => {
                    if join_error.is_panic() {
                        log_error!("fan-out work item panicked");
                        let _ = results.unbounded_send(Completion::Panicked(join_error.into_panic()));
                    } else {
                        log_warn!("fan-out work item was aborted externally: {join_error}");
                    }
                    break;
                }
            },

            next = AssertUnwindSafe(work.next()).catch_unwind(),
                if !source_done && concurrency.admits(in_flight.len()) => match next {
                Ok(Some(item)) => {
                    in_flight.spawn(item);
                }
                Ok(None) => source_done = true,
                Err(payload) => {
                    log_error!("fan-out work source panicked");
                    let _ = results.unbounded_send(Completion::Panicked(payload));
                    break;
                }
            },
        }
    }

    if !in_flight.is_empty() {
        in_flight.abort_all();
    }
}

/// Emit every item that has already finished without waiting for the rest.
///
/// Later failures are dropped: only the first one ends the stream.
fn drain_finished<O, T, F>(
    in_flight: &mut JoinSet<O>,
    settle: &F,
    results: &UnboundedSender<Completion<T>>,
) where
    O: Send + 'static,
    F: Fn(O) -> Settled<T>,
{
    while let Some(joined) = in_flight.try_join_next() {
        match joined {
            Ok(output) => match settle(output) {
                Settled::Emit(value) => {
                    let _ = results.unbounded_send(Completion::Value(value));
                }
                Settled::Stop(_) => log_debug!("discarding a later work item failure"),
            },
            Err(join_error) if join_error.is_panic() => {
                log_error!("fan-out work item panicked after the stream had already failed");
            }
            Err(_) => {}
        }
    }
}

/// Fan-out combinators for any stream of work-item futures.
///
/// A work item is a future that has not been polled yet, so items that are
/// never launched never run. Wrap a plain iterator of futures with
/// [`futures::stream::iter`].
///
/// All methods spawn onto the current tokio runtime.
///
/// ```
/// use futures::{stream, StreamExt};
/// use tributary_stream::{Concurrency, FanOutExt};
///
/// # #[tokio::main]
/// # async fn main() -> tributary_core::Result<()> {
/// let work = stream::iter((1..=4).map(|n| async move { n * n }));
///
/// let mut squares: Vec<_> = work.fan_out(Concurrency::bounded(2)?).collect().await;
/// squares.sort_unstable();
///
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait FanOutExt<Fut>: Stream<Item = Fut> + Sized + Send + 'static
where
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    /// Run the work items concurrently, emitting each output as it completes.
    fn fan_out(self, concurrency: Concurrency) -> FanOut<Fut::Output>;

    /// Run fallible work items concurrently.
    ///
    /// Successful outputs are emitted as [`StreamItem::Value`] in completion
    /// order. The first failure is emitted as [`StreamItem::Error`] wrapping a
    /// [`TributaryError::UserError`], then the stream ends: nothing else is
    /// launched and in-flight items are aborted.
    fn try_fan_out<T, E>(self, concurrency: Concurrency) -> FanOut<StreamItem<T>>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        T: Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Run every work item and collect the outputs in completion order.
    async fn await_all(self, concurrency: Concurrency) -> Vec<Fut::Output>;

    /// Run every fallible work item, collecting successes in completion order.
    ///
    /// # Errors
    ///
    /// Returns the first failure; outputs completed before it are discarded.
    async fn try_await_all<T, E>(self, concurrency: Concurrency) -> Result<Vec<T>>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        T: Send + 'static,
        E: Error + Send + Sync + 'static;

    /// Race every work item and return the first output, aborting the rest.
    ///
    /// Returns `None` for an empty source.
    async fn await_any(self) -> Option<Fut::Output>;

    /// Race every fallible work item; the first completion wins, whether it
    /// succeeded or failed. The rest are aborted.
    ///
    /// # Errors
    ///
    /// Returns the winner's failure, or [`TributaryError::MissingValue`] for an
    /// empty source.
    async fn try_await_any<T, E>(self) -> Result<T>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        T: Send + 'static,
        E: Error + Send + Sync + 'static;
}

#[async_trait]
impl<S, Fut> FanOutExt<Fut> for S
where
    S: Stream<Item = Fut> + Sized + Send + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    fn fan_out(self, concurrency: Concurrency) -> FanOut<Fut::Output> {
        FanOut::launch(self, concurrency, Settled::Emit)
    }

    fn try_fan_out<T, E>(self, concurrency: Concurrency) -> FanOut<StreamItem<T>>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        T: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        FanOut::launch(self, concurrency, |output: std::result::Result<T, E>| match output {
            Ok(value) => Settled::Emit(StreamItem::Value(value)),
            Err(e) => Settled::Stop(StreamItem::Error(TributaryError::user_error(e))),
        })
    }

    async fn await_all(self, concurrency: Concurrency) -> Vec<Fut::Output> {
        self.fan_out(concurrency).collect().await
    }

    async fn try_await_all<T, E>(self, concurrency: Concurrency) -> Result<Vec<T>>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        T: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let mut results = self.try_fan_out(concurrency);
        let mut values = Vec::new();
        while let Some(item) = results.next().await {
            values.push(item.into_result()?);
        }
        Ok(values)
    }

    async fn await_any(self) -> Option<Fut::Output> {
        self.fan_out(Concurrency::Unbounded).next().await
    }

    async fn try_await_any<T, E>(self) -> Result<T>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        T: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        match self.try_fan_out(Concurrency::Unbounded).next().await {
            Some(item) => item.into_result(),
            None => Err(TributaryError::missing_value("no work items to race")),
        }
    }
}
