// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async sequences for tributary.
//!
//! - [`AsyncBridgeExt::into_async_sequence`] awaits a sequence of async
//!   closures one at a time, in source order; [`StreamBridgeExt::run_sequentially`]
//!   does the same when the closures themselves arrive on a `Stream`.
//! - [`FanOutExt`] runs work items concurrently under a [`Concurrency`] limit
//!   and emits results in completion order, with `await_all` / `await_any`
//!   built on top.
//! - [`with_timeout`] races a work item against a timer.
//! - [`AsyncSequenceExt`] carries the lazy adapters over to `Stream`s.
//!
//! Dropping a fan-out stream cancels its driver task and aborts every work
//! item still running; nothing keeps running once the consumer loses interest.
//!
//! # Logging
//!
//! With the `tracing` feature, cancellations, failures and panics of fan-out
//! work are reported through `tracing`. Without it, errors go to stderr and
//! debug events are compiled out.

pub mod async_sequence_ext;
pub mod bridge;
pub mod concurrency;
#[cfg(feature = "runtime-tokio")]
pub mod fan_out;
#[cfg(feature = "runtime-tokio")]
mod logging;
#[cfg(feature = "runtime-tokio")]
pub mod timeout;

pub use async_sequence_ext::{AsyncSequenceExt, InsertAt};
pub use bridge::{AsyncBridgeExt, AsyncSequence, StreamBridgeExt};
pub use concurrency::Concurrency;
#[cfg(feature = "runtime-tokio")]
pub use fan_out::{FanOut, FanOutExt};
#[cfg(feature = "runtime-tokio")]
pub use timeout::with_timeout;
