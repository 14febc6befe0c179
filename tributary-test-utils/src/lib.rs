// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the tributary sequence library.
//!
//! This crate is meant for development and testing only, not for production
//! code.
//!
//! # Key Types
//!
//! - [`counted`] wraps an iterator and counts the elements pulled through it,
//!   which is how laziness is asserted: a pipeline that has not been pulled yet
//!   must report zero pulls.
//! - [`ConcurrencyGauge`] records how many async work items run at once, how
//!   many finished and how many were dropped before finishing.
//! - [`TestError`] is a small `std::error::Error` for failing work items.
//! - [`test_channel`] turns an unbounded channel into a stream so tests can
//!   push values imperatively into a consuming stream operator.
//!
//! # Example
//!
//! ```rust
//! use tributary_test_utils::counted;
//!
//! let (numbers, pulls) = counted(1..=10);
//! let mut doubled = numbers.map(|n| n * 2);
//! assert_eq!(pulls.get(), 0);
//!
//! assert_eq!(doubled.next(), Some(2));
//! assert_eq!(pulls.get(), 1);
//! ```

pub mod counting;
pub mod helpers;
pub mod gauge;
pub mod test_error;

pub use counting::{counted, Counted, PullCount};
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use gauge::{ConcurrencyGauge, GaugeGuard};
pub use test_error::TestError;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Creates an unbounded channel whose receiving half is a `Stream`.
///
/// The stream ends once every sender has been dropped.
///
/// # Example
///
/// ```rust
/// use tributary_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel();
/// tx.send(42).unwrap();
/// drop(tx);
///
/// assert_eq!(stream.next().await, Some(42));
/// assert_eq!(stream.next().await, None);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
