// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task bound to the lifetime of its handle.

use std::future::Future;

use crate::CancellationToken;

/// Handle to a spawned tokio task that is cancelled when the handle drops.
///
/// The spawned future receives a [`CancellationToken`] and is expected to stop
/// at its next checkpoint once the token fires. Dropping the handle (or calling
/// [`cancel`](Self::cancel)) fires it.
///
/// # Example
///
/// ```rust
/// use tributary_core::ScopedTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = ScopedTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct ScopedTask {
    cancel: CancellationToken,
}

impl ScopedTask {
    /// Spawn `f(token)` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal the task to stop without waiting for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Returns `true` once the task was cancelled via `cancel()` or drop.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
