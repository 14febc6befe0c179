// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::fan_out::FanOutExt;
use core::future::Future;
use core::time::Duration;
use futures::future::{BoxFuture, FutureExt};
use futures::stream;
use std::error::Error;
use tributary_core::{Result, TributaryError};

/// Race `work` against a timer of `duration`.
///
/// Both competitors go through [`FanOutExt::try_await_any`]: whichever
/// completes first decides the result and the other one is aborted.
///
/// # Errors
///
/// Returns [`TributaryError::TimeoutError`] when the timer wins, or the work's
/// own failure wrapped as [`TributaryError::UserError`].
///
/// ```
/// use std::time::Duration;
/// use tributary_stream::with_timeout;
///
/// # #[tokio::main]
/// # async fn main() {
/// let quick = with_timeout(Duration::from_secs(1), async { Ok::<_, std::io::Error>(7) }).await;
/// assert_eq!(quick.unwrap(), 7);
///
/// let slow = with_timeout(Duration::from_millis(5), async {
///     tokio::time::sleep(Duration::from_secs(60)).await;
///     Ok::<_, std::io::Error>(7)
/// })
/// .await;
/// assert!(slow.unwrap_err().is_timeout());
/// # }
/// ```
pub async fn with_timeout<Fut, T, E>(duration: Duration, work: Fut) -> Result<T>
where
    Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Error + Send + Sync + 'static,
{
    let work: BoxFuture<'static, Result<T>> =
        async move { work.await.map_err(TributaryError::user_error) }.boxed();
    let timer: BoxFuture<'static, Result<T>> = async move {
        tokio::time::sleep(duration).await;
        Err(TributaryError::timeout_error(format!(
            "work did not complete within {duration:?}"
        )))
    }
    .boxed();

    stream::iter([work, timer])
        .try_await_any()
        .await
        .map_err(unwrap_competitor_error)
}

/// Competitor failures come back wrapped as user errors; recover the original.
fn unwrap_competitor_error(error: TributaryError) -> TributaryError {
    match error {
        TributaryError::UserError(inner) => match inner.downcast::<TributaryError>() {
            Ok(original) => *original,
            Err(other) => TributaryError::UserError(other),
        },
        other => other,
    }
}
