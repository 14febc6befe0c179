// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tributary_core::TributaryError;
use tributary_stream::with_timeout;
use tributary_test_utils::{ConcurrencyGauge, TestError};

const LIMIT: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn test_slow_work_times_out() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let tracked = gauge.clone();
    let work = async move {
        tracked.track(sleep(LIMIT * 2)).await;
        Ok::<_, TestError>("done")
    };

    // Act
    let result = with_timeout(LIMIT, work).await;
    sleep(Duration::from_millis(1)).await;

    // Assert
    let error = result.expect_err("timer finishes first");
    assert!(error.is_timeout());
    assert!(!error.is_permanent());
    assert_eq!(gauge.cancelled(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_fast_work_returns_before_deadline() -> anyhow::Result<()> {
    // Arrange
    let started = Instant::now();
    let work = async {
        sleep(LIMIT / 2).await;
        Ok::<_, TestError>(42)
    };

    // Act
    let value = with_timeout(LIMIT, work).await?;

    // Assert
    assert_eq!(value, 42);
    assert!(started.elapsed() < LIMIT);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_work_failure_is_not_reported_as_timeout() {
    // Arrange
    let work = async { Err::<u8, _>(TestError::Failed(7)) };

    // Act
    let result = with_timeout(LIMIT, work).await;

    // Assert
    match result {
        Err(TributaryError::UserError(inner)) => {
            assert_eq!(inner.to_string(), "work item 7 failed");
        }
        other => panic!("expected the work's own failure, got {other:?}"),
    }
}
