// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tributary_core::{StreamItem, TributaryError};
use tributary_stream::{Concurrency, FanOutExt};
use tributary_test_utils::{assert_stream_ended, unwrap_stream, ConcurrencyGauge, TestError};

fn job(
    gauge: &ConcurrencyGauge,
    millis: u64,
    value: u32,
) -> impl Future<Output = u32> + Send + 'static {
    let gauge = gauge.clone();
    async move {
        gauge.track(sleep(Duration::from_millis(millis))).await;
        value
    }
}

fn fallible_job(
    gauge: &ConcurrencyGauge,
    millis: u64,
    outcome: Result<u32, TestError>,
) -> impl Future<Output = Result<u32, TestError>> + Send + 'static {
    let gauge = gauge.clone();
    async move {
        gauge.track(sleep(Duration::from_millis(millis))).await;
        outcome
    }
}

fn exploding_job(explode: bool) -> impl Future<Output = i32> + Send + 'static {
    async move {
        if explode {
            panic!("work item exploded");
        }
        1
    }
}

#[tokio::test(start_paused = true)]
async fn test_bounded_fan_out_never_exceeds_limit() -> anyhow::Result<()> {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = [40, 10, 30, 20, 10]
        .into_iter()
        .enumerate()
        .map(|(i, millis)| job(&gauge, millis, i as u32))
        .collect::<Vec<_>>();

    // Act
    let mut results = stream::iter(work)
        .fan_out(Concurrency::bounded(2)?)
        .collect::<Vec<_>>()
        .await;

    // Assert
    results.sort_unstable();
    assert_eq!(results, vec![0, 1, 2, 3, 4]);
    assert_eq!(gauge.peak(), 2);
    assert_eq!(gauge.finished(), 5);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_fan_out_emits_in_completion_order() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![job(&gauge, 30, 30), job(&gauge, 10, 10), job(&gauge, 20, 20)];

    // Act
    let results: Vec<_> = stream::iter(work)
        .fan_out(Concurrency::Unbounded)
        .collect()
        .await;

    // Assert
    assert_eq!(results, vec![10, 20, 30]);
    assert_eq!(gauge.peak(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_slot_is_refilled_as_soon_as_one_completes() -> anyhow::Result<()> {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![job(&gauge, 100, 0), job(&gauge, 10, 1), job(&gauge, 10, 2)];

    // Act
    let results: Vec<_> = stream::iter(work)
        .fan_out(Concurrency::bounded(2)?)
        .collect()
        .await;

    // Assert
    assert_eq!(results, vec![1, 2, 0]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_first_failure_is_terminal_and_aborts_in_flight() -> anyhow::Result<()> {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![
        fallible_job(&gauge, 10, Ok(0)),
        fallible_job(&gauge, 20, Err(TestError::Failed(1))),
        fallible_job(&gauge, 100, Ok(2)),
        fallible_job(&gauge, 5, Ok(3)),
        fallible_job(&gauge, 5, Ok(4)),
    ];
    let mut results = stream::iter(work).try_fan_out(Concurrency::bounded(2)?);

    // Act
    let first = unwrap_stream(&mut results, 1_000).await;
    let second = unwrap_stream(&mut results, 1_000).await;

    // Assert
    assert_eq!(first, StreamItem::Value(0));
    assert!(matches!(second, StreamItem::Error(TributaryError::UserError(_))));
    assert_stream_ended(&mut results, 1_000).await;

    sleep(Duration::from_millis(10)).await;
    assert_eq!(gauge.started(), 3);
    assert_eq!(gauge.cancelled(), 1);
    assert_eq!(gauge.in_flight(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_values_finished_alongside_a_failure_are_emitted_before_it() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![
        fallible_job(&gauge, 10, Err(TestError::Failed(0))),
        fallible_job(&gauge, 10, Ok(1)),
        fallible_job(&gauge, 10, Ok(2)),
    ];

    // Act
    let results: Vec<_> = stream::iter(work)
        .try_fan_out(Concurrency::Unbounded)
        .collect()
        .await;

    // Assert
    assert_eq!(results.len(), 3);
    assert!(matches!(
        results.last(),
        Some(StreamItem::Error(TributaryError::UserError(_)))
    ));
    let mut values: Vec<_> = results.into_iter().filter_map(StreamItem::ok).collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2]);
    assert_eq!(gauge.finished(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_the_stream_cancels_in_flight_work() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![
        job(&gauge, 10, 0),
        job(&gauge, 60_000, 1),
        job(&gauge, 60_000, 2),
    ];
    let mut results = stream::iter(work).fan_out(Concurrency::Unbounded);

    // Act
    let first = unwrap_stream(&mut results, 1_000).await;
    drop(results);
    sleep(Duration::from_millis(10)).await;

    // Assert
    assert_eq!(first, 0);
    assert_eq!(gauge.finished(), 1);
    assert_eq!(gauge.cancelled(), 2);
    assert_eq!(gauge.in_flight(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_explicit_cancel_ends_stream() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![job(&gauge, 60_000, 0)];
    let mut results = stream::iter(work).fan_out(Concurrency::Unbounded);
    sleep(Duration::from_millis(1)).await;

    // Act
    results.cancel();

    // Assert
    assert_stream_ended(&mut results, 1_000).await;
    sleep(Duration::from_millis(1)).await;
    assert_eq!(gauge.cancelled(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_await_all_and_try_await_all() -> anyhow::Result<()> {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = (0..4).map(|i| job(&gauge, 10 * (4 - i), i as u32)).collect::<Vec<_>>();
    let ok_work = vec![fallible_job(&gauge, 5, Ok(1)), fallible_job(&gauge, 1, Ok(2))];
    let failing_work = vec![
        fallible_job(&gauge, 5, Ok(1)),
        fallible_job(&gauge, 1, Err(TestError::rejected("bad input"))),
    ];

    // Act
    let all = stream::iter(work).await_all(Concurrency::Unbounded).await;
    let ok = stream::iter(ok_work).try_await_all(Concurrency::Unbounded).await?;
    let failed = stream::iter(failing_work)
        .try_await_all(Concurrency::Unbounded)
        .await;

    // Assert
    assert_eq!(all, vec![3, 2, 1, 0]);
    assert_eq!(ok, vec![2, 1]);
    let error = failed.expect_err("second item fails first");
    assert_eq!(error.to_string(), "User error: rejected: bad input");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_await_any_returns_first_and_cancels_rest() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![job(&gauge, 50, 1), job(&gauge, 10, 2), job(&gauge, 30, 3)];

    // Act
    let winner = stream::iter(work).await_any().await;
    sleep(Duration::from_millis(5)).await;

    // Assert
    assert_eq!(winner, Some(2));
    assert_eq!(gauge.finished(), 1);
    assert_eq!(gauge.cancelled(), 2);
}

#[tokio::test]
async fn test_await_any_on_empty_source() {
    // Arrange
    let nothing = stream::iter(Vec::<std::future::Ready<u8>>::new());
    let nothing_fallible = stream::iter(Vec::<std::future::Ready<Result<u8, TestError>>>::new());

    // Act
    let any = nothing.await_any().await;
    let try_any = nothing_fallible.try_await_any().await;

    // Assert
    assert_eq!(any, None);
    assert!(matches!(try_any, Err(TributaryError::MissingValue { .. })));
}

#[tokio::test]
async fn test_try_await_any_surfaces_winning_failure() {
    // Arrange
    let gauge = ConcurrencyGauge::new();
    let work = vec![
        fallible_job(&gauge, 50, Ok(1)),
        fallible_job(&gauge, 0, Err(TestError::Failed(2))),
    ];

    // Act
    let result = stream::iter(work).try_await_any().await;

    // Assert
    assert!(matches!(result, Err(TributaryError::UserError(_))));
}

#[tokio::test]
#[should_panic(expected = "work item exploded")]
async fn test_panicking_work_item_is_reraised_on_consumer() {
    // Arrange
    let work = vec![exploding_job(true), exploding_job(false)];

    // Act
    let _: Vec<i32> = stream::iter(work).fan_out(Concurrency::Unbounded).collect().await;
}

#[tokio::test]
#[should_panic(expected = "work source exploded")]
async fn test_panicking_work_source_is_reraised_on_consumer() {
    // Arrange
    let work = stream::iter(0..5).map(|i| {
        if i == 2 {
            panic!("work source exploded");
        }
        async move { i }
    });

    // Act
    let _: Vec<i32> = work.fan_out(Concurrency::Unbounded).collect().await;
}

#[tokio::test]
async fn test_values_pulled_before_a_source_panic_are_delivered() -> anyhow::Result<()> {
    // Arrange
    let work = stream::iter(0..5).map(|i| {
        if i == 2 {
            panic!("work source exploded");
        }
        async move { i }
    });
    let mut results = work.fan_out(Concurrency::bounded(1)?);

    // Act
    let first = unwrap_stream(&mut results, 1_000).await;
    let second = unwrap_stream(&mut results, 1_000).await;
    let third = futures::FutureExt::catch_unwind(std::panic::AssertUnwindSafe(results.next())).await;

    // Assert
    assert_eq!((first, second), (0, 1));
    assert!(third.is_err());
    Ok(())
}

#[test]
fn test_zero_concurrency_is_rejected() {
    let rejected = Concurrency::bounded(0);

    assert!(matches!(rejected, Err(TributaryError::InvalidArgument { .. })));
    assert_eq!(Concurrency::bounded(3).map(Concurrency::limit).ok(), Some(Some(3)));
    assert_eq!(Concurrency::Unbounded.limit(), None);
}
