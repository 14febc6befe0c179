// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use std::time::Duration;
use tokio::time::sleep;
use tributary::prelude::*;
use tributary_test_utils::TestError;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer: &'static str,
    amount: u32,
}

fn order(customer: &'static str, amount: u32) -> Order {
    Order { customer, amount }
}

#[test]
fn test_sync_pipeline_composition() {
    // Arrange
    let orders = vec![
        order("carol", 40),
        order("alice", 10),
        order("bob", 25),
        order("alice", 10),
        order("dave", 0),
        order("bob", 5),
    ];

    // Act
    let biggest: Vec<_> = orders
        .into_iter()
        .deduplicate()
        .removing_all(|o| o.amount == 0)
        .sorted_lazily_by(
            Comparator::by_key_desc(|o: &Order| o.amount)
                .then_by_key(|o: &Order| o.customer)
                .into_fn(),
        )
        .take(2)
        .map(|o| o.customer)
        .collect();

    // Assert
    assert_eq!(biggest, vec!["carol", "bob"]);
}

#[test]
fn test_railway_inside_sequence() -> anyhow::Result<()> {
    // Arrange
    let rows = vec![("alice", Some(3)), ("bob", None), ("carol", Some(5))];

    // Act
    let totals: Vec<_> = rows
        .into_iter()
        .try_map(|(name, qty)| qty.require(format!("{name} has no quantity")).map(|q| (name, q)))
        .values()
        .accumulate(0, |total, (_, q)| total + q)
        .collect();
    let combined = (Some(1), Some("x")).combine().require("both present")?;

    // Assert
    assert_eq!(totals, vec![3, 8]);
    assert_eq!(combined, (1, "x"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_async_pipeline_composition() -> anyhow::Result<()> {
    // Arrange
    let ids = vec![4u64, 1, 3, 2];
    let work = ids.into_iter().map(|id| async move {
        sleep(Duration::from_millis(id * 10)).await;
        if id == 3 {
            Err(TestError::Failed(3))
        } else {
            Ok(id)
        }
    });

    // Act
    let completed: Vec<_> = stream::iter(work)
        .try_fan_out(Concurrency::bounded(4)?)
        .accumulate(Vec::new(), |seen, item| {
            let mut seen = seen.clone();
            seen.push(item);
            seen
        })
        .collect()
        .await;

    // Assert
    let last = completed.last().expect("at least one emission");
    assert_eq!(last.len(), 3);
    assert_eq!(last[0], StreamItem::Value(1));
    assert_eq!(last[1], StreamItem::Value(2));
    assert!(last[2].is_error());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_bridge_then_timeout() -> anyhow::Result<()> {
    // Arrange
    let steps = (1..=3).map(|n| move || async move { n * 2 });

    // Act
    let doubled: Vec<_> = steps.into_async_sequence().collect().await;
    let raced = with_timeout(Duration::from_millis(20), async move {
        Ok::<_, TestError>(doubled.iter().sum::<i32>())
    })
    .await?;

    // Assert
    assert_eq!(raced, 12);
    Ok(())
}
