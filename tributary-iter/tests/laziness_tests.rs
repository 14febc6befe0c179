// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use tributary_iter::SequenceExt;
use tributary_test_utils::counted;

#[test]
fn test_building_a_pipeline_pulls_nothing() {
    // Arrange
    let (source, pulls) = counted(1..=10);

    // Act
    let pipeline = source
        .map(|n| n * 2)
        .filter(|n| n % 3 != 0)
        .accumulate(0, |acc, n| acc + n)
        .insert_at(2, [0])
        .removing_at([5])
        .terminate_when(|n| *n > 1000);

    // Assert
    assert_eq!(pulls.get(), 0);
    drop(pipeline);
}

#[test]
fn test_side_effects_fire_at_pull_time_once_per_element() {
    // Arrange
    let log = RefCell::new(Vec::new());
    let mut pipeline = [1, 2, 3, 4]
        .into_iter()
        .map(|n| {
            log.borrow_mut().push(n);
            n * 10
        })
        .filter(|n| *n != 20);

    // Act
    let first = pipeline.next();
    let after_first = log.borrow().clone();
    let second = pipeline.next();

    // Assert
    assert_eq!(first, Some(10));
    assert_eq!(after_first, vec![1]);
    assert_eq!(second, Some(30));
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_flat_map_creates_inner_sequences_on_demand() {
    // Arrange
    let (outer, pulls) = counted(vec![vec![], vec![1, 2], vec![3]]);
    let mut flat = outer.flatten();

    // Act
    let first = flat.next();

    // Assert
    assert_eq!(first, Some(1));
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_removing_all_pulls_until_match() {
    // Arrange
    let (source, pulls) = counted([2, 4, 5, 6]);
    let mut odd = source.removing_all(|n| n % 2 == 0);

    // Act
    let first = odd.next();

    // Assert
    assert_eq!(first, Some(5));
    assert_eq!(pulls.get(), 3);
}
