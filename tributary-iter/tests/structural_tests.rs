// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_iter::SequenceExt;
use tributary_test_utils::counted;

fn initial(word: &str) -> Option<char> {
    word.chars().next().map(|c| c.to_ascii_lowercase())
}

#[test]
fn test_insert_at_splices_whole_sequence() {
    // Arrange
    let source = vec!['A', 'B', 'C', 'D'];

    // Act
    let spliced: Vec<_> = source.into_iter().insert_at(1, vec!['X', 'Y']).collect();

    // Assert
    assert_eq!(spliced, vec!['A', 'X', 'Y', 'B', 'C', 'D']);
}

#[test]
fn test_insert_at_index_zero_prepends() {
    let spliced: Vec<_> = [1, 2].into_iter().insert_at(0, [0]).collect();
    assert_eq!(spliced, vec![0, 1, 2]);
}

#[test]
fn test_insert_at_past_end_appends() {
    // Arrange
    let source = vec!['A', 'B'];

    // Act
    let spliced: Vec<_> = source.into_iter().insert_at(10, vec!['X']).collect();

    // Assert
    assert_eq!(spliced, vec!['A', 'B', 'X']);
}

#[test]
fn test_insert_at_infinite_insertion_never_resumes_source() {
    // Arrange
    let (source, pulls) = counted([1, 2, 3]);

    // Act
    let head: Vec<_> = source.insert_at(1, std::iter::repeat(0)).take(4).collect();

    // Assert
    assert_eq!(head, vec![1, 0, 0, 0]);
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_removing_at_drops_listed_positions() {
    // Arrange
    let source = vec!["a", "b", "c", "d", "e"];

    // Act
    let kept: Vec<_> = source.into_iter().removing_at([3, 0, 3, 42]).collect();

    // Assert
    assert_eq!(kept, vec!["b", "c", "e"]);
}

#[test]
fn test_deduplicate_keeps_first_occurrence() {
    // Arrange
    let source = vec![3, 1, 3, 2, 1, 3];

    // Act
    let unique: Vec<_> = source.into_iter().deduplicate().collect();

    // Assert
    assert_eq!(unique, vec![3, 1, 2]);
}

#[test]
fn test_deduplicate_by_equivalence_class() {
    // Arrange
    let source = vec!["Apple", "avocado", "Banana", "blueberry", "cherry"];

    // Act
    let by_initial: Vec<_> = source
        .into_iter()
        .deduplicate_by(|a, b| initial(a) == initial(b))
        .collect();

    // Assert
    assert_eq!(by_initial, vec!["Apple", "Banana", "cherry"]);
}

#[test]
fn test_deduplicate_works_without_hash() {
    // Arrange
    let source = vec![1.5_f64, 2.0, 1.5, 2.0];

    // Act
    let unique: Vec<_> = source.into_iter().deduplicate().collect();

    // Assert
    assert_eq!(unique, vec![1.5, 2.0]);
}

#[test]
fn test_terminate_when_stops_before_match() {
    // Arrange
    let (source, pulls) = counted([1, 2, 3, 4, 5]);

    // Act
    let head: Vec<_> = source.terminate_when(|n| *n == 3).collect();

    // Assert
    assert_eq!(head, vec![1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_terminate_when_stays_terminated() {
    // Arrange
    let mut head = [1, 9, 2].into_iter().terminate_when(|n| *n > 5);

    // Act
    let first = head.next();
    let stop = head.next();
    let after = head.next();

    // Assert
    assert_eq!((first, stop, after), (Some(1), None, None));
}

#[test]
fn test_compact_and_removing_all() {
    // Arrange
    let options = vec![Some(1), None, Some(3), None];

    // Act
    let compacted: Vec<_> = options.into_iter().compact().collect();
    let odd: Vec<_> = (1..=6).removing_all(|n| n % 2 == 0).collect();

    // Assert
    assert_eq!(compacted, vec![1, 3]);
    assert_eq!(odd, vec![1, 3, 5]);
}
