// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tributary_core::{
    assign_if_absent, combine_all_options, combine_all_results, CombineOptions, CombineResults,
    OptionExt, RailwayExt, TributaryError,
};

#[test]
fn test_require_present_value() -> anyhow::Result<()> {
    let port = Some(8080).require("port must be configured")?;
    assert_eq!(port, 8080);
    Ok(())
}

#[test]
fn test_require_absent_value_fails_with_reason() {
    let err = None::<u16>.require("port must be configured").unwrap_err();

    match err {
        TributaryError::MissingValue { reason } => assert_eq!(reason, "port must be configured"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ensure_or_keeps_accepted_value() {
    let checked = Ok::<_, String>(4).ensure_or(|v| v % 2 == 0, |v| format!("{v} is odd"));
    assert_eq!(checked, Ok(4));
}

#[test]
fn test_ensure_or_rejects_value() {
    let checked = Ok::<_, String>(3).ensure_or(|v| v % 2 == 0, |v| format!("{v} is odd"));
    assert_eq!(checked, Err("3 is odd".to_string()));
}

#[test]
fn test_ensure_or_passes_failures_through_without_evaluating() {
    let checked = Err::<i32, _>("upstream".to_string()).ensure_or(
        |_| panic!("predicate must not run"),
        |_| panic!("error builder must not run"),
    );
    assert_eq!(checked, Err("upstream".to_string()));
}

#[test]
fn test_combine_options_all_present() {
    assert_eq!((Some(1), Some("a")).combine(), Some((1, "a")));
    assert_eq!(
        (Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)).combine(),
        Some((1, 2, 3, 4, 5, 6))
    );
}

#[test]
fn test_combine_options_any_absent() {
    assert_eq!((Some(1), None::<char>, Some(3.5)).combine(), None);
}

#[test]
fn test_combine_results_all_ok() {
    let combined = (Ok::<_, String>(1), Ok::<_, String>('x')).combine();
    assert_eq!(combined, Ok((1, 'x')));
}

#[test]
fn test_combine_results_first_failure_wins() {
    let combined = (
        Ok::<u8, &str>(1),
        Err::<u8, _>("left"),
        Ok::<u8, _>(3),
        Err::<u8, _>("right"),
    )
        .combine();
    assert_eq!(combined, Err("left"));
}

#[test]
fn test_combine_all_collection_fallback() {
    assert_eq!(
        combine_all_options(vec![Some(1), Some(2), Some(3)]),
        Some(vec![1, 2, 3])
    );
    assert_eq!(
        combine_all_results(vec![Ok(1), Err("bad"), Err("worse")]),
        Err("bad")
    );
    assert_eq!(
        combine_all_options(Vec::<Option<i32>>::new()),
        Some(Vec::new())
    );
}

#[test]
fn test_assign_if_absent_skips_fallback_when_present() {
    let mut evaluated = false;
    let mut slot = Some("cached");

    assign_if_absent(&mut slot, || {
        evaluated = true;
        Some("fresh")
    });

    assert_eq!(slot, Some("cached"));
    assert!(!evaluated);
}

#[test]
fn test_assign_if_absent_fills_empty_slot() {
    let mut slot = None;
    assign_if_absent(&mut slot, || Some("fresh"));
    assert_eq!(slot, Some("fresh"));

    let mut still_empty: Option<i32> = None;
    assign_if_absent(&mut still_empty, || None);
    assert_eq!(still_empty, None);
}
