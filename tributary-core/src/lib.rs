// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core building blocks shared by the tributary crates.
//!
//! - [`TributaryError`] and the [`Result`] alias used by every fallible operation
//! - [`StreamItem`], the element type of fallible async sequences
//! - [`CancellationToken`] and [`ScopedTask`] for structured cancellation
//! - railway helpers for `Option` / `Result` ([`railway`])
//! - multi-key comparison builders ([`ordering`])

pub mod cancellation_token;
pub mod error;
pub mod ordering;
pub mod railway;
#[cfg(feature = "runtime-tokio")]
pub mod scoped_task;
pub mod stream_item;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{IntoTributaryError, Result, ResultExt, TributaryError};
pub use self::ordering::{compare_by, Comparator, KeyChain};
pub use self::railway::{
    assign_if_absent, combine_all_options, combine_all_results, CombineOptions, CombineResults,
    OptionExt, RailwayExt,
};
#[cfg(feature = "runtime-tokio")]
pub use self::scoped_task::ScopedTask;
pub use self::stream_item::StreamItem;
