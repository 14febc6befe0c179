// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tributary
//!
//! Lazy sequence combinators for iterators and streams.
//!
//! ## Overview
//!
//! - **Sync** ([`iter`]): accumulate, on-demand sort, insert/remove,
//!   deduplicate, terminate-when, N-ary zip and cartesian product, plus
//!   adapters for sequences of `Result`s. Everything pulls from its source on
//!   demand and composes with the std iterator adapters.
//! - **Async** ([`stream`]): a sequential bridge from async closures to a
//!   `Stream`, bounded-concurrency fan-out emitting in completion order,
//!   `await_all` / `await_any`, `with_timeout`, and the lazy adapters over
//!   `Stream`s.
//! - **Types** ([`types`]): the error type, `StreamItem`, cancellation, railway
//!   helpers for `Option`/`Result` and multi-key comparators.
//!
//! ## Quick Start
//!
//! ```rust
//! use tributary::prelude::*;
//!
//! let ranked: Vec<_> = [(2, 'b'), (1, 'z'), (2, 'a'), (1, 'z')]
//!     .into_iter()
//!     .deduplicate()
//!     .sorted_lazily_by(compare_by((|r: &(i32, char)| r.0, |r: &(i32, char)| r.1)))
//!     .take(2)
//!     .collect();
//!
//! assert_eq!(ranked, vec![(1, 'z'), (2, 'a')]);
//! ```

pub use tributary_core as types;
pub use tributary_iter as iter;
pub use tributary_stream as stream;

pub use tributary_core::{Result, StreamItem, TributaryError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tributary_core::{
        assign_if_absent, compare_by, CombineOptions, CombineResults, Comparator, OptionExt,
        RailwayExt, ResultExt, StreamItem, TributaryError,
    };
    pub use tributary_iter::{
        cartesian_product3, cartesian_product4, cartesian_product5, cartesian_product6,
        cartesian_product_all, zip3, zip4, zip5, zip6, zip_all, ResultSequenceExt, SequenceExt,
    };
    pub use tributary_stream::{AsyncBridgeExt, AsyncSequenceExt, Concurrency, StreamBridgeExt};
    #[cfg(feature = "runtime-tokio")]
    pub use tributary_stream::{with_timeout, FanOutExt};
}
