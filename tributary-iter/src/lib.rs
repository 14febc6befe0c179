// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy sequence adapters.
//!
//! Every adapter wraps a source iterator and pulls from it on demand: nothing
//! is evaluated when the adapter is built, and each source element is pulled at
//! most once per traversal. Adapters compose freely with each other and with
//! the std combinators (`map`, `filter`, `flat_map`, `flatten`, `take`, ...),
//! which already satisfy the same laziness contract.
//!
//! # Operator Overview
//!
//! | Operator | Memory | Notes |
//! |----------|--------|-------|
//! | [`accumulate`](SequenceExt::accumulate) | $O(1)$ | running fold, emits every intermediate value |
//! | [`sorted_lazily_by`](SequenceExt::sorted_lazily_by) | $O(n)$ | selection sort on demand, $O(n \cdot m)$ for an $m$-prefix |
//! | [`insert_at`](SequenceExt::insert_at) | $O(1)$ | appends when the index is past the end |
//! | [`removing_at`](SequenceExt::removing_at) | $O(k)$ | index set materialized up front |
//! | [`deduplicate_by`](SequenceExt::deduplicate_by) | $O(d)$ | linear scan, no `Hash` needed |
//! | [`terminate_when`](SequenceExt::terminate_when) | $O(1)$ | discards the element that stops it |
//! | [`zip3`] .. [`zip6`], [`zip_all`] | $O(1)$ | shortest source wins |
//! | [`cartesian_product`](SequenceExt::cartesian_product), [`cartesian_product3`] .. [`cartesian_product6`], [`cartesian_product_all`] | product of trailing operands | last operand varies fastest |
//!
//! # Example
//!
//! ```
//! use tributary_iter::SequenceExt;
//!
//! let firsts: Vec<_> = [5, 3, 3, 9, 1, 7]
//!     .into_iter()
//!     .deduplicate()
//!     .sorted_lazily()
//!     .take(2)
//!     .collect();
//!
//! assert_eq!(firsts, vec![1, 3]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod accumulate;
pub mod cartesian_product;
pub mod compact;
pub mod deduplicate;
pub mod insert_at;
pub mod lazy_sort;
pub mod removing_at;
pub mod results;
pub mod sequence_ext;
pub mod terminate_when;
pub mod zip;

pub use accumulate::Accumulate;
pub use cartesian_product::{
    cartesian_product3, cartesian_product4, cartesian_product5, cartesian_product6,
    cartesian_product_all, CartesianProduct, CartesianProductAll,
};
pub use compact::{Compact, RemovingAll};
pub use deduplicate::Deduplicate;
pub use insert_at::InsertAt;
pub use lazy_sort::LazySorted;
pub use removing_at::RemovingAt;
pub use results::{FilterSuccess, MapSuccess, ResultSequenceExt, TryFilter};
pub use sequence_ext::SequenceExt;
pub use terminate_when::TerminateWhen;
pub use zip::{zip3, zip4, zip5, zip6, zip_all, ZipAll};
