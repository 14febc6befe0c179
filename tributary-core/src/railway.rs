// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Railway-style helpers for `Option` and `Result`.
//!
//! `map`, `and_then` and `filter` already exist on the std types. This module
//! adds the pieces they lack:
//!
//! - [`OptionExt::require`] turns absence into a [`TributaryError::MissingValue`]
//! - [`RailwayExt::ensure_or`] filters a `Result` by a predicate
//! - [`CombineOptions`] / [`CombineResults`] fold a tuple of 2..=6 operands into
//!   one `Option`/`Result` of a tuple, short-circuiting on the left-most absent
//!   or failing operand
//! - [`combine_all_options`] / [`combine_all_results`] do the same for any
//!   number of homogeneous operands
//! - [`assign_if_absent`] fills an empty slot, evaluating the fallback only when
//!   needed
//!
//! # Example
//!
//! ```
//! use tributary_core::{CombineOptions, OptionExt};
//!
//! let host = Some("localhost");
//! let port = Some(8080);
//!
//! assert_eq!((host, port).combine(), Some(("localhost", 8080)));
//! assert!(None::<u16>.require("port must be configured").is_err());
//! ```

use crate::{Result, TributaryError};

/// Extension methods for `Option`.
pub trait OptionExt<T> {
    /// Convert absence into a [`TributaryError::MissingValue`] carrying `reason`.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` when `self` is `None`.
    fn require(self, reason: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn require(self, reason: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| TributaryError::missing_value(reason))
    }
}

/// Extension methods for `Result`.
pub trait RailwayExt<T, E> {
    /// Keep a success only if `predicate` holds, otherwise fail with `error(&value)`.
    ///
    /// Failures pass through untouched and `predicate` is not evaluated.
    ///
    /// # Errors
    ///
    /// Returns the original error, or the one built by `error` when the
    /// predicate rejects the value.
    fn ensure_or<P, F>(self, predicate: P, error: F) -> core::result::Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E;
}

impl<T, E> RailwayExt<T, E> for core::result::Result<T, E> {
    fn ensure_or<P, F>(self, predicate: P, error: F) -> core::result::Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(value) => Err(error(&value)),
            Err(e) => Err(e),
        }
    }
}

/// Combine a tuple of `Option`s into an `Option` of a tuple.
pub trait CombineOptions {
    /// Tuple of the unwrapped operands.
    type Output;

    /// `Some` of all values when every operand is present, `None` otherwise.
    fn combine(self) -> Option<Self::Output>;
}

/// Combine a tuple of `Result`s sharing an error type into a `Result` of a tuple.
pub trait CombineResults {
    /// Tuple of the unwrapped successes.
    type Output;
    /// Shared error type.
    type Error;

    /// `Ok` of all successes, or the left-most failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing operand, scanning left to right.
    fn combine(self) -> core::result::Result<Self::Output, Self::Error>;
}

macro_rules! impl_combine {
    ($($name:ident),+) => {
        impl<$($name),+> CombineOptions for ($(Option<$name>,)+) {
            type Output = ($($name,)+);

            #[allow(non_snake_case)]
            fn combine(self) -> Option<Self::Output> {
                let ($($name,)+) = self;
                Some(($($name?,)+))
            }
        }

        impl<Fail, $($name),+> CombineResults for ($(core::result::Result<$name, Fail>,)+) {
            type Output = ($($name,)+);
            type Error = Fail;

            #[allow(non_snake_case)]
            fn combine(self) -> core::result::Result<Self::Output, Fail> {
                let ($($name,)+) = self;
                Ok(($($name?,)+))
            }
        }
    };
}

impl_combine!(A, B);
impl_combine!(A, B, C);
impl_combine!(A, B, C, D);
impl_combine!(A, B, C, D, E);
impl_combine!(A, B, C, D, E, F);

/// Combine any number of homogeneous options; `None` as soon as one is absent.
///
/// Operands are pulled left to right and pulling stops at the first `None`.
pub fn combine_all_options<T, I>(operands: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    operands.into_iter().collect()
}

/// Combine any number of homogeneous results; the first failure wins.
///
/// Operands are pulled left to right and pulling stops at the first `Err`.
///
/// # Errors
///
/// Returns the first failing operand.
pub fn combine_all_results<T, E, I>(operands: I) -> core::result::Result<Vec<T>, E>
where
    I: IntoIterator<Item = core::result::Result<T, E>>,
{
    operands.into_iter().collect()
}

/// Assign `fallback()` to `slot` only when the slot is empty.
///
/// The fallback is not evaluated when a value is already present. It may itself
/// return `None`, leaving the slot empty.
///
/// ```
/// use tributary_core::assign_if_absent;
///
/// let mut cached = Some(1);
/// assign_if_absent(&mut cached, || unreachable!());
/// assert_eq!(cached, Some(1));
///
/// let mut empty = None;
/// assign_if_absent(&mut empty, || Some(2));
/// assert_eq!(empty, Some(2));
/// ```
pub fn assign_if_absent<T, F>(slot: &mut Option<T>, fallback: F)
where
    F: FnOnce() -> Option<T>,
{
    if slot.is_none() {
        *slot = fallback();
    }
}
