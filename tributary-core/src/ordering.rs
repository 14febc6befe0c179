// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Multi-key comparison builders.
//!
//! Both builders compose comparators lexicographically: the first key (or
//! comparator) that tells two elements apart decides their order, later ones
//! are only consulted on ties, and elements that tie on every key compare
//! `Equal`.
//!
//! - [`compare_by`] takes a tuple of 1..=6 key extractors and is fully static.
//! - [`Comparator`] is a runtime builder for chains assembled dynamically or
//!   mixing ascending and descending keys.
//!
//! # Examples
//!
//! ```
//! use tributary_core::compare_by;
//!
//! let mut rows = vec![(1, 'b'), (0, 'z'), (1, 'a')];
//! rows.sort_by(compare_by((|r: &(i32, char)| r.0, |r: &(i32, char)| r.1)));
//!
//! assert_eq!(rows, vec![(0, 'z'), (1, 'a'), (1, 'b')]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A tuple of key extractors compared in priority order.
pub trait KeyChain<T: ?Sized> {
    /// Compare `a` and `b` key by key, stopping at the first non-equal key.
    fn compare_keys(&self, a: &T, b: &T) -> Ordering;
}

macro_rules! impl_key_chain {
    ($($key_fn:ident $key:ident $idx:tt),+) => {
        impl<T: ?Sized, $($key_fn, $key),+> KeyChain<T> for ($($key_fn,)+)
        where
            $($key_fn: Fn(&T) -> $key, $key: Ord,)+
        {
            fn compare_keys(&self, a: &T, b: &T) -> Ordering {
                $(
                    match (self.$idx)(a).cmp(&(self.$idx)(b)) {
                        Ordering::Equal => {}
                        decided => return decided,
                    }
                )+
                Ordering::Equal
            }
        }
    };
}

impl_key_chain!(F0 K0 0);
impl_key_chain!(F0 K0 0, F1 K1 1);
impl_key_chain!(F0 K0 0, F1 K1 1, F2 K2 2);
impl_key_chain!(F0 K0 0, F1 K1 1, F2 K2 2, F3 K3 3);
impl_key_chain!(F0 K0 0, F1 K1 1, F2 K2 2, F3 K3 3, F4 K4 4);
impl_key_chain!(F0 K0 0, F1 K1 1, F2 K2 2, F3 K3 3, F4 K4 4, F5 K5 5);

/// Build a comparison function from a tuple of key extractors.
///
/// The result can be handed to `sort_by`, `max_by`, `sorted_lazily_by` and
/// anything else expecting `Fn(&T, &T) -> Ordering`.
pub fn compare_by<T: ?Sized, K: KeyChain<T>>(keys: K) -> impl Fn(&T, &T) -> Ordering {
    move |a, b| keys.compare_keys(a, b)
}

type Step<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Runtime-assembled lexicographic comparator.
///
/// ```
/// use tributary_core::Comparator;
///
/// struct Player { team: &'static str, score: u32 }
///
/// let ranking = Comparator::by_key(|p: &Player| p.team).then_by_key_desc(|p: &Player| p.score);
///
/// let mut players = vec![
///     Player { team: "red", score: 3 },
///     Player { team: "blue", score: 1 },
///     Player { team: "red", score: 9 },
/// ];
/// players.sort_by(|a, b| ranking.compare(a, b));
///
/// let order: Vec<_> = players.iter().map(|p| (p.team, p.score)).collect();
/// assert_eq!(order, vec![("blue", 1), ("red", 9), ("red", 3)]);
/// ```
pub struct Comparator<T> {
    steps: Vec<Step<T>>,
}

impl<T: 'static> Comparator<T> {
    /// A comparator that considers every pair equal.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Start a chain ordering ascending by `key`.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new().then_by_key(key)
    }

    /// Start a chain ordering descending by `key`.
    pub fn by_key_desc<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new().then_by_key_desc(key)
    }

    /// Break remaining ties ascending by `key`.
    #[must_use]
    pub fn then_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_with(move |a, b| key(a).cmp(&key(b)))
    }

    /// Break remaining ties descending by `key`.
    #[must_use]
    pub fn then_by_key_desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_with(move |a, b| key(b).cmp(&key(a)))
    }

    /// Break remaining ties with an explicit comparator.
    #[must_use]
    pub fn then_with<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.steps.push(Box::new(compare));
        self
    }

    /// Invert the whole chain.
    #[must_use]
    pub fn reversed(self) -> Self {
        let inner = self;
        Self::new().then_with(move |a, b| inner.compare(b, a))
    }

    /// Compare two elements.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for step in &self.steps {
            match step(a, b) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Turn the chain into a plain comparison closure.
    pub fn into_fn(self) -> impl Fn(&T, &T) -> Ordering {
        move |a, b| self.compare(a, b)
    }
}

impl<T: 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("steps", &self.steps.len())
            .finish()
    }
}
