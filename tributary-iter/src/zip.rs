// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Positional combination of several sequences.
//!
//! All variants stop as soon as one source is exhausted. Sources are pulled
//! left to right, so sources to the right of the exhausted one are not pulled
//! for that final row.

use alloc::vec::Vec;
use core::iter::FusedIterator;

/// Zip three sequences into triples.
///
/// ```
/// use tributary_iter::zip3;
///
/// let rows: Vec<_> = zip3([1, 2, 3], ['a', 'b'], ["x", "y", "z"]).collect();
/// assert_eq!(rows, vec![(1, 'a', "x"), (2, 'b', "y")]);
/// ```
pub fn zip3<A, B, C>(a: A, b: B, c: C) -> impl Iterator<Item = (A::Item, B::Item, C::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
{
    a.into_iter().zip(b).zip(c).map(|((a, b), c)| (a, b, c))
}

/// Zip four sequences.
pub fn zip4<A, B, C, D>(
    a: A,
    b: B,
    c: C,
    d: D,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item, D::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
{
    zip3(a, b, c).zip(d).map(|((a, b, c), d)| (a, b, c, d))
}

/// Zip five sequences.
pub fn zip5<A, B, C, D, E>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item, D::Item, E::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    E: IntoIterator,
{
    zip4(a, b, c, d).zip(e).map(|((a, b, c, d), e)| (a, b, c, d, e))
}

/// Zip six sequences.
pub fn zip6<A, B, C, D, E, F>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item, D::Item, E::Item, F::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    E: IntoIterator,
    F: IntoIterator,
{
    zip5(a, b, c, d, e)
        .zip(f)
        .map(|((a, b, c, d, e), f)| (a, b, c, d, e, f))
}

/// Zip any number of homogeneous sequences into rows.
///
/// With no sources at all, nothing is yielded.
///
/// ```
/// use tributary_iter::zip_all;
///
/// let rows: Vec<_> = zip_all(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]).collect();
/// assert_eq!(rows, vec![vec![1, 4, 6], vec![2, 5, 7]]);
/// ```
pub fn zip_all<S>(sources: impl IntoIterator<Item = S>) -> ZipAll<S::IntoIter>
where
    S: IntoIterator,
{
    ZipAll {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        finished: false,
    }
}

/// Iterator returned by [`zip_all`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipAll<I> {
    sources: Vec<I>,
    finished: bool,
}

impl<I: Iterator> Iterator for ZipAll<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.finished || self.sources.is_empty() {
            return None;
        }

        let mut row = Vec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            match source.next() {
                Some(item) => row.push(item),
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished || self.sources.is_empty() {
            return (0, Some(0));
        }

        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None::<usize>), |(low, high), (l, h)| {
                let high = match (high, h) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                (low.min(l), high)
            })
    }
}

impl<I: Iterator> FusedIterator for ZipAll<I> {}
