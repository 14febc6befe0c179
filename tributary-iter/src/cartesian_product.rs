// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Every combination of several sequences.
//!
//! Combinations come out in lexicographic order with the last operand varying
//! fastest, the order nested `for` loops with the first operand outermost
//! would produce.
//!
//! Trailing operands have to be revisited once per element of the operands
//! before them, so they are drained into owned buffers on the first pull. Each
//! operand is still pulled exactly once, which keeps single-pass sources and
//! side-effecting sources correct. The first operand is streamed.

use alloc::vec;
use alloc::vec::Vec;
use core::iter::{Fuse, FusedIterator};

/// Iterator returned by [`SequenceExt::cartesian_product`](crate::SequenceExt::cartesian_product).
///
/// Only the right-hand operand is buffered, in full, on the first pull. The
/// left-hand operand is not buffered: one element is pulled each time the
/// buffered operand wraps around, so yielding the first pair pulls exactly one
/// left-hand element.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CartesianProduct<I: Iterator, J: Iterator> {
    outer: Fuse<I>,
    inner_source: Option<J>,
    inner: Vec<J::Item>,
    current: Option<I::Item>,
    position: usize,
}

impl<I: Iterator, J: Iterator> CartesianProduct<I, J> {
    pub(crate) fn new(outer: I, inner: J) -> Self {
        Self {
            outer: outer.fuse(),
            inner_source: Some(inner),
            inner: Vec::new(),
            current: None,
            position: 0,
        }
    }
}

impl<I, J> Iterator for CartesianProduct<I, J>
where
    I: Iterator,
    I::Item: Clone,
    J: Iterator,
    J::Item: Clone,
{
    type Item = (I::Item, J::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.inner_source.take() {
            self.inner = source.collect();
        }
        if self.inner.is_empty() {
            return None;
        }

        loop {
            if let Some(current) = &self.current {
                if let Some(paired) = self.inner.get(self.position) {
                    self.position += 1;
                    return Some((current.clone(), paired.clone()));
                }
            }

            self.current = Some(self.outer.next()?);
            self.position = 0;
        }
    }
}

impl<I, J> FusedIterator for CartesianProduct<I, J>
where
    I: Iterator,
    I::Item: Clone,
    J: Iterator,
    J::Item: Clone,
{
}

impl<I, J> Clone for CartesianProduct<I, J>
where
    I: Iterator + Clone,
    I::Item: Clone,
    J: Iterator + Clone,
    J::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner_source: self.inner_source.clone(),
            inner: self.inner.clone(),
            current: self.current.clone(),
            position: self.position,
        }
    }
}

/// Cartesian product of three sequences.
///
/// ```
/// use tributary_iter::cartesian_product3;
///
/// let all: Vec<_> = cartesian_product3([1, 2], ['a'], [true, false]).collect();
/// assert_eq!(
///     all,
///     vec![(1, 'a', true), (1, 'a', false), (2, 'a', true), (2, 'a', false)]
/// );
/// ```
pub fn cartesian_product3<A, B, C>(
    a: A,
    b: B,
    c: C,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::Item: Clone,
    C: IntoIterator,
    C::Item: Clone,
{
    let tail = CartesianProduct::new(b.into_iter(), c.into_iter());
    CartesianProduct::new(a.into_iter(), tail).map(|(a, (b, c))| (a, b, c))
}

/// Cartesian product of four sequences.
pub fn cartesian_product4<A, B, C, D>(
    a: A,
    b: B,
    c: C,
    d: D,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item, D::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::Item: Clone,
    C: IntoIterator,
    C::Item: Clone,
    D: IntoIterator,
    D::Item: Clone,
{
    let tail = cartesian_product3(b, c, d);
    CartesianProduct::new(a.into_iter(), tail).map(|(a, (b, c, d))| (a, b, c, d))
}

/// Cartesian product of five sequences.
pub fn cartesian_product5<A, B, C, D, E>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item, D::Item, E::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::Item: Clone,
    C: IntoIterator,
    C::Item: Clone,
    D: IntoIterator,
    D::Item: Clone,
    E: IntoIterator,
    E::Item: Clone,
{
    let tail = cartesian_product4(b, c, d, e);
    CartesianProduct::new(a.into_iter(), tail).map(|(a, (b, c, d, e))| (a, b, c, d, e))
}

/// Cartesian product of six sequences.
pub fn cartesian_product6<A, B, C, D, E, F>(
    a: A,
    b: B,
    c: C,
    d: D,
    e: E,
    f: F,
) -> impl Iterator<Item = (A::Item, B::Item, C::Item, D::Item, E::Item, F::Item)>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::Item: Clone,
    C: IntoIterator,
    C::Item: Clone,
    D: IntoIterator,
    D::Item: Clone,
    E: IntoIterator,
    E::Item: Clone,
    F: IntoIterator,
    F::Item: Clone,
{
    let tail = cartesian_product5(b, c, d, e, f);
    CartesianProduct::new(a.into_iter(), tail)
        .map(|(a, (b, c, d, e, f))| (a, b, c, d, e, f))
}

/// Cartesian product of any number of homogeneous sequences, as rows.
///
/// Every operand is buffered on the first pull. With no operands, or with any
/// empty operand, nothing is yielded.
///
/// ```
/// use tributary_iter::cartesian_product_all;
///
/// let rows: Vec<_> = cartesian_product_all(vec![vec![0, 1], vec![5], vec![8, 9]]).collect();
/// assert_eq!(
///     rows,
///     vec![vec![0, 5, 8], vec![0, 5, 9], vec![1, 5, 8], vec![1, 5, 9]]
/// );
/// ```
pub fn cartesian_product_all<S>(
    operands: impl IntoIterator<Item = S>,
) -> CartesianProductAll<S::IntoIter>
where
    S: IntoIterator,
{
    CartesianProductAll {
        sources: Some(operands.into_iter().map(IntoIterator::into_iter).collect()),
        buffers: Vec::new(),
        cursor: Vec::new(),
        finished: false,
    }
}

/// Iterator returned by [`cartesian_product_all`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CartesianProductAll<I: Iterator> {
    sources: Option<Vec<I>>,
    buffers: Vec<Vec<I::Item>>,
    cursor: Vec<usize>,
    finished: bool,
}

impl<I: Iterator> CartesianProductAll<I> {
    fn fill_buffers(&mut self, sources: Vec<I>) {
        self.buffers = sources.into_iter().map(Iterator::collect).collect();
        self.finished = self.buffers.is_empty() || self.buffers.iter().any(Vec::is_empty);
        self.cursor = vec![0; self.buffers.len()];
    }

    /// Odometer step: bump the last digit, carrying leftwards.
    fn advance(&mut self) {
        for (digit, buffer) in self.cursor.iter_mut().zip(&self.buffers).rev() {
            *digit += 1;
            if *digit < buffer.len() {
                return;
            }
            *digit = 0;
        }
        self.finished = true;
    }
}

impl<I> Iterator for CartesianProductAll<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if let Some(sources) = self.sources.take() {
            self.fill_buffers(sources);
        }
        if self.finished {
            return None;
        }

        let row = self
            .cursor
            .iter()
            .zip(&self.buffers)
            .map(|(&digit, buffer)| buffer[digit].clone())
            .collect();
        self.advance();
        Some(row)
    }
}

impl<I> FusedIterator for CartesianProductAll<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
