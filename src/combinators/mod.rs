// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ways to transform and combine sequences.
//!
//! All combinators pull their inputs on demand and propagate errors from
//! upstream unchanged.

use crate::seq::{head, Seq, SeqResult, Source};

/// `f(x, y)` for each lock-step pair of `xs` and `ys`.
///
/// Each output pulls `xs` first, then `ys`. Fails with
/// [`SeqError::Exhausted`](crate::SeqError::Exhausted) as soon as either input
/// has ended.
pub fn zip_with<'a, A, B, C, F>(f: F, xs: Seq<'a, A>, ys: Seq<'a, B>) -> Seq<'a, C>
where
    A: 'a,
    B: 'a,
    F: FnMut(A, B) -> C + 'a,
{
    Seq::new(ZipWith { f, xs, ys })
}

/// Lock-step pairs of `xs` and `ys`.
pub fn zip<'a, A: 'a, B: 'a>(xs: Seq<'a, A>, ys: Seq<'a, B>) -> Seq<'a, (A, B)> {
    zip_with(|x, y| (x, y), xs, ys)
}

/// All of `xs`, then all of `ys`.
///
/// `ys` is not pulled until `xs` has ended, so it may be infinite.
pub fn append<'a, T: 'a>(xs: Seq<'a, T>, ys: Seq<'a, T>) -> Seq<'a, T> {
    Seq::new(Append {
        first: Some(xs),
        second: ys,
    })
}

/// The values of `xs` for which `p` holds, in their original order.
pub fn filter<'a, T, P>(p: P, xs: Seq<'a, T>) -> Seq<'a, T>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Seq::new(Filter { p, xs })
}

struct ZipWith<'a, A, B, F> {
    f: F,
    xs: Seq<'a, A>,
    ys: Seq<'a, B>,
}

impl<A, B, C, F> Source<C> for ZipWith<'_, A, B, F>
where
    F: FnMut(A, B) -> C,
{
    fn pull(&mut self) -> SeqResult<Option<C>> {
        let x = head(&mut self.xs)?;
        let y = head(&mut self.ys)?;
        Ok(Some((self.f)(x, y)))
    }

    fn name(&self) -> &str {
        "ZipWith"
    }
}

struct Append<'a, T> {
    /// `None` once the first sequence has ended.
    first: Option<Seq<'a, T>>,
    second: Seq<'a, T>,
}

impl<T> Source<T> for Append<'_, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        if let Some(first) = self.first.as_mut() {
            match first.pull()? {
                Some(x) => return Ok(Some(x)),
                None => self.first = None,
            }
        }
        self.second.pull()
    }

    fn name(&self) -> &str {
        "Append"
    }
}

struct Filter<'a, T, P> {
    p: P,
    xs: Seq<'a, T>,
}

impl<T, P> Source<T> for Filter<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        while let Some(x) = self.xs.pull()? {
            if (self.p)(&x) {
                return Ok(Some(x));
            }
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "Filter"
    }
}
