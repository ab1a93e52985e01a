// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partitioning and lazy quicksort.
//!
//! # Algorithm
//!
//! ```text
//! qsort (x:xs) = qsort lesser ++ [x] ++ qsort greater
//!   where (lesser, greater) = partition (< x) xs
//! ```
//!
//! The two halves are filtered views over a single memo of `xs`, so every input
//! value is pulled once and routed to exactly one half. Nothing is compared
//! until the first output value is requested.
//!
//! # Termination
//!
//! `qsort` terminates only on finite inputs: producing the smallest value
//! requires scanning the whole input.
//!
//! # Stack Depth
//!
//! Each pivot nests another filter-over-memo layer, and pulls recurse through
//! every layer. An input already in order (or reverse order) nests one layer
//! per value, so a run of a few thousand sorted values can overflow a default
//! 2 MiB thread stack. Sort long, possibly ordered inputs on a thread with a
//! larger stack, or shuffle them first.

use crate::combinators::{append, filter};
use crate::constructors::cons;
use crate::memo::memo;
use crate::seq::{Seq, SeqResult, Source};
use std::rc::Rc;

/// Split `xs` into the values satisfying `p` and the values that do not.
///
/// Both views read one shared memo of `xs`. Pulling from only one view caches
/// the values routed to the other, so that view's values stay in memory until
/// it is drained or dropped.
pub fn partition<'a, T, P>(p: P, xs: Seq<'a, T>) -> (Seq<'a, T>, Seq<'a, T>)
where
    T: Clone + 'a,
    P: Fn(&T) -> bool + 'a,
{
    let shared = memo(xs);
    let p = Rc::new(p);
    let q = Rc::clone(&p);
    (
        filter(move |x| p(x), shared.cursor()),
        filter(move |x| !q(x), shared.cursor()),
    )
}

/// `xs` in non-decreasing order, produced lazily.
///
/// Uses strict `<`: values equal to a pivot, and values incomparable with it,
/// go after the pivot. Equal values end up adjacent, but their input order is
/// not kept. An empty input gives an empty output.
///
/// ```
/// use lazy_seq::{from_iter, qsort};
///
/// assert_eq!(qsort(from_iter(vec![4, 2, 3, 1])).to_vec(), Ok(vec![1, 2, 3, 4]));
/// ```
pub fn qsort<'a, T>(xs: Seq<'a, T>) -> Seq<'a, T>
where
    T: PartialOrd + Clone + 'a,
{
    qsort_by(|a: &T, b: &T| a < b, xs)
}

/// Lazy quicksort with a caller-supplied strict less-than.
pub fn qsort_by<'a, T, F>(less: F, xs: Seq<'a, T>) -> Seq<'a, T>
where
    T: Clone + 'a,
    F: Fn(&T, &T) -> bool + 'a,
{
    sorted(Rc::new(less), xs)
}

type Less<'a, T> = Rc<dyn Fn(&T, &T) -> bool + 'a>;

fn sorted<'a, T: Clone + 'a>(less: Less<'a, T>, xs: Seq<'a, T>) -> Seq<'a, T> {
    Seq::new(QSort {
        less,
        input: Some(xs),
        output: None,
    })
}

struct QSort<'a, T> {
    less: Less<'a, T>,
    /// The unsorted input, until the pivot is pulled.
    input: Option<Seq<'a, T>>,
    /// `qsort(lesser) ++ [pivot] ++ qsort(greater)` once split.
    output: Option<Seq<'a, T>>,
}

impl<'a, T: Clone + 'a> QSort<'a, T> {
    fn split(&self, pivot: T, rest: Seq<'a, T>) -> Seq<'a, T> {
        log::debug!("[QSort] pivot pulled, partitioning the remainder");
        let less = Rc::clone(&self.less);
        let key = pivot.clone();
        let (lesser, greater) = partition(move |x| less(x, &key), rest);
        append(
            sorted(Rc::clone(&self.less), lesser),
            cons(pivot, sorted(Rc::clone(&self.less), greater)),
        )
    }
}

impl<'a, T: Clone + 'a> Source<T> for QSort<'a, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        if let Some(mut xs) = self.input.take() {
            let pivot = match xs.pull() {
                Ok(pivot) => pivot,
                Err(error) => {
                    self.input = Some(xs);
                    return Err(error);
                }
            };
            match pivot {
                Some(pivot) => self.output = Some(self.split(pivot, xs)),
                None => log::trace!("[QSort] empty input"),
            }
        }
        match self.output.as_mut() {
            Some(output) => output.pull(),
            None => Ok(None),
        }
    }

    fn name(&self) -> &str {
        "QSort"
    }
}
