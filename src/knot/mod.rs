// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Self-referential streams ("tying the knot").
//!
//! A self-referential stream is a memo whose underlying sequence reads from
//! cursors of that same memo. The cursors must be created while the memo is
//! still being built, so they go through a [`Knot`]: an indirection cell that
//! is allocated first, captured by the producer, and assigned once the memo
//! exists.
//!
//! ```
//! use lazy_seq::{cons, memo, take, tail, zip_with, Knot};
//!
//! let knot = Knot::new();
//! let body = cons(0u64, cons(1, zip_with(|a: u64, b: u64| a + b, knot.cursor(), tail(knot.cursor()))));
//! let fibs = knot.tie(memo(body));
//!
//! assert_eq!(take(8, fibs.cursor()).to_vec(), Ok(vec![0, 1, 1, 2, 3, 5, 8, 13]));
//! ```
//!
//! The producer must yield its base values before it first pulls through the
//! knot. Otherwise the memo is asked for a position it is still producing and
//! the pull fails with [`SeqError::ReentrantPull`].
//!
//! # Ownership
//!
//! The cell holds a weak reference, so a producer that captures its own knot
//! does not keep its memo alive. The memo is reclaimed with its last outside
//! handle or cursor.

mod deferred;

use crate::combinators::append;
use crate::constructors::{cons, from_iter};
use crate::memo::{memo, Memo, MemoState};
use crate::seq::{drop, head, tail, Seq, SeqError, SeqResult, Source};
use deferred::DeferredCursor;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Binding<'a, T> = Rc<RefCell<Option<Weak<MemoState<'a, T>>>>>;

/// A deferred binding to a memo that does not exist yet.
pub struct Knot<'a, T> {
    cell: Binding<'a, T>,
}

impl<'a, T> Knot<'a, T>
where
    T: Clone + 'a,
{
    /// An unassigned knot.
    pub fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// A cursor over the memo this knot will be tied to.
    ///
    /// May be called before [`tie`](Self::tie); the binding is resolved on
    /// the cursor's first pull.
    pub fn cursor(&self) -> Seq<'a, T> {
        Seq::new(DeferredCursor::new(Rc::clone(&self.cell)))
    }

    /// Bind the knot to `memo` and hand the memo back.
    pub fn tie(&self, memo: Memo<'a, T>) -> Memo<'a, T> {
        log::debug!("[Knot] tied");
        *self.cell.borrow_mut() = Some(memo.downgrade());
        memo
    }

    /// Whether [`tie`](Self::tie) has been called.
    pub fn is_tied(&self) -> bool {
        self.cell.borrow().is_some()
    }
}

impl<'a, T: Clone + 'a> Default for Knot<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Knot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Knot")
            .field("tied", &self.cell.borrow().is_some())
            .finish()
    }
}

/// The Fibonacci numbers `0, 1, 1, 2, 3, 5, ...` as a memoized stream.
///
/// Each value after the two bases is the sum of the stream and its own tail.
/// Values are `u64`; `fib(93)` is the largest that fits, so pulling position
/// 94 fails with [`SeqError::Overflow`]. Build the same knot with
/// [`zip_with`](crate::zip_with) over a wider type to go further.
pub fn fibs() -> Memo<'static, u64> {
    let knot = Knot::new();
    let sums = CheckedSums {
        xs: knot.cursor(),
        ys: tail(knot.cursor()),
        position: 2,
        overflowed: false,
    };
    knot.tie(memo(cons(0, cons(1, Seq::new(sums)))))
}

/// Pairwise `u64` sums of two cursors, failing instead of wrapping.
struct CheckedSums<'a> {
    xs: Seq<'a, u64>,
    ys: Seq<'a, u64>,
    /// Stream position of the next sum.
    position: usize,
    overflowed: bool,
}

impl Source<u64> for CheckedSums<'_> {
    fn pull(&mut self) -> SeqResult<Option<u64>> {
        let overflow = SeqError::Overflow {
            position: self.position,
        };
        if self.overflowed {
            return Err(overflow);
        }
        let x = head(&mut self.xs)?;
        let y = head(&mut self.ys)?;
        match x.checked_add(y) {
            Some(sum) => {
                self.position += 1;
                Ok(Some(sum))
            }
            None => {
                log::debug!("[Knot] u64 overflow at position {}", self.position);
                self.overflowed = true;
                Err(overflow)
            }
        }
    }

    fn name(&self) -> &str {
        "CheckedSums"
    }
}

/// A stream defined by a linear recurrence over itself.
///
/// Yields `bases` in order, then for every following position `n` yields
/// `step(&[s[n - k], ..., s[n - 1]])` where `k = bases.len()` and `s` is the
/// stream itself.
///
/// ```
/// use lazy_seq::{recurrence, take};
///
/// let tribonacci = recurrence(vec![0u64, 0, 1], |w| w.iter().sum());
/// assert_eq!(take(7, tribonacci.cursor()).to_vec(), Ok(vec![0, 0, 1, 1, 2, 4, 7]));
/// ```
pub fn recurrence<'a, T, F>(bases: Vec<T>, step: F) -> Memo<'a, T>
where
    T: Clone + 'a,
    F: FnMut(&[T]) -> T + 'a,
{
    let knot = Knot::new();
    let order = bases.len();
    let windows = Windows {
        cursors: (0..order).map(|offset| drop(offset, knot.cursor())).collect(),
        step,
    };
    knot.tie(memo(append(from_iter(bases), Seq::new(windows))))
}

/// Successive windows of `k` lagged cursors, folded by `step`.
struct Windows<'a, T, F> {
    cursors: Vec<Seq<'a, T>>,
    step: F,
}

impl<T, F> Source<T> for Windows<'_, T, F>
where
    F: FnMut(&[T]) -> T,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        let window = self
            .cursors
            .iter_mut()
            .map(head)
            .collect::<Result<Vec<T>, SeqError>>()?;
        Ok(Some((self.step)(&window)))
    }

    fn name(&self) -> &str {
        "Windows"
    }
}
