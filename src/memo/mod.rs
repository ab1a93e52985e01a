// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoization: turning a single-pass sequence into a replayable one.
//!
//! [`memo`] wraps an ephemeral [`Seq`] in a [`Memo`], a factory of independent
//! cursors. All cursors share:
//!
//! - the underlying sequence, pulled at most once per position, by whichever
//!   cursor first reaches that position
//! - an append-only cache of every value pulled so far, in production order
//!
//! Every cursor therefore observes the same values in the same order, no matter
//! how many cursors exist or how their pulls interleave.
//!
//! # Memory Model
//!
//! The cache is never trimmed: a memo holds every value it has produced for as
//! long as any handle or cursor is alive. Shared state lives behind `Rc`, so a
//! memo and its cursors are single-threaded.
//!
//! # Reentrancy
//!
//! While the underlying sequence is producing position `k`, it may read cached
//! positions `< k` through cursors of the same memo (this is how
//! [`fibs`](crate::knot::fibs) works). Asking for position `k` itself fails
//! with [`SeqError::ReentrantPull`].

mod cursor;

use crate::seq::{Seq, SeqError, SeqResult};
use cursor::MemoCursor;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Wrap `seq` into a replayable, caching factory.
pub fn memo<'a, T>(seq: Seq<'a, T>) -> Memo<'a, T>
where
    T: Clone + 'a,
{
    Memo {
        state: Rc::new(MemoState {
            cache: RefCell::new(Vec::new()),
            source: RefCell::new(Some(seq)),
        }),
    }
}

/// A factory of replayable cursors over one underlying sequence.
///
/// Cloning a `Memo` clones the handle, not the cache.
pub struct Memo<'a, T> {
    state: Rc<MemoState<'a, T>>,
}

impl<'a, T> Memo<'a, T>
where
    T: Clone + 'a,
{
    /// A fresh cursor starting at the first value.
    ///
    /// This is the factory call: each cursor replays the cache, then extends it.
    pub fn cursor(&self) -> Seq<'a, T> {
        Seq::new(MemoCursor::new(Rc::clone(&self.state)))
    }
}

impl<'a, T> Memo<'a, T> {
    /// Number of values pulled from the underlying sequence so far.
    pub fn cached_len(&self) -> usize {
        self.state.cache.borrow().len()
    }

    /// Whether the underlying sequence has ended.
    pub fn is_complete(&self) -> bool {
        matches!(self.state.source.try_borrow(), Ok(source) if source.is_none())
    }

    pub(crate) fn downgrade(&self) -> Weak<MemoState<'a, T>> {
        Rc::downgrade(&self.state)
    }
}

impl<T> Clone for Memo<'_, T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Memo<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("cached_len", &self.cached_len())
            .field("is_complete", &self.is_complete())
            .finish()
    }
}

/// State shared by a memo and all of its cursors.
pub(crate) struct MemoState<'a, T> {
    /// Every value pulled so far, in production order. Append-only.
    cache: RefCell<Vec<T>>,
    /// The underlying sequence; `None` once it has ended.
    source: RefCell<Option<Seq<'a, T>>>,
}

impl<T: Clone> MemoState<'_, T> {
    /// The value at `position`, replayed from the cache or pulled fresh.
    ///
    /// Callers advance one position at a time, so `position` never exceeds the
    /// cache length.
    pub(crate) fn value_at(&self, position: usize) -> SeqResult<Option<T>> {
        let cached = self.cache.borrow().get(position).cloned();
        if let Some(value) = cached {
            log::trace!("[Memo] replay position {}", position);
            return Ok(Some(value));
        }
        debug_assert_eq!(position, self.cache.borrow().len());

        let mut source = self
            .source
            .try_borrow_mut()
            .map_err(|_| SeqError::ReentrantPull { position })?;
        let Some(seq) = source.as_mut() else {
            return Ok(None);
        };

        match seq.pull()? {
            Some(value) => {
                log::trace!("[Memo] pulled position {}", position);
                self.cache.borrow_mut().push(value.clone());
                Ok(Some(value))
            }
            None => {
                log::trace!("[Memo] underlying sequence ended after {} values", position);
                *source = None;
                Ok(None)
            }
        }
    }
}
