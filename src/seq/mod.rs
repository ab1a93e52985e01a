// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The pull-based lazy sequence.
//!
//! A [`Seq`] is an ordered, possibly infinite run of values produced one at a
//! time when a consumer pulls. Every pull returns one of:
//!
//! - `Ok(Some(value))` - the next value
//! - `Ok(None)` - the valid end of a finite sequence
//! - `Err(SeqError)` - a failure, most often [`SeqError::Exhausted`] from an
//!   operation that needed a value the upstream could not supply
//!
//! A plain `Seq` is *ephemeral*: each pull consumes its position for good.
//! Replayable sequences are obtained from a [`Memo`](crate::memo::Memo).
//!
//! # Example
//!
//! ```
//! use lazy_seq::{head, nats, take, tail};
//!
//! let mut rest = tail(nats());
//! assert_eq!(head(&mut rest), Ok(1));
//! assert_eq!(take(3, rest).to_vec(), Ok(vec![2, 3, 4]));
//! ```

pub mod error;
mod ops;

pub use error::{SeqError, SeqResult};
pub use ops::{drop, head, tail, take, uncons};

use std::fmt;

/// A producer of values, advanced one pull at a time.
///
/// This is the seam every constructor and combinator plugs into. Implementors
/// must do no work until `pull` is called, and must never pull their upstream
/// more often than needed to answer the current request.
pub trait Source<T> {
    /// Produce the next value, `Ok(None)` at the end, or an error.
    fn pull(&mut self) -> SeqResult<Option<T>>;

    /// Short name for debugging output.
    fn name(&self) -> &str {
        "Source"
    }
}

/// An ephemeral lazy sequence of `T`.
pub struct Seq<'a, T> {
    source: Box<dyn Source<T> + 'a>,
    /// Set once the `Iterator` view has reported an error.
    failed: bool,
}

impl<'a, T> Seq<'a, T> {
    /// Wrap a source as a sequence.
    pub fn new<S>(source: S) -> Self
    where
        S: Source<T> + 'a,
    {
        Self {
            source: Box::new(source),
            failed: false,
        }
    }

    /// Build a sequence from a closure that answers each pull.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> SeqResult<Option<T>> + 'a,
    {
        Self::new(FromFn(f))
    }

    /// Pull the next value.
    pub fn pull(&mut self) -> SeqResult<Option<T>> {
        self.source.pull()
    }

    /// Drain the sequence into a vector.
    ///
    /// Only terminates on finite sequences. Returns the first error raised
    /// while draining.
    pub fn to_vec(self) -> SeqResult<Vec<T>> {
        self.collect()
    }
}

impl<T> fmt::Debug for Seq<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("source", &self.source.name())
            .finish()
    }
}

/// Iterates pulled values; an error is yielded once and ends iteration.
impl<T> Iterator for Seq<'_, T> {
    type Item = SeqResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.pull() {
            Ok(value) => value.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}

struct FromFn<F>(F);

impl<T, F> Source<T> for FromFn<F>
where
    F: FnMut() -> SeqResult<Option<T>>,
{
    fn pull(&mut self) -> SeqResult<Option<T>> {
        (self.0)()
    }

    fn name(&self) -> &str {
        "FromFn"
    }
}
