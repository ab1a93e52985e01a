// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consumption primitives: `head`, `drop`, `tail`, `take`, `uncons`.

use super::{Seq, SeqError, SeqResult, Source};

/// Pull exactly one value, advancing `seq` irreversibly.
///
/// Fails with [`SeqError::Exhausted`] if `seq` has already ended.
pub fn head<T>(seq: &mut Seq<'_, T>) -> SeqResult<T> {
    seq.pull()?.ok_or(SeqError::Exhausted)
}

/// Split a sequence into its first value and the remainder.
pub fn uncons<T>(mut seq: Seq<'_, T>) -> SeqResult<(T, Seq<'_, T>)> {
    let first = head(&mut seq)?;
    Ok((first, seq))
}

/// Discard the next `n` values, then pass the rest through.
///
/// Discarding happens on the first pull, before any value is yielded. Fails
/// with [`SeqError::Exhausted`] if fewer than `n` values exist.
pub fn drop<'a, T: 'a>(n: usize, seq: Seq<'a, T>) -> Seq<'a, T> {
    Seq::new(Discard {
        remaining: n,
        inner: seq,
    })
}

/// Everything after the first value: `drop(1, seq)`.
pub fn tail<'a, T: 'a>(seq: Seq<'a, T>) -> Seq<'a, T> {
    drop(1, seq)
}

/// At most the first `n` values of `seq`.
///
/// The result is finite whatever `seq` is, and `seq` is never pulled after the
/// `n`-th value. Fails with [`SeqError::Exhausted`] on the pull where `seq`
/// ends early.
pub fn take<'a, T: 'a>(n: usize, seq: Seq<'a, T>) -> Seq<'a, T> {
    Seq::new(Take {
        remaining: n,
        inner: seq,
    })
}

struct Discard<'a, T> {
    remaining: usize,
    inner: Seq<'a, T>,
}

impl<T> Source<T> for Discard<'_, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        while self.remaining > 0 {
            head(&mut self.inner)?;
            self.remaining -= 1;
        }
        self.inner.pull()
    }

    fn name(&self) -> &str {
        "Drop"
    }
}

struct Take<'a, T> {
    remaining: usize,
    inner: Seq<'a, T>,
}

impl<T> Source<T> for Take<'_, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let value = head(&mut self.inner)?;
        self.remaining -= 1;
        Ok(Some(value))
    }

    fn name(&self) -> &str {
        "Take"
    }
}
