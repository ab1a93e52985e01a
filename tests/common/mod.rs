// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lazy_seq::{cons, from_iter, nil, Seq};
use std::cell::Cell;
use std::rc::Rc;

/// The three-value sequence `1, 2, 3` used throughout the scenarios.
pub fn example() -> Seq<'static, i32> {
    cons(1, cons(2, cons(3, nil())))
}

/// A shared counter of how many values were pulled from a wrapped sequence.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `seq` so that every successful pull increments this counter.
    pub fn wrap<T: 'static>(&self, mut seq: Seq<'static, T>) -> Seq<'static, T> {
        let count = Rc::clone(&self.0);
        Seq::from_fn(move || {
            let value = seq.pull()?;
            if value.is_some() {
                count.set(count.get() + 1);
            }
            Ok(value)
        })
    }

    /// A counted sequence over the given values.
    pub fn over<T: 'static>(&self, values: Vec<T>) -> Seq<'static, T> {
        self.wrap(from_iter(values))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}
