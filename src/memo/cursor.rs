// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cursor over a memo's shared cache.

use super::MemoState;
use crate::seq::{SeqResult, Source};
use std::rc::Rc;

/// One independent reader of a memo. Keeps the memo state alive.
pub(super) struct MemoCursor<'a, T> {
    state: Rc<MemoState<'a, T>>,
    position: usize,
}

impl<'a, T> MemoCursor<'a, T> {
    pub(super) fn new(state: Rc<MemoState<'a, T>>) -> Self {
        Self { state, position: 0 }
    }
}

impl<T: Clone> Source<T> for MemoCursor<'_, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        let value = self.state.value_at(self.position)?;
        if value.is_some() {
            self.position += 1;
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        "MemoCursor"
    }
}
