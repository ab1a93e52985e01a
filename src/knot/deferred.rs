// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cursor that resolves its memo through a knot on each pull.

use super::Binding;
use crate::seq::{SeqError, SeqResult, Source};
use std::rc::Rc;

/// A memo cursor reached through a knot's cell.
///
/// Holds only a weak reference to the memo: upgrading happens per pull so the
/// cursor never keeps its own memo alive.
pub(super) struct DeferredCursor<'a, T> {
    binding: Binding<'a, T>,
    position: usize,
}

impl<'a, T> DeferredCursor<'a, T> {
    pub(super) fn new(binding: Binding<'a, T>) -> Self {
        Self {
            binding,
            position: 0,
        }
    }
}

impl<T: Clone> Source<T> for DeferredCursor<'_, T> {
    fn pull(&mut self) -> SeqResult<Option<T>> {
        let weak = self.binding.borrow().clone().ok_or(SeqError::Unbound)?;
        let state = weak.upgrade().ok_or(SeqError::Released)?;
        let value = state.value_at(self.position)?;
        if value.is_some() {
            self.position += 1;
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        "DeferredCursor"
    }
}
