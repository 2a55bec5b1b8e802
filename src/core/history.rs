//! History module - bounded undo/redo log
//!
//! A cursor `pos` splits the buffer into past `[0, pos)` and future
//! `[pos, len)`. Pushing with a future present discards it; pushing past
//! capacity evicts the oldest entry from the front.

use std::collections::VecDeque;

use crate::error::{GameError, Result};

/// Bounded, cursor-tracking sequence of replayable actions.
#[derive(Debug, Clone)]
pub struct HistoryBuffer<T> {
    data: VecDeque<T>,
    pos: usize,
    capacity: usize,
}

impl<T> HistoryBuffer<T> {
    /// Create an empty buffer. Fails for `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(GameError::InvalidConfig(
                "history capacity must be at least 1",
            ));
        }
        Ok(Self {
            data: VecDeque::new(),
            pos: 0,
            capacity,
        })
    }

    /// Append an entry at the cursor.
    ///
    /// Any redo future is discarded first; if the buffer grows past capacity
    /// the oldest entry is evicted. The cursor ends at the new tail.
    pub fn push(&mut self, item: T) {
        if self.pos != self.data.len() {
            self.data.truncate(self.pos);
        }

        self.data.push_back(item);
        if self.data.len() > self.capacity {
            self.data.pop_front();
        }

        self.pos = self.data.len();
    }

    /// Step the cursor forward and return the entry it passed over.
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(GameError::NoNextAction);
        }
        let item = &self.data[self.pos];
        self.pos += 1;
        Ok(item)
    }

    /// Step the cursor backward and return the entry it now points at.
    pub fn prev(&mut self) -> Result<&T> {
        if !self.has_prev() {
            return Err(GameError::NoPrevAction);
        }
        self.pos -= 1;
        Ok(&self.data[self.pos])
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.data.len()
    }

    pub fn has_prev(&self) -> bool {
        self.pos > 0
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and reset the cursor.
    pub fn clear(&mut self) {
        self.data.clear();
        self.pos = 0;
    }
}
