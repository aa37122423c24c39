// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the square search.
//!
//! Every change the search makes to its dynamic state is recorded here: a
//! letter placed in a cell, or a word bound to a slot in the ledger. To
//! backtrack, the trail is unwound to an earlier checkpoint and the recorded
//! changes are undone newest first. The trail only stores what to undo; the
//! undoing itself is done by [`SearchContext::rewind_to`](crate::context::SearchContext::rewind_to),
//! which owns both the trail and the state.

use crate::ledger::Commit;

/// One undoable change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailEntry {
    /// A letter was written into an empty cell.
    Placed { x: usize, y: usize },
    /// A word was bound to a slot.
    Bound(Commit),
}

/// Undo log of the current search path.
///
/// A checkpoint is simply the trail length at some moment. Entries are added
/// and removed strictly in step with search depth, so the trail never holds
/// more than one placement per cell plus one binding per slot.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a trail sized for a `size`×`size` square.
    pub fn new(size: usize) -> Self {
        Self {
            entries: Vec::with_capacity(size * size + 2 * size),
        }
    }

    /// Current position, to be passed to [`unwind_to`](Self::unwind_to) later.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    pub fn record(&mut self, entry: TrailEntry) {
        self.entries.push(entry);
    }

    /// Remove every entry recorded after `checkpoint`, yielding them newest first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length yields nothing.
    pub fn unwind_to(&mut self, checkpoint: usize) -> impl Iterator<Item = TrailEntry> + '_ {
        let start = checkpoint.min(self.entries.len());
        self.entries.drain(start..).rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
