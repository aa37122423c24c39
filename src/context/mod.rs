// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the lexicon, the cell order and the configuration, fixed
//!   for the whole search
//! - Tier 2 (DYNAMIC): the grid and the ledger, changed only through methods
//!   that record the change on the trail
//!
//! A context is created per search invocation and discarded at the end.

use crate::config::SearchConfig;
use crate::grid::{diagonal_order, Grid, Position};
use crate::ledger::{ConstraintLedger, Conflict, Slot};
use crate::lexicon::{Lexicon, WordId};
use crate::solution::Solution;
use crate::state::{Counters, Statistics};
use crate::trail::{Trail, TrailEntry};

/// Immutable data (Tier 1: MEMO).
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Words of length n, sorted.
    pub lexicon: Lexicon,

    /// Cell for each search depth, anti-diagonal order.
    pub order: Vec<Position>,

    pub config: SearchConfig,
}

impl MemoizedData {
    /// Precompute the visitation order for `config.size`.
    ///
    /// The config is trusted: callers validate it against the lexicon first.
    pub fn new(lexicon: Lexicon, config: SearchConfig) -> Self {
        let order = diagonal_order(config.size);
        tracing::debug!(
            size = config.size,
            words = lexicon.len(),
            cells = order.len(),
            "search data prepared"
        );
        Self {
            lexicon,
            order,
            config,
        }
    }

    pub fn size(&self) -> usize {
        self.config.size
    }
}

/// Mutable search state (Tier 2: DYNAMIC).
#[derive(Debug)]
pub struct DynamicState {
    pub grid: Grid,
    pub ledger: ConstraintLedger,

    /// Most recent finished square not yet handed to the caller.
    pub found: Option<Solution>,
}

impl DynamicState {
    /// Create initial dynamic state from MEMO data.
    pub fn new(memo: &MemoizedData) -> Self {
        Self {
            grid: Grid::new(memo.size()),
            ledger: ConstraintLedger::new(memo.size(), memo.lexicon.len()),
            found: None,
        }
    }
}

/// Search context combining MEMO and DYNAMIC state.
///
/// ```text
/// SearchContext {
///     memo: MemoizedData,        // Tier 1: Immutable
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // never rewound
/// }
/// ```
///
/// Mutations of `state` go through [`place`](Self::place) and
/// [`commit`](Self::commit) so that [`rewind_to`](Self::rewind_to) can undo them.
#[derive(Debug)]
pub struct SearchContext {
    pub memo: MemoizedData,
    pub trail: Trail,
    pub state: DynamicState,
    pub statistics: Statistics,
}

impl SearchContext {
    pub fn new(lexicon: Lexicon, config: SearchConfig) -> Self {
        Self::with_memo(MemoizedData::new(lexicon, config))
    }

    pub fn with_memo(memo: MemoizedData) -> Self {
        let state = DynamicState::new(&memo);
        Self {
            trail: Trail::new(memo.size()),
            memo,
            state,
            statistics: Statistics::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.memo.size()
    }

    /// Write `letter` into the empty cell `(x, y)`, recording it on the trail.
    pub fn place(&mut self, x: usize, y: usize, letter: char) {
        debug_assert_eq!(self.state.grid.get(x, y), None, "cell ({}, {}) already filled", x, y);
        self.state.grid.set(x, y, letter);
        self.trail.record(TrailEntry::Placed { x, y });
        self.statistics.increment_counter(Counters::Placements);
    }

    /// Bind `word` to `slot`, recording a new binding on the trail.
    pub fn commit(&mut self, word: WordId, slot: Slot) -> Result<(), Conflict> {
        if let Some(commit) = self.state.ledger.try_commit(word, slot)? {
            self.trail.record(TrailEntry::Bound(commit));
        }
        Ok(())
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        for entry in self.trail.unwind_to(checkpoint) {
            match entry {
                TrailEntry::Placed { x, y } => self.state.grid.clear(x, y),
                TrailEntry::Bound(commit) => self.state.ledger.rollback(commit),
            }
        }
    }

    /// Copy the current square and its bound words.
    pub fn snapshot(&self) -> Solution {
        Solution::capture(&self.state.grid, &self.state.ledger, &self.memo.lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LetterOrder;

    fn context() -> SearchContext {
        let lexicon = Lexicon::new(2, ["an", "as", "at", "ha", "ox"], LetterOrder::Rarest);
        SearchContext::new(lexicon, SearchConfig::new(2))
    }

    #[test]
    fn test_search_context_new() {
        let ctx = context();
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.size(), 2);
        assert_eq!(ctx.memo.order.len(), 4);
        assert!(ctx.state.grid.is_empty());
        assert!(ctx.state.ledger.is_empty());
    }

    #[test]
    fn test_rewind_restores_grid_and_ledger() {
        let mut ctx = context();
        ctx.place(0, 0, 'h');
        let checkpoint = ctx.trail.checkpoint();

        ctx.place(0, 1, 'a');
        ctx.commit(3, Slot::Row(0)).unwrap();
        assert_eq!(ctx.trail.len(), 3);
        assert_eq!(ctx.state.ledger.word_in(Slot::Row(0)), Some(3));

        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.state.grid.get(0, 0), Some('h'));
        assert_eq!(ctx.state.grid.get(0, 1), None);
        assert!(ctx.state.ledger.is_empty());
        assert_eq!(ctx.trail.len(), 1);
    }

    #[test]
    fn test_noop_commit_is_not_trailed() {
        let mut ctx = context();
        ctx.commit(1, Slot::Column(0)).unwrap();
        ctx.commit(1, Slot::Column(0)).unwrap();
        assert_eq!(ctx.trail.len(), 1);
        assert!(ctx.commit(1, Slot::Row(1)).is_err());
        assert_eq!(ctx.trail.len(), 1);
    }

    #[test]
    fn test_placements_are_counted() {
        let mut ctx = context();
        ctx.place(1, 1, 'x');
        ctx.rewind_to(0);
        ctx.place(1, 1, 'n');
        assert_eq!(ctx.statistics.get(Counters::Placements), 2);
    }
}
