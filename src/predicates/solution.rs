// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SolutionPredicate - Captures a finished square.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// Snapshots the grid and the ledger once every cell is filled.
///
/// With `retain` set the snapshot is left in `ctx.state.found` for the caller
/// to collect; otherwise the square is only logged, for statistics-only runs.
#[derive(Debug)]
pub struct SolutionPredicate {
    retain: bool,
}

impl SolutionPredicate {
    pub fn new(retain: bool) -> Self {
        Self { retain }
    }
}

impl Predicate for SolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let solution = ctx.snapshot();
        debug_assert!(
            solution.verify(&ctx.memo.lexicon),
            "search produced an invalid square:\n{}",
            solution
        );
        tracing::debug!(
            number = ctx.statistics.get(Counters::Solutions),
            rows = ?solution.rows,
            "square found"
        );
        if self.retain {
            ctx.state.found = Some(solution);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Solution"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LetterOrder, SearchConfig};
    use crate::ledger::Slot;
    use crate::lexicon::Lexicon;

    fn filled_ctx() -> SearchContext {
        let lexicon = Lexicon::new(2, ["ab", "ac", "bd", "cd"], LetterOrder::Rarest);
        let mut ctx = SearchContext::new(lexicon, SearchConfig::new(2));
        for (x, y, letter) in [(0, 0, 'a'), (0, 1, 'b'), (1, 0, 'c'), (1, 1, 'd')] {
            ctx.place(x, y, letter);
        }
        ctx.commit(0, Slot::Row(0)).unwrap();
        ctx.commit(3, Slot::Row(1)).unwrap();
        ctx.commit(1, Slot::Column(0)).unwrap();
        ctx.commit(2, Slot::Column(1)).unwrap();
        ctx
    }

    #[test]
    fn test_retained_solution() {
        let mut ctx = filled_ctx();
        let mut pred = SolutionPredicate::new(true);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);

        let found = ctx.state.found.take().unwrap();
        assert_eq!(found.rows, vec!["ab", "cd"]);
        assert_eq!(found.words.len(), 4);
    }

    #[test]
    fn test_counting_only() {
        let mut ctx = filled_ctx();
        let mut pred = SolutionPredicate::new(false);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert!(ctx.state.found.is_none());
    }
}
