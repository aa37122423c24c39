// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! InitializePredicate - Places the start letter.
//!
//! This predicate runs exactly once at the start of the search. When the
//! configuration names a start letter it is tried in the top-left cell with
//! the same checks as any other letter, so the words it forces are committed
//! to the ledger. The fill predicate then begins at depth 1.

use super::fill::try_letter;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// InitializePredicate seeds the square before the fill begins.
///
/// This predicate is deterministic and runs exactly once (round=0 only).
/// It never produces choices; backtracking into it undoes the seed and ends
/// the search. A start letter that fails the checks ends the search at once.
#[derive(Debug)]
pub struct InitializePredicate;

impl InitializePredicate {
    /// Depth at which the fill predicate starts for this context.
    pub fn start_depth(ctx: &SearchContext) -> usize {
        usize::from(ctx.memo.config.seed.is_some())
    }
}

impl Predicate for InitializePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        assert_eq!(
            round, 0,
            "InitializePredicate must be called exactly once with round=0"
        );

        match ctx.memo.config.seed {
            Some(seed) => {
                tracing::debug!(%seed, "seeding top-left cell");
                try_letter(ctx, 0, 0, seed)
            }
            None => PredicateResult::Success,
        }
    }

    fn name(&self) -> &str {
        "Initialize"
    }
}
