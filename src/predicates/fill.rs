// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! FillSquarePredicate - Fills the square one cell per round.
//!
//! Round `r` fills the cell at depth `start + r` of the anti-diagonal order.
//! Each round offers the candidate letters for its cell as choices; a choice
//! succeeds when the letter keeps every row and column extendable to a word
//! and the ledger accepts the words it forces. When every cell is filled the
//! predicate succeeds and hands over to the solution predicates.
//!
//! # Candidates
//!
//! If the cell's row is already bound to a word in the ledger, that word's
//! letter is the only candidate; otherwise the same holds for the column;
//! otherwise every letter of the alphabet is tried in heuristic order.
//!
//! # Checks for letter `c` at `(x, y)`
//!
//! 1. Transpose tie-break on the first column (see [`crate::symmetry`]).
//! 2. Place `c`.
//! 3. Row: some word must extend the row prefix. If exactly one does, the
//!    next column (when there is one and this is not the first row) must
//!    still have a word starting with its prefix plus that word's next
//!    letter, and the word is committed to the row.
//! 4. Column: the same, without lookahead, committing to the column.
//!
//! A failed check is counted in the statistics and the engine moves on to the
//! next letter after rewinding the trail, which removes the letter and any
//! word it committed.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::ledger::Slot;
use crate::lexicon::Completion;
use crate::state::Rejection;
use crate::symmetry::{check_transpose_prefix, SymmetryType};

#[derive(Debug)]
pub struct FillSquarePredicate {
    start_depth: usize,
    /// Candidate letters of each round, as offered by the last try_pred.
    candidates: Vec<Vec<char>>,
}

impl FillSquarePredicate {
    /// A fill starting at `start_depth` (1 when the top-left cell is seeded).
    pub fn new(start_depth: usize) -> Self {
        Self {
            start_depth,
            candidates: Vec::new(),
        }
    }
}

impl Predicate for FillSquarePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let depth = self.start_depth + round;
        if depth >= ctx.memo.order.len() {
            return PredicateResult::Success;
        }
        if ctx.memo.config.watch_depth == Some(depth) {
            report_watch(ctx, depth);
        }

        let (x, y) = ctx.memo.order[depth];
        let letters = candidate_letters(ctx, x, y);
        let count = letters.len();
        if self.candidates.len() <= round {
            self.candidates.resize_with(round + 1, Vec::new);
        }
        self.candidates[round] = letters;

        if count == 0 {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(count)
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let depth = self.start_depth + round;
        let (x, y) = ctx.memo.order[depth];
        let letter = self.candidates[round][choice];

        match try_letter(ctx, x, y, letter) {
            PredicateResult::Success => PredicateResult::SuccessSamePredicate,
            other => other,
        }
    }

    fn name(&self) -> &str {
        "FillSquare"
    }
}

/// Letters worth trying at `(x, y)` given the words already bound.
fn candidate_letters(ctx: &SearchContext, x: usize, y: usize) -> Vec<char> {
    let ledger = &ctx.state.ledger;
    let lexicon = &ctx.memo.lexicon;
    if let Some(word) = ledger.word_in(Slot::Row(x)) {
        vec![lexicon.word(word)[y]]
    } else if let Some(word) = ledger.word_in(Slot::Column(y)) {
        vec![lexicon.word(word)[x]]
    } else {
        lexicon.alphabet().to_vec()
    }
}

/// Run the checks for `letter` at `(x, y)`, counting a rejection.
///
/// Returns `Success` with the letter placed, or `Failure`.
pub(crate) fn try_letter(ctx: &mut SearchContext, x: usize, y: usize, letter: char) -> PredicateResult {
    match fill_cell(ctx, x, y, letter) {
        Ok(()) => PredicateResult::Success,
        Err(rejection) => {
            let total = ctx.statistics.record_rejection(rejection);
            if rejection == Rejection::Lookahead {
                report_progress(ctx, total);
            }
            PredicateResult::Failure
        }
    }
}

/// Place `letter` at `(x, y)` and commit the words it forces.
fn fill_cell(ctx: &mut SearchContext, x: usize, y: usize, letter: char) -> Result<(), Rejection> {
    let size = ctx.size();
    let mut row = ctx.state.grid.row_prefix(x, y);
    row.push(letter);
    let mut column = ctx.state.grid.column_prefix(y, x);
    column.push(letter);

    if y == 0 && x > 0 {
        let first_row = ctx.state.grid.row_prefix(0, x + 1);
        if check_transpose_prefix(&column, &first_row) == SymmetryType::NonCanonical {
            return Err(Rejection::Symmetry);
        }
    }

    ctx.place(x, y, letter);

    match ctx.memo.lexicon.completion(&row) {
        Completion::NoWord => return Err(Rejection::DeadPrefix),
        Completion::Unique(word) => {
            if x > 0 && y + 1 < size {
                let mut next_column = ctx.state.grid.column_prefix(y + 1, x);
                next_column.push(ctx.memo.lexicon.word(word)[y + 1]);
                if !ctx.memo.lexicon.has_prefix(&next_column) {
                    return Err(Rejection::Lookahead);
                }
            }
            ctx.commit(word, Slot::Row(x)).map_err(|_| Rejection::Conflict)?;
        }
        Completion::Ambiguous => {}
    }

    // In a single cell the column is the row.
    if size > 1 {
        match ctx.memo.lexicon.completion(&column) {
            Completion::NoWord => return Err(Rejection::DeadPrefix),
            Completion::Unique(word) => {
                ctx.commit(word, Slot::Column(y)).map_err(|_| Rejection::Conflict)?;
            }
            Completion::Ambiguous => {}
        }
    }

    Ok(())
}

fn report_watch(ctx: &SearchContext, depth: usize) {
    let words: Vec<String> = ctx
        .state
        .ledger
        .bindings()
        .map(|(slot, word)| format!("{}={}", slot, ctx.memo.lexicon.word_string(word)))
        .collect();
    tracing::info!(
        depth,
        statistics = %ctx.statistics,
        taken = ctx.state.ledger.len(),
        words = ?words,
        "watch depth reached"
    );
    tracing::info!("partial square:\n{}", ctx.state.grid);
}

fn report_progress(ctx: &SearchContext, cutoffs: u64) {
    if let Some(every) = ctx.memo.config.progress_every {
        if cutoffs % every == 0 {
            tracing::info!(cutoffs, seed = ?ctx.memo.config.seed, "lookahead cutoffs");
        }
    }
}
