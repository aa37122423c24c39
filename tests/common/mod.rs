// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use doubleword_square::config::{LetterOrder, SearchConfig, SearchMode};
use doubleword_square::context::SearchContext;
use doubleword_square::grid::Position;
use doubleword_square::ledger::Slot;
use doubleword_square::lexicon::Lexicon;
use doubleword_square::search::{search, SearchReport};
use doubleword_square::solution::Solution;
use doubleword_square::symmetry::{check_transpose_prefix, SymmetryType};
use doubleword_square::{Predicate, PredicateResult};
use std::cell::Cell;
use std::rc::Rc;

pub fn lexicon(size: usize, words: &[&str]) -> Lexicon {
    Lexicon::new(size, words.iter().copied(), LetterOrder::Rarest)
}

pub fn context(size: usize, words: &[&str]) -> SearchContext {
    SearchContext::new(lexicon(size, words), SearchConfig::new(size))
}

/// Every square over `words`, collected by an exhaustive search.
pub fn all_squares(size: usize, words: &[&str]) -> SearchReport {
    let config = SearchConfig::new(size).with_mode(SearchMode::All);
    search(lexicon(size, words), &config).expect("valid configuration")
}

/// Squares whose rows and columns are distinct lexicon words and whose first
/// column sorts after the first row, found by trying every choice of rows.
pub fn brute_force_count(size: usize, words: &[&str]) -> usize {
    let lexicon = lexicon(size, words);
    let ids: Vec<usize> = (0..lexicon.len()).collect();
    let mut count = 0;
    let mut rows = Vec::with_capacity(size);
    choose_rows(&lexicon, &ids, &mut rows, &mut count);
    count
}

fn choose_rows(lexicon: &Lexicon, ids: &[usize], rows: &mut Vec<usize>, count: &mut usize) {
    let size = lexicon.size();
    if rows.len() == size {
        let mut all: Vec<Vec<char>> = rows.iter().map(|&r| lexicon.word(r).to_vec()).collect();
        for y in 0..size {
            let column: Vec<char> = rows.iter().map(|&r| lexicon.word(r)[y]).collect();
            if lexicon.find(&column).is_none() {
                return;
            }
            all.push(column);
        }
        let mut distinct = all.clone();
        distinct.sort();
        distinct.dedup();
        if distinct.len() == all.len() && all[size] > all[0] {
            *count += 1;
        }
        return;
    }
    for &id in ids {
        rows.push(id);
        choose_rows(lexicon, ids, rows, count);
        rows.pop();
    }
}

/// A predicate that writes one of the given letters into a fixed cell.
#[derive(Debug)]
pub struct PlaceLettersPredicate {
    pub cell: Position,
    pub letters: Vec<char>,
}

impl PlaceLettersPredicate {
    pub fn new(cell: Position, letters: &str) -> Self {
        Self {
            cell,
            letters: letters.chars().collect(),
        }
    }
}

impl Predicate for PlaceLettersPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Choices(self.letters.len())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let (x, y) = self.cell;
        ctx.place(x, y, self.letters[choice]);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "PlaceLetters"
    }
}

/// Fills row 0 one cell per round, offering the same letters at each cell.
#[derive(Debug)]
pub struct FillFirstRowPredicate {
    pub letters: Vec<char>,
}

impl Predicate for FillFirstRowPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == ctx.size() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(self.letters.len())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        ctx.place(0, round, self.letters[choice]);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "FillFirstRow"
    }
}

/// Compare a finished square's first column with its first row.
pub fn canonicality(solution: &Solution) -> SymmetryType {
    let first_row: Vec<char> = solution.rows[0].chars().collect();
    let first_column: Vec<char> = solution.columns()[0].chars().collect();
    check_transpose_prefix(&first_column, &first_row)
}

/// Panics unless the ledger is consistent, every bound word agrees with the
/// letters of its slot, and every filled row and column prefix starts a word.
pub fn assert_search_invariants(ctx: &SearchContext) {
    let grid = &ctx.state.grid;
    let lexicon = &ctx.memo.lexicon;
    let size = ctx.size();
    assert!(ctx.state.ledger.is_consistent());

    for i in 0..size {
        let row: Vec<char> = (0..size).map_while(|y| grid.get(i, y)).collect();
        assert!(row.is_empty() || lexicon.has_prefix(&row), "row {} is {:?}", i, row);
        let column: Vec<char> = (0..size).map_while(|x| grid.get(x, i)).collect();
        assert!(
            column.is_empty() || lexicon.has_prefix(&column),
            "column {} is {:?}",
            i,
            column
        );
    }

    for (slot, word) in ctx.state.ledger.bindings() {
        let letters = lexicon.word(word);
        for (k, &letter) in letters.iter().enumerate() {
            let cell = match slot {
                Slot::Row(x) => grid.get(x, k),
                Slot::Column(y) => grid.get(k, y),
            };
            assert!(cell.is_none() || cell == Some(letter), "{} disagrees with its word", slot);
        }
    }
}

/// Runs an inner predicate and checks the search invariants after every
/// successful step, counting the checks made.
#[derive(Debug)]
pub struct CheckedPredicate<P: Predicate> {
    pub inner: P,
    pub checks: Rc<Cell<usize>>,
}

impl<P: Predicate> CheckedPredicate<P> {
    pub fn new(inner: P) -> (Self, Rc<Cell<usize>>) {
        let checks = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                checks: Rc::clone(&checks),
            },
            checks,
        )
    }

    fn check(&self, ctx: &SearchContext, result: PredicateResult) -> PredicateResult {
        if matches!(
            result,
            PredicateResult::Success | PredicateResult::SuccessSamePredicate
        ) {
            assert_search_invariants(ctx);
            self.checks.set(self.checks.get() + 1);
        }
        result
    }
}

impl<P: Predicate> Predicate for CheckedPredicate<P> {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let result = self.inner.try_pred(ctx, round);
        self.check(ctx, result)
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let result = self.inner.retry_pred(ctx, round, choice);
        self.check(ctx, result)
    }

    fn name(&self) -> &str {
        "Checked"
    }
}
