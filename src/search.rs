// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Running a search.
//!
//! [`Solver`] owns the context and the engine of one search. It validates the
//! configuration, assembles the predicate program for the configured
//! [`SearchMode`] and hands finished squares out one at a time:
//!
//! ```text
//! Initialize -> FillSquare -> Counting(Solutions) -> Solution -> Suspend   (first, all)
//! Initialize -> FillSquare -> Counting(Solutions) -> Solution -> Fail      (count)
//! ```
//!
//! [`search`] drives a solver to the end the mode asks for and summarises the
//! run in a [`SearchReport`].
//!
//! # Example
//!
//! ```
//! use doubleword_square::config::{LetterOrder, SearchConfig, SearchMode};
//! use doubleword_square::lexicon::Lexicon;
//! use doubleword_square::search::{search, SearchOutcome};
//!
//! let lexicon = Lexicon::new(2, ["ab", "ac", "bd", "cd"], LetterOrder::Rarest);
//! let report = search(lexicon, &SearchConfig::new(2).with_mode(SearchMode::All)).unwrap();
//!
//! assert_eq!(report.solutions.len(), 1);
//! assert_eq!(report.solutions[0].rows, vec!["ab", "cd"]);
//! assert!(matches!(report.outcome, SearchOutcome::Solved(_)));
//! ```

use crate::config::{ConfigError, SearchConfig, SearchMode};
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::lexicon::Lexicon;
use crate::predicates::{
    FailPredicate, FillSquarePredicate, InitializePredicate, SolutionPredicate, SuspendPredicate,
};
use crate::solution::Solution;
use crate::state::{Counters, Statistics};

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The first square found.
    Solved(Solution),
    /// Squares were found and counted but not kept (count mode).
    Counted(u64),
    /// No square exists for this lexicon and configuration.
    Exhausted,
}

/// Result of [`search`].
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Squares found, in search order. Empty in count mode.
    pub solutions: Vec<Solution>,
    pub statistics: Statistics,
}

impl SearchReport {
    /// Number of squares found, including those not retained.
    pub fn solution_count(&self) -> u64 {
        self.statistics.get(Counters::Solutions)
    }
}

/// A search in progress.
///
/// Iterating a solver resumes the suspended engine, yielding each square as
/// it is completed. In count mode the first call runs the whole search and
/// yields nothing.
pub struct Solver {
    ctx: SearchContext,
    engine: Option<SearchEngine>,
}

impl Solver {
    pub fn new(lexicon: Lexicon, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate(&lexicon)?;
        let ctx = SearchContext::new(lexicon, config);
        let engine = program(&ctx);
        Ok(Self {
            ctx,
            engine: Some(engine),
        })
    }

    /// Run until the next square is completed or the search space is exhausted.
    pub fn next_solution(&mut self) -> Option<Solution> {
        let engine = self.engine.take()?;
        match engine.search(&mut self.ctx) {
            Some(suspended) => {
                self.engine = Some(suspended);
                self.ctx.state.found.take()
            }
            None => {
                tracing::debug!(statistics = %self.ctx.statistics, "search space exhausted");
                None
            }
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    /// Has the engine explored the whole search space?
    pub fn is_exhausted(&self) -> bool {
        self.engine.is_none()
    }
}

impl Iterator for Solver {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        self.next_solution()
    }
}

/// The predicate program for the context's configuration.
fn program(ctx: &SearchContext) -> SearchEngine {
    let mode = ctx.memo.config.mode;
    let builder = EngineBuilder::new()
        .add(Box::new(InitializePredicate))
        .add(Box::new(FillSquarePredicate::new(
            InitializePredicate::start_depth(ctx),
        )))
        .add(Statistics::counting_predicate(Counters::Solutions))
        .add(Box::new(SolutionPredicate::new(mode != SearchMode::Count)));
    match mode {
        SearchMode::First | SearchMode::All => builder.terminal(Box::new(SuspendPredicate)).build(),
        SearchMode::Count => builder.terminal(Box::new(FailPredicate)).build(),
    }
}

/// Search for doubleword squares as the configuration's mode asks.
pub fn search(lexicon: Lexicon, config: &SearchConfig) -> Result<SearchReport, ConfigError> {
    let mut solver = Solver::new(lexicon, config.clone())?;
    tracing::debug!(
        size = config.size,
        seed = ?config.seed,
        mode = ?config.mode,
        words = solver.context().memo.lexicon.len(),
        "search started"
    );

    let solutions: Vec<Solution> = match config.mode {
        SearchMode::First => solver.next_solution().into_iter().collect(),
        SearchMode::All => solver.by_ref().collect(),
        SearchMode::Count => {
            // The program ends in Fail, so this runs to exhaustion.
            let none = solver.next_solution();
            debug_assert!(none.is_none());
            Vec::new()
        }
    };

    let found = solver.statistics().get(Counters::Solutions);
    let outcome = match solutions.first() {
        Some(first) => SearchOutcome::Solved(first.clone()),
        None if found > 0 => SearchOutcome::Counted(found),
        None => SearchOutcome::Exhausted,
    };

    Ok(SearchReport {
        outcome,
        solutions,
        statistics: solver.statistics().clone(),
    })
}
