// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to provide automatic
//! state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states; it plays the
//! role of the recursion stack of a depth-first search. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A predicate that succeeded without offering choices is deterministic:
//! backtracking into it undoes its changes and continues backtracking.
//!
//! # Example
//!
//! ```
//! use doubleword_square::config::{LetterOrder, SearchConfig};
//! use doubleword_square::context::SearchContext;
//! use doubleword_square::engine::EngineBuilder;
//! use doubleword_square::lexicon::Lexicon;
//! use doubleword_square::predicates::{FillSquarePredicate, SuspendPredicate};
//!
//! let lexicon = Lexicon::new(1, ["a", "b"], LetterOrder::Rarest);
//! let mut ctx = SearchContext::new(lexicon, SearchConfig::new(1));
//! let engine = EngineBuilder::new()
//!     .add(Box::new(FillSquarePredicate::new(0)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! if let Some(engine) = engine.search(&mut ctx) {
//!     assert!(ctx.state.grid.is_full());
//!     // Resuming looks for the next square
//!     let _ = engine.search(&mut ctx);
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const STACK_CAPACITY: usize = 128;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }

    /// After a deterministic success there is nothing left to retry.
    fn exhaust(&mut self) {
        self.in_choice_mode = true;
        self.current_choice = 0;
        self.num_choices = 0;
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Whether the last `search` call returned through a Suspend.
    suspended: bool,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(STACK_CAPACITY),
            suspended: false,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again resumes by
    ///   backtracking from the suspension point
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Results are delivered via side effects on `ctx`, not by the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            // Resume: treat the suspending predicate as failed.
            self.suspended = false;
            self.stack.pop();
        } else {
            self.stack.clear();
            self.try_count = 0;
            self.retry_count = 0;

            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));
        }

        // Main execution loop
        loop {
            // Check if we've backtracked past the first predicate
            let Some(entry) = self.stack.last_mut() else {
                tracing::debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        self.exhaust_top();
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.exhaust_top();
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Backtrack
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        // Enter choice mode; choices start from the state try_pred left
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                // Check if we've exhausted all choices
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    fn exhaust_top(&mut self) {
        if let Some(entry) = self.stack.last_mut() {
            entry.exhaust();
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |e| e.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |e| (e.predicate_index, e.round + 1));

        self.stack.push(StackEntry::new(pred_index, next_round, ctx.trail.len()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried since the search started.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a [`SearchEngine`] whose program always ends with a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate and finish the program.
    pub fn terminal<T: TerminalPredicate + 'static>(self, predicate: Box<T>) -> TerminatedBuilder {
        let mut predicates = self.predicates;
        predicates.push(predicate);
        TerminatedBuilder { predicates }
    }
}

/// An [`EngineBuilder`] after its terminal predicate has been added.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
