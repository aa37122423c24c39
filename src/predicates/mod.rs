// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `initialize`: InitializePredicate for placing the start letter
//! - `fill`: FillSquarePredicate, one round per cell
//! - `solution`: SolutionPredicate for capturing finished squares
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`
//!
//! A full program reads:
//!
//! ```text
//! Initialize -> FillSquare (rounds 0..) -> Counting(Solutions) -> Solution -> Suspend | Fail
//! ```

pub mod fill;
pub mod initialize;
pub mod solution;

// Re-export main predicates for convenience
pub use fill::FillSquarePredicate;
pub use initialize::InitializePredicate;
pub use solution::SolutionPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with it
/// makes the engine explore the whole search space, which is how
/// statistics-only searches count every square.
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Stops the search with the finished square still in place. The suspended
/// engine can be resumed to look for the next square.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
