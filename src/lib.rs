// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of a doubleword square search.
//!
//! A doubleword square is an n×n grid of letters in which every row, read
//! left to right, and every column, read top to bottom, is a word of length n
//! from a lexicon, and the 2n words are all different.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Computed once before the search:
//! - The lexicon: the words of length n, sorted and de-duplicated
//! - The letter alphabet, ordered by frequency
//! - The anti-diagonal order in which cells are filled
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - Grid - the letters placed so far
//! - ConstraintLedger - which word is bound to which row or column
//!
//! # Search Algorithm
//!
//! The search runs a short predicate program on the backtracking engine:
//!
//! 1. **InitializePredicate**: optionally place the start letter at the top left
//! 2. **FillSquarePredicate**: fill one cell per round, trying candidate letters
//!    that keep every row and column prefix alive, with a one-column lookahead
//! 3. **SolutionPredicate**: capture the finished square
//!
//! Only one of each square and its transpose is produced: the first column
//! may never sort before the first row.
//!
//! # Example
//!
//! ```
//! use doubleword_square::config::{LetterOrder, SearchConfig};
//! use doubleword_square::lexicon::Lexicon;
//! use doubleword_square::search::Solver;
//!
//! let lexicon = Lexicon::new(2, ["ab", "ac", "bd", "cd"], LetterOrder::Rarest);
//! let squares: Vec<_> = Solver::new(lexicon, SearchConfig::new(2)).unwrap().collect();
//! assert_eq!(squares.len(), 1);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod grid;
pub mod ledger;
pub mod lexicon;
pub mod predicates;
pub mod search;
pub mod solution;
pub mod state;
pub mod symmetry;
pub mod trail;

// Re-export commonly used types
pub use config::{ConfigError, LetterOrder, SearchConfig, SearchMode};
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use lexicon::Lexicon;
pub use search::{search, SearchOutcome, SearchReport, Solver};
pub use solution::Solution;
pub use trail::Trail;
