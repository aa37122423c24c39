// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search parameters and their validation.
//!
//! A [`SearchConfig`] is checked against the lexicon once, before any search
//! work happens. The search itself trusts a validated config.

use crate::lexicon::Lexicon;
use thiserror::Error;

/// Order in which the search tries letters at an unconstrained cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LetterOrder {
    /// Least frequent letters first.
    #[default]
    Rarest,
    /// Most frequent letters first.
    Frequent,
}

/// What the search does when it completes a square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchMode {
    /// Stop at the first solution.
    #[default]
    First,
    /// Enumerate and keep every solution.
    All,
    /// Enumerate every solution, keeping only the statistics.
    Count,
}

/// Parameters of one search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Side length n of the square.
    pub size: usize,
    /// Letter placed in the top-left cell before the search starts.
    pub seed: Option<char>,
    /// Depth at which to log statistics and the partial square.
    pub watch_depth: Option<usize>,
    pub mode: SearchMode,
    /// Log a progress line every this many lookahead cutoffs.
    pub progress_every: Option<u64>,
}

impl SearchConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            seed: None,
            watch_depth: None,
            mode: SearchMode::First,
            progress_every: None,
        }
    }

    pub fn with_seed(mut self, seed: char) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_watch_depth(mut self, depth: usize) -> Self {
        self.watch_depth = Some(depth);
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_progress_every(mut self, cutoffs: u64) -> Self {
        self.progress_every = Some(cutoffs);
        self
    }

    /// Number of cells, which is also the depth of a finished square.
    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    /// Check the parameters against the lexicon the search will use.
    pub fn validate(&self, lexicon: &Lexicon) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if lexicon.size() != self.size {
            return Err(ConfigError::SizeMismatch {
                size: self.size,
                lexicon: lexicon.size(),
            });
        }
        if let Some(seed) = self.seed {
            if !lexicon.alphabet().contains(&seed) {
                return Err(ConfigError::UnknownSeed(seed));
            }
        }
        if let Some(depth) = self.watch_depth {
            if depth >= self.cells() {
                return Err(ConfigError::WatchDepthOutOfRange {
                    depth,
                    cells: self.cells(),
                });
            }
        }
        if self.progress_every == Some(0) {
            return Err(ConfigError::ZeroProgressInterval);
        }
        Ok(())
    }
}

/// Rejected search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("square size must be at least 1")]
    ZeroSize,

    #[error("square size {size} does not match lexicon word length {lexicon}")]
    SizeMismatch { size: usize, lexicon: usize },

    #[error("start letter '{0}' does not occur in any word of the lexicon")]
    UnknownSeed(char),

    #[error("watch depth {depth} is outside the square ({cells} cells)")]
    WatchDepthOutOfRange { depth: usize, cells: usize },

    #[error("progress interval must be positive")]
    ZeroProgressInterval,
}
