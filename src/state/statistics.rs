// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the fill predicate each time it rejects a letter.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Finished squares.
    Solutions,
    /// Letters written into a cell.
    Placements,
}

/// Why a candidate letter was turned down.
#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Rejection {
    /// The first column would sort before the first row.
    Symmetry,
    /// No word starts with the row or column prefix.
    DeadPrefix,
    /// The row's only possible word leaves the next column without a word.
    Lookahead,
    /// The forced word is already bound to another slot, or the slot to another word.
    Conflict,
}

const COUNT: usize = Counters::COUNT + Rejection::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that increments the given counter each time it is reached.
    pub fn counting_predicate(counter: Counters) -> Box<dyn Predicate> {
        Box::new(CountingPredicate { counter })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one rejected letter; returns the new total for that kind.
    pub(crate) fn record_rejection(&mut self, rejection: Rejection) -> u64 {
        let slot = &mut self.stats[Counters::COUNT + rejection as usize];
        *slot += 1;
        *slot
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of letters rejected for the given reason.
    pub fn rejections(&self, rejection: Rejection) -> u64 {
        self.stats[Counters::COUNT + rejection as usize]
    }

    /// Rejections of every kind.
    pub fn total_rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counters = Counters::iter().map(|c| (<&'static str>::from(c), self.get(c)));
        let rejections = Rejection::iter().map(|r| (<&'static str>::from(r), self.rejections(r)));
        let mut first = true;
        for (name, value) in counters.chain(rejections) {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", name, value)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct CountingPredicate {
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(self.counter);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
