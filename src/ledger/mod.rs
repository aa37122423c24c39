// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bidirectional word/slot bindings.
//!
//! Once the letters placed in a row or column leave only one lexicon word that
//! can complete it, that word is committed to the row's or column's slot. The
//! ledger keeps the binding in both directions and refuses a commit that would
//! give a slot a second word or a word a second slot. Every row and column of
//! a finished square is therefore bound to its own distinct word.
//!
//! Invariant: `by_word[w] == Some(s)` if and only if `by_slot[s] == Some(w)`.

use crate::lexicon::WordId;
use std::fmt;
use thiserror::Error;

/// A row or a column of the square.
///
/// Ordering puts every row before every column, each by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Row(usize),
    Column(usize),
}

impl Slot {
    /// Position of the slot in a dense table of `2 * size` slots.
    #[inline]
    fn dense_index(self, size: usize) -> usize {
        match self {
            Slot::Row(x) => x,
            Slot::Column(y) => size + y,
        }
    }

    #[inline]
    fn from_dense_index(index: usize, size: usize) -> Self {
        if index < size {
            Slot::Row(index)
        } else {
            Slot::Column(index - size)
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Row(x) => write!(f, "row {}", x),
            Slot::Column(y) => write!(f, "column {}", y),
        }
    }
}

/// A binding added by [`ConstraintLedger::try_commit`], to be rolled back later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub word: WordId,
    pub slot: Slot,
}

/// A commit that would break the one-word-one-slot rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("{slot} already holds word {held}")]
    SlotTaken { slot: Slot, held: WordId },

    #[error("word {word} is already used by {held_by}")]
    WordTaken { word: WordId, held_by: Slot },
}

/// Word/slot bindings of the current search path.
#[derive(Debug, Clone)]
pub struct ConstraintLedger {
    size: usize,
    by_word: Vec<Option<Slot>>,
    by_slot: Vec<Option<WordId>>,
    bound: usize,
}

impl ConstraintLedger {
    /// Create an empty ledger for a `size`×`size` square over `words` words.
    pub fn new(size: usize, words: usize) -> Self {
        Self {
            size,
            by_word: vec![None; words],
            by_slot: vec![None; 2 * size],
            bound: 0,
        }
    }

    /// Bind `word` to `slot`.
    ///
    /// Returns `Ok(Some(commit))` when a new binding was added, `Ok(None)`
    /// when exactly this binding already exists (nothing to undo), and a
    /// [`Conflict`] when either side is bound elsewhere.
    pub fn try_commit(&mut self, word: WordId, slot: Slot) -> Result<Option<Commit>, Conflict> {
        let index = slot.dense_index(self.size);
        match (self.by_slot[index], self.by_word[word]) {
            (Some(held), _) if held != word => Err(Conflict::SlotTaken { slot, held }),
            (_, Some(held_by)) if held_by != slot => Err(Conflict::WordTaken { word, held_by }),
            (Some(_), Some(_)) => Ok(None),
            _ => {
                self.by_slot[index] = Some(word);
                self.by_word[word] = Some(slot);
                self.bound += 1;
                Ok(Some(Commit { word, slot }))
            }
        }
    }

    /// Remove a binding added by [`try_commit`](Self::try_commit).
    pub fn rollback(&mut self, commit: Commit) {
        let index = commit.slot.dense_index(self.size);
        debug_assert_eq!(self.by_slot[index], Some(commit.word), "rollback of unbound {:?}", commit);
        debug_assert_eq!(self.by_word[commit.word], Some(commit.slot), "rollback of unbound {:?}", commit);
        self.by_slot[index] = None;
        self.by_word[commit.word] = None;
        self.bound -= 1;
    }

    #[inline]
    pub fn word_in(&self, slot: Slot) -> Option<WordId> {
        self.by_slot[slot.dense_index(self.size)]
    }

    #[inline]
    pub fn slot_of(&self, word: WordId) -> Option<Slot> {
        self.by_word[word]
    }

    /// Number of active bindings.
    pub fn len(&self) -> usize {
        self.bound
    }

    pub fn is_empty(&self) -> bool {
        self.bound == 0
    }

    /// Active bindings, rows first then columns.
    pub fn bindings(&self) -> impl Iterator<Item = (Slot, WordId)> + '_ {
        self.by_slot
            .iter()
            .enumerate()
            .filter_map(move |(index, word)| word.map(|w| (Slot::from_dense_index(index, self.size), w)))
    }

    /// Check that the two directions are exact inverses.
    pub fn is_consistent(&self) -> bool {
        let forward = self.by_word.iter().enumerate().all(|(word, slot)| match slot {
            Some(slot) => self.word_in(*slot) == Some(word),
            None => true,
        });
        let backward = self.bindings().all(|(slot, word)| self.by_word[word] == Some(slot));
        forward && backward && self.bindings().count() == self.bound
    }
}
