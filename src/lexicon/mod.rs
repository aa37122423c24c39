// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The word list a square is filled from.
//!
//! A [`Lexicon`] holds the words of exactly one length, sorted and without
//! duplicates. Words are kept as `Vec<char>` so that the i-th letter of a word
//! is a direct index and prefix tests are slice comparisons. Code point order
//! is the same as the byte order of the UTF-8 strings, so a word file sorted
//! with `sort` stays in the same order here.
//!
//! All prefix queries go through one binary search, [`Lexicon::lower_bound`],
//! which finds the first word that is not smaller than the prefix. Because the
//! list is sorted, the words sharing a prefix form one contiguous run starting
//! at that position.

use crate::config::LetterOrder;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Index of a word in its lexicon. Word identity in the ledger is this index.
pub type WordId = usize;

/// Errors raised while loading a word list.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The word file could not be read.
    #[error("cannot read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How many lexicon words extend a given prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// No word starts with the prefix.
    NoWord,
    /// Exactly one word starts with the prefix.
    Unique(WordId),
    /// Two or more words start with the prefix.
    Ambiguous,
}

/// Immutable, sorted list of words of a single length.
#[derive(Debug, Clone)]
pub struct Lexicon {
    size: usize,
    words: Vec<Vec<char>>,
    alphabet: Vec<char>,
    words_read: usize,
}

impl Lexicon {
    /// Build a lexicon of words of length `size` from arbitrary input words.
    ///
    /// Each input is trimmed; empty entries are ignored, entries of any other
    /// length are dropped. The kept words are sorted and de-duplicated, and the
    /// search alphabet is derived from their letter counts.
    pub fn new<I, S>(size: usize, words: I, order: LetterOrder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words_read = 0;
        let mut kept = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            words_read += 1;
            let letters: Vec<char> = word.chars().collect();
            if letters.len() == size {
                kept.push(letters);
            }
        }
        kept.sort_unstable();
        kept.dedup();

        let alphabet = letter_order(&kept, order);
        Self {
            size,
            words: kept,
            alphabet,
            words_read,
        }
    }

    /// Read a word file (one word per line) and keep the words of length `size`.
    pub fn load(path: impl AsRef<Path>, size: usize, order: LetterOrder) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::new(size, text.lines(), order);

        tracing::info!(
            path = %path.display(),
            read = lexicon.words_read,
            kept = lexicon.len(),
            size,
            "loaded word list"
        );
        if lexicon.is_empty() {
            tracing::warn!(size, "word list has no words of the requested length");
        } else {
            tracing::info!(
                letters = %lexicon.alphabet.iter().collect::<String>(),
                "letter order"
            );
        }
        Ok(lexicon)
    }

    /// Length of every word in the lexicon.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct words kept.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of non-empty input entries seen before length filtering.
    pub fn words_read(&self) -> usize {
        self.words_read
    }

    /// Letters occurring in the lexicon, in the order the search tries them.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[inline]
    pub fn word(&self, id: WordId) -> &[char] {
        &self.words[id]
    }

    pub fn word_string(&self, id: WordId) -> String {
        self.words[id].iter().collect()
    }

    /// Index of the first word that is not smaller than `prefix`.
    #[inline]
    pub fn lower_bound(&self, prefix: &[char]) -> usize {
        self.words.partition_point(|word| word.as_slice() < prefix)
    }

    /// Does any word start with `prefix`?
    pub fn has_prefix(&self, prefix: &[char]) -> bool {
        self.words
            .get(self.lower_bound(prefix))
            .is_some_and(|word| word.starts_with(prefix))
    }

    /// Classify the words extending `prefix`.
    ///
    /// Only the first match and its successor are inspected: the match is
    /// unique exactly when the next word does not exist or does not share the
    /// prefix.
    pub fn completion(&self, prefix: &[char]) -> Completion {
        let i = self.lower_bound(prefix);
        match self.words.get(i) {
            Some(word) if word.starts_with(prefix) => match self.words.get(i + 1) {
                Some(next) if next.starts_with(prefix) => Completion::Ambiguous,
                _ => Completion::Unique(i),
            },
            _ => Completion::NoWord,
        }
    }

    /// Look up a whole word.
    pub fn find(&self, word: &[char]) -> Option<WordId> {
        self.words
            .binary_search_by(|candidate| candidate.as_slice().cmp(word))
            .ok()
    }
}

/// Order the letters of `words` by how often they occur.
fn letter_order(words: &[Vec<char>], order: LetterOrder) -> Vec<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for &letter in words.iter().flatten() {
        *counts.entry(letter).or_default() += 1;
    }

    let mut letters: Vec<(char, usize)> = counts.into_iter().collect();
    match order {
        LetterOrder::Rarest => letters.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0))),
        LetterOrder::Frequent => letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0))),
    }
    letters.into_iter().map(|(letter, _)| letter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sample() -> Lexicon {
        Lexicon::new(
            2,
            ["ox", "an", "at", "cat", "as", "ha", "an", "", "  "],
            LetterOrder::Rarest,
        )
    }

    #[test]
    fn test_filters_sorts_and_dedups() {
        let lexicon = sample();
        assert_eq!(lexicon.size(), 2);
        assert_eq!(lexicon.len(), 5);
        assert_eq!(lexicon.words_read(), 7);
        let words: Vec<String> = (0..lexicon.len()).map(|i| lexicon.word_string(i)).collect();
        assert_eq!(words, vec!["an", "as", "at", "ha", "ox"]);
    }

    #[test]
    fn test_completion() {
        let lexicon = sample();
        assert_eq!(lexicon.completion(&chars("a")), Completion::Ambiguous);
        assert_eq!(lexicon.completion(&chars("h")), Completion::Unique(3));
        assert_eq!(lexicon.completion(&chars("at")), Completion::Unique(2));
        assert_eq!(lexicon.completion(&chars("b")), Completion::NoWord);
        assert_eq!(lexicon.completion(&chars("az")), Completion::NoWord);
        assert_eq!(lexicon.completion(&[]), Completion::Ambiguous);
    }

    #[test]
    fn test_last_word_is_unique() {
        let lexicon = sample();
        assert_eq!(lexicon.completion(&chars("o")), Completion::Unique(4));
        assert_eq!(lexicon.completion(&chars("ox")), Completion::Unique(4));
        assert_eq!(lexicon.completion(&chars("p")), Completion::NoWord);
    }

    #[test]
    fn test_prefix_and_find() {
        let lexicon = sample();
        assert!(lexicon.has_prefix(&chars("a")));
        assert!(lexicon.has_prefix(&chars("ha")));
        assert!(!lexicon.has_prefix(&chars("x")));
        assert_eq!(lexicon.find(&chars("as")), Some(1));
        assert_eq!(lexicon.find(&chars("aa")), None);
    }

    #[test]
    fn test_letter_orders() {
        let rarest = sample();
        assert_eq!(rarest.alphabet(), &['h', 'n', 'o', 's', 't', 'x', 'a']);

        let frequent = Lexicon::new(2, ["an", "as", "at", "ha", "ox"], LetterOrder::Frequent);
        assert_eq!(frequent.alphabet(), &['a', 'h', 'n', 'o', 's', 't', 'x']);
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::new(3, ["an", "as"], LetterOrder::Rarest);
        assert!(lexicon.is_empty());
        assert!(lexicon.alphabet().is_empty());
        assert_eq!(lexicon.completion(&chars("a")), Completion::NoWord);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cab\nabc\n\nab\nbca\nabc").unwrap();

        let lexicon = Lexicon::load(file.path(), 3, LetterOrder::Rarest).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.word_string(0), "abc");
        assert_eq!(lexicon.word_string(2), "cab");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = Lexicon::load(&missing, 3, LetterOrder::Rarest).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
